use glam::Vec2;
use crate::api::types::EntityId;
use crate::components::sprite::SpriteComponent;

/// A drawable thing in the scene.
/// Game logic owns the simulation state; entities only mirror what is drawn.
#[derive(Debug, Clone)]
pub struct Entity {
    /// Unique identifier.
    pub id: EntityId,
    /// String tag for finding entities by name.
    pub tag: String,
    /// Hidden entities are skipped by the render system.
    pub visible: bool,
    /// Centre position in world units.
    pub pos: Vec2,
    /// Rotation in radians, counter-clockwise on screen.
    pub rotation: f32,
    /// Rendered size in pixels.
    pub size: Vec2,
    /// Sprite to draw. Entities without one are not drawn.
    pub sprite: Option<SpriteComponent>,
}

impl Entity {
    /// Create a new entity with the given ID at the origin.
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            tag: String::new(),
            visible: true,
            pos: Vec2::ZERO,
            rotation: 0.0,
            size: Vec2::ONE,
            sprite: None,
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_pos(mut self, pos: Vec2) -> Self {
        self.pos = pos;
        self
    }

    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_size(mut self, size: Vec2) -> Self {
        self.size = size;
        self
    }

    pub fn with_sprite(mut self, sprite: SpriteComponent) -> Self {
        self.sprite = Some(sprite);
        self
    }
}
