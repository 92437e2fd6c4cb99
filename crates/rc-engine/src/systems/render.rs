use glam::Vec2;
use crate::components::entity::Entity;
use crate::renderer::camera::Camera2D;
use crate::renderer::instance::{RenderBuffer, SpriteInstance};

/// Build sprite draw commands for a set of entities.
/// Positions are converted to pixels through the camera; hidden, sprite-less
/// and off-screen entities are skipped.
pub fn build_render_buffer<'a>(
    entities: impl Iterator<Item = &'a Entity>,
    camera: &Camera2D,
    buffer: &mut RenderBuffer,
) {
    buffer.clear();

    for entity in entities {
        if !entity.visible {
            continue;
        }

        let sprite = match &entity.sprite {
            Some(s) => s,
            None => continue,
        };

        let center = camera.world_to_screen(entity.pos);
        // Bounding radius covers any rotation.
        let half = Vec2::splat(entity.size.length() / 2.0);
        if !camera.is_rect_visible(center, half) {
            continue;
        }

        buffer.push_sprite(SpriteInstance {
            sprite: sprite.name.clone(),
            x: center.x,
            y: center.y,
            width: entity.size.x,
            height: entity.size.y,
            rotation: entity.rotation,
            alpha: sprite.alpha,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::EntityId;
    use crate::components::sprite::SpriteComponent;

    fn camera() -> Camera2D {
        Camera2D::new(32.0, Vec2::new(1280.0, 720.0))
    }

    #[test]
    fn sprite_is_centred_at_position_times_ppu() {
        let entities = vec![Entity::new(EntityId(1))
            .with_pos(Vec2::new(3.0, 2.0))
            .with_size(Vec2::new(50.0, 25.0))
            .with_rotation(0.5)
            .with_sprite(SpriteComponent::named("car"))];

        let mut buffer = RenderBuffer::new();
        build_render_buffer(entities.iter(), &camera(), &mut buffer);

        let sprite = buffer.sprites().next().unwrap();
        assert_eq!((sprite.x, sprite.y), (96.0, 64.0));
        assert_eq!((sprite.width, sprite.height), (50.0, 25.0));
        assert_eq!(sprite.rotation, 0.5);
        assert_eq!(sprite.sprite, "car");
    }

    #[test]
    fn hidden_and_spriteless_entities_are_skipped() {
        let mut hidden = Entity::new(EntityId(1)).with_sprite(SpriteComponent::named("car"));
        hidden.visible = false;
        let bare = Entity::new(EntityId(2));

        let entities = vec![hidden, bare];
        let mut buffer = RenderBuffer::new();
        build_render_buffer(entities.iter(), &camera(), &mut buffer);
        assert!(buffer.is_empty());
    }

    #[test]
    fn off_screen_entities_are_culled() {
        let entities = vec![Entity::new(EntityId(1))
            .with_pos(Vec2::new(-10.0, 0.0))
            .with_size(Vec2::new(50.0, 25.0))
            .with_sprite(SpriteComponent::named("car"))];
        let mut buffer = RenderBuffer::new();
        build_render_buffer(entities.iter(), &camera(), &mut buffer);
        assert!(buffer.is_empty());
    }
}
