/// A sprite drawn centred at a screen position, rotated about its centre.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteInstance {
    /// Sprite registry name.
    pub sprite: String,
    /// Centre X in pixels.
    pub x: f32,
    /// Centre Y in pixels.
    pub y: f32,
    /// Draw width in pixels.
    pub width: f32,
    /// Draw height in pixels.
    pub height: f32,
    /// Rotation in radians, counter-clockwise on screen.
    pub rotation: f32,
    /// Opacity (0.0 = invisible, 1.0 = opaque).
    pub alpha: f32,
}

/// A filled, axis-aligned rectangle in screen space (top-left anchored).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectInstance {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// RGBA colour.
    pub color: [u8; 4],
}

/// One draw operation. Commands are drawn in buffer order.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Sprite(SpriteInstance),
    Rect(RectInstance),
}

/// Per-frame list of draw commands, rebuilt every tick.
pub struct RenderBuffer {
    pub commands: Vec<DrawCommand>,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self::with_capacity(16)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            commands: Vec::with_capacity(capacity),
        }
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn push_sprite(&mut self, sprite: SpriteInstance) {
        self.commands.push(DrawCommand::Sprite(sprite));
    }

    pub fn push_rect(&mut self, rect: RectInstance) {
        self.commands.push(DrawCommand::Rect(rect));
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Iterate over sprite commands only.
    pub fn sprites(&self) -> impl Iterator<Item = &SpriteInstance> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Sprite(s) => Some(s),
            DrawCommand::Rect(_) => None,
        })
    }

    /// Iterate over rectangle commands only.
    pub fn rects(&self) -> impl Iterator<Item = &RectInstance> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Rect(r) => Some(r),
            DrawCommand::Sprite(_) => None,
        })
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}
