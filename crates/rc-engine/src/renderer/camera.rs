use glam::Vec2;

/// Maps world units to screen pixels.
/// World origin sits at `origin` (pixels); Y grows downward like the screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera2D {
    /// Pixels per world unit.
    pub pixels_per_unit: f32,
    /// Screen position of the world origin, in pixels.
    pub origin: Vec2,
    /// Viewport size in pixels.
    pub viewport: Vec2,
}

impl Camera2D {
    pub fn new(pixels_per_unit: f32, viewport: Vec2) -> Self {
        Self {
            pixels_per_unit,
            origin: Vec2::ZERO,
            viewport,
        }
    }

    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        self.origin + world * self.pixels_per_unit
    }

    /// Check whether a screen-space rectangle (centre + half size) overlaps the viewport.
    pub fn is_rect_visible(&self, center: Vec2, half_size: Vec2) -> bool {
        center.x + half_size.x >= 0.0
            && center.x - half_size.x <= self.viewport.x
            && center.y + half_size.y >= 0.0
            && center.y - half_size.y <= self.viewport.y
    }
}
