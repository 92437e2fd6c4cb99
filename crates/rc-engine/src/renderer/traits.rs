//! Renderer contract.
//!
//! The engine never touches a graphics API. A platform crate implements
//! [`Renderer`] and receives a complete [`FrameData`] once per tick.

use super::instance::DrawCommand;

/// Complete frame data for rendering.
pub struct FrameData<'a> {
    /// Draw commands in order: world sprites first, then HUD.
    pub commands: &'a [DrawCommand],
    /// Background colour (RGB).
    pub clear_color: [u8; 3],
}

/// Renderer trait for graphics backends.
///
/// # Example Implementation
///
/// ```ignore
/// struct LogRenderer;
///
/// impl Renderer for LogRenderer {
///     fn backend(&self) -> &'static str { "log" }
///
///     fn draw(&mut self, frame: &FrameData) {
///         log::info!("{} draw commands", frame.commands.len());
///     }
/// }
/// ```
pub trait Renderer {
    /// Backend identifier (e.g., "macroquad", "headless").
    fn backend(&self) -> &'static str;

    /// Draw a complete frame. Nothing from the frame is retained afterwards.
    fn draw(&mut self, frame: &FrameData);
}
