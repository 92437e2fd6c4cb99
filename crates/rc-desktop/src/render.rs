use std::collections::HashMap;

use anyhow::anyhow;
use macroquad::color::Color;
use macroquad::math::vec2;
use macroquad::shapes::draw_rectangle;
use macroquad::texture::{draw_texture_ex, DrawTextureParams, Image, Texture2D};
use macroquad::window::clear_background;
use rc_engine::{DrawCommand, FrameData, Renderer, SpriteImage};

/// Draws engine frames with macroquad. Owns the decoded sprite textures.
pub struct MacroquadRenderer {
    textures: HashMap<String, Texture2D>,
}

impl MacroquadRenderer {
    /// Decode every sprite image into a texture. Any undecodable image is fatal.
    pub fn from_images(images: Vec<SpriteImage>) -> anyhow::Result<Self> {
        let mut textures = HashMap::with_capacity(images.len());
        for image in images {
            let decoded = Image::from_file_with_format(&image.bytes, None)
                .map_err(|e| anyhow!("failed to decode sprite {}: {:?}", image.name, e))?;
            log::info!("sprite {}: {}x{}", image.name, decoded.width, decoded.height);
            textures.insert(image.name, Texture2D::from_image(&decoded));
        }
        Ok(Self { textures })
    }
}

impl Renderer for MacroquadRenderer {
    fn backend(&self) -> &'static str {
        "macroquad"
    }

    fn draw(&mut self, frame: &FrameData) {
        let [r, g, b] = frame.clear_color;
        clear_background(Color::from_rgba(r, g, b, 255));

        for command in frame.commands {
            match command {
                DrawCommand::Sprite(s) => {
                    let Some(texture) = self.textures.get(&s.sprite) else {
                        log::debug!("no texture for sprite {}", s.sprite);
                        continue;
                    };
                    draw_texture_ex(
                        texture,
                        s.x - s.width / 2.0,
                        s.y - s.height / 2.0,
                        Color::new(1.0, 1.0, 1.0, s.alpha),
                        DrawTextureParams {
                            dest_size: Some(vec2(s.width, s.height)),
                            // macroquad rotates clockwise on screen
                            rotation: -s.rotation,
                            ..Default::default()
                        },
                    );
                }
                DrawCommand::Rect(r) => {
                    let [cr, cg, cb, ca] = r.color;
                    draw_rectangle(r.x, r.y, r.width, r.height, Color::from_rgba(cr, cg, cb, ca));
                }
            }
        }
    }
}

impl Drop for MacroquadRenderer {
    fn drop(&mut self) {
        log::info!("releasing {} textures", self.textures.len());
        self.textures.clear();
    }
}
