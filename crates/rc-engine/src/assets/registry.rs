use std::collections::BTreeMap;
use glam::Vec2;
use crate::assets::manifest::{AssetManifest, SpriteDescriptor};
use crate::assets::source::{AssetError, AssetSource};

/// Raw bytes of a sprite image, ready for the renderer to decode.
#[derive(Debug, Clone)]
pub struct SpriteImage {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// Registry of named sprites, built from an AssetManifest.
/// Provides name-based lookup of image paths and draw sizes.
#[derive(Debug, Clone, Default)]
pub struct SpriteRegistry {
    sprites: BTreeMap<String, SpriteDescriptor>,
}

impl SpriteRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from a parsed AssetManifest.
    pub fn from_manifest(manifest: &AssetManifest) -> Self {
        Self {
            sprites: manifest.sprites.clone(),
        }
    }

    /// Look up a sprite by name. Returns None if not found.
    pub fn get(&self, name: &str) -> Option<&SpriteDescriptor> {
        self.sprites.get(name)
    }

    /// Draw size of a sprite in pixels.
    pub fn size(&self, name: &str) -> Result<Vec2, AssetError> {
        self.get(name)
            .map(|d| Vec2::new(d.width, d.height))
            .ok_or_else(|| AssetError::UnknownSprite(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    /// Read every sprite image from `source`, in name order.
    /// Any missing file fails the whole load.
    pub fn load_images(&self, source: &dyn AssetSource) -> Result<Vec<SpriteImage>, AssetError> {
        self.sprites
            .iter()
            .map(|(name, desc)| {
                let bytes = source.read(&desc.path)?;
                log::debug!("sprite {} loaded from {} ({} bytes)", name, desc.path, bytes.len());
                Ok(SpriteImage {
                    name: name.clone(),
                    bytes,
                })
            })
            .collect()
    }
}
