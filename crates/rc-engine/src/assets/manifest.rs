use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};

/// Asset manifest describing the named sprites of a game.
/// Games embed it at compile time; the runner parses it once at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetManifest {
    /// Named sprite lookup: name → image path + draw size.
    #[serde(default)]
    pub sprites: BTreeMap<String, SpriteDescriptor>,
}

/// Describes a sprite image and the size it is drawn at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpriteDescriptor {
    /// Path to the image file, relative to the asset root (e.g., "car.png").
    pub path: String,
    /// Draw width in pixels.
    pub width: f32,
    /// Draw height in pixels.
    pub height: f32,
}

impl AssetManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
