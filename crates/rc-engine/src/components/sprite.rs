/// Names the image an entity is drawn with.
/// The name is a key into the `SpriteRegistry` built from the asset manifest.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteComponent {
    /// Registry name (e.g., "car").
    pub name: String,
    /// Opacity (0.0 = invisible, 1.0 = opaque).
    pub alpha: f32,
}

impl SpriteComponent {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alpha: 1.0,
        }
    }
}
