/// Unique identifier for an entity in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId(pub u32);

/// A sound event emitted by the game logic.
/// Names the sound asset (relative to the asset root) and the playback channel.
/// Consumed by the audio player in the same tick it was emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SoundEvent {
    /// Relative path to the audio file (e.g., "horn.wav").
    pub asset: &'static str,
    /// Output channel index.
    pub channel: usize,
}

impl SoundEvent {
    pub const fn new(asset: &'static str, channel: usize) -> Self {
        Self { asset, channel }
    }
}
