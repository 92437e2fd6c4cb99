pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod input;
pub mod assets;
pub mod audio;
pub mod runner;

// Re-export key types at crate root for convenience
pub use api::game::{Game, GameConfig, EngineContext, RenderContext};
pub use api::types::{EntityId, SoundEvent};
pub use assets::manifest::{AssetManifest, SpriteDescriptor};
pub use assets::registry::{SpriteImage, SpriteRegistry};
pub use assets::source::{AssetError, AssetSource, DirAssets, MemoryAssets};
pub use audio::channels::{ChannelBank, ChannelError};
pub use components::entity::Entity;
pub use components::sprite::SpriteComponent;
pub use core::scene::Scene;
pub use core::time::FrameClock;
pub use input::queue::{InputEvent, InputQueue, Key, KeyboardState};
pub use renderer::camera::Camera2D;
pub use renderer::instance::{DrawCommand, RectInstance, RenderBuffer, SpriteInstance};
pub use renderer::traits::{FrameData, Renderer};
pub use runner::GameRunner;
