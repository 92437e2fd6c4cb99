use crate::api::types::{EntityId, SoundEvent};
use crate::assets::registry::SpriteRegistry;
use crate::core::scene::Scene;
use crate::input::queue::KeyboardState;
use crate::renderer::instance::RenderBuffer;

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Window caption, set once at startup.
    pub caption: String,
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target loop rate in ticks per second (default: 60).
    /// A best-effort cap; simulation steps use the measured frame time.
    pub tick_rate: u32,
    /// Scale from world units to screen pixels (default: 32).
    pub pixels_per_unit: f32,
    /// Background colour the frame is cleared to (RGB).
    pub clear_color: [u8; 3],
    /// Maximum number of sound events per frame (default: 32).
    pub max_sounds: usize,
    /// Number of concurrent audio channels (default: 2).
    pub audio_channels: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            caption: String::from("rc-engine"),
            window_width: 1280,
            window_height: 720,
            tick_rate: 60,
            pixels_per_unit: 32.0,
            clear_color: [50, 50, 50],
            max_sounds: 32,
            audio_channels: 2,
        }
    }
}

/// The core contract every game must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Setup initial state, spawn entities, configure the scene.
    fn init(&mut self, ctx: &mut EngineContext);

    /// The game loop tick. `keys` is the keyboard state sampled for this tick,
    /// `dt` the elapsed seconds since the previous tick (never negative).
    fn update(&mut self, ctx: &mut EngineContext, keys: &KeyboardState, dt: f32);

    /// Optional read-only render pass for custom render commands (HUD, overlays).
    fn render(&self, _ctx: &mut RenderContext) {}
}

/// Mutable access to engine state, passed to Game::init and Game::update.
pub struct EngineContext {
    pub scene: Scene,
    pub sprites: SpriteRegistry,
    pub sounds: Vec<SoundEvent>,
    max_sounds: usize,
    next_id: u32,
}

impl EngineContext {
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
            sprites: SpriteRegistry::new(),
            sounds: Vec::new(),
            max_sounds: GameConfig::default().max_sounds,
            next_id: 1,
        }
    }

    /// Cap the number of sound events kept per frame.
    pub fn set_max_sounds(&mut self, max_sounds: usize) {
        self.max_sounds = max_sounds;
    }

    /// Generate the next unique entity ID.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Emit a sound event to be forwarded to the audio player this frame.
    /// Events past the per-frame cap are dropped.
    pub fn emit_sound(&mut self, event: SoundEvent) {
        if self.sounds.len() >= self.max_sounds {
            log::warn!("sound event {} dropped: frame cap {} reached", event.asset, self.max_sounds);
            return;
        }
        self.sounds.push(event);
    }

    /// Clear per-frame transient data.
    pub fn clear_frame_data(&mut self) {
        self.sounds.clear();
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Render context for optional custom render commands.
pub struct RenderContext<'a> {
    pub render_buffer: &'a mut RenderBuffer,
    pub sprites: &'a SpriteRegistry,
    pub config: &'a GameConfig,
}
