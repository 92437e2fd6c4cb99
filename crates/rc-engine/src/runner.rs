use glam::Vec2;
use crate::api::game::{EngineContext, Game, GameConfig, RenderContext};
use crate::api::types::SoundEvent;
use crate::assets::manifest::AssetManifest;
use crate::assets::registry::SpriteRegistry;
use crate::assets::source::AssetError;
use crate::input::queue::{InputEvent, InputQueue, KeyboardState};
use crate::renderer::camera::Camera2D;
use crate::renderer::instance::RenderBuffer;
use crate::renderer::traits::{FrameData, Renderer};
use crate::systems::render::build_render_buffer;

/// Platform-independent game runner: one `tick` per loop iteration.
///
/// The platform pushes input, calls `tick` with the measured frame time, then
/// reads the frame and the sound events back. Nothing here sleeps or touches
/// a device, so the same loop runs headless in tests.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    keys: KeyboardState,
    render_buffer: RenderBuffer,
    camera: Camera2D,
    config: GameConfig,
    initialized: bool,
    exit_requested: bool,
    ticks: u64,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        let camera = camera_for(&config);
        let mut ctx = EngineContext::new();
        ctx.set_max_sounds(config.max_sounds);

        Self {
            game,
            ctx,
            input: InputQueue::new(),
            keys: KeyboardState::new(),
            render_buffer: RenderBuffer::new(),
            camera,
            config,
            initialized: false,
            exit_requested: false,
            ticks: 0,
        }
    }

    /// Parse the asset manifest and register its sprites. Call before `init`
    /// so the game can look sprite sizes up while spawning.
    pub fn load_manifest(&mut self, json: &str) -> Result<(), AssetError> {
        let manifest = AssetManifest::from_json(json)?;
        self.ctx.sprites = SpriteRegistry::from_manifest(&manifest);
        log::info!("asset manifest loaded: {} sprites", self.ctx.sprites.len());
        Ok(())
    }

    /// Initialize the game. Call once after construction.
    pub fn init(&mut self) {
        self.config = self.game.config();
        self.camera = camera_for(&self.config);
        self.ctx.set_max_sounds(self.config.max_sounds);
        self.game.init(&mut self.ctx);
        self.initialized = true;
        log::info!("{}: initialized", self.config.caption);
    }

    /// Push an input or window event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one loop iteration: drain events, update the game, build the frame.
    ///
    /// A close request sets the exit flag but the iteration still completes.
    /// Negative or non-finite `dt` is treated as zero.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        self.ctx.clear_frame_data();

        for event in self.input.drain() {
            match event {
                InputEvent::CloseRequested => {
                    if !self.exit_requested {
                        log::info!("close requested after {} ticks", self.ticks);
                    }
                    self.exit_requested = true;
                }
                other => self.keys.apply(&other),
            }
        }

        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        self.game.update(&mut self.ctx, &self.keys, dt);

        build_render_buffer(self.ctx.scene.iter(), &self.camera, &mut self.render_buffer);
        {
            let mut render_ctx = RenderContext {
                render_buffer: &mut self.render_buffer,
                sprites: &self.ctx.sprites,
                config: &self.config,
            };
            self.game.render(&mut render_ctx);
        }

        self.ticks += 1;
    }

    /// Whether a close event has been seen. Checked at the top of each iteration.
    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    /// The frame built by the last tick.
    pub fn frame(&self) -> FrameData<'_> {
        FrameData {
            commands: &self.render_buffer.commands,
            clear_color: self.config.clear_color,
        }
    }

    /// Hand the last frame to a renderer.
    pub fn present(&self, renderer: &mut dyn Renderer) {
        renderer.draw(&self.frame());
    }

    /// Sound events emitted during the last tick.
    pub fn sounds(&self) -> &[SoundEvent] {
        &self.ctx.sounds
    }

    pub fn sprites(&self) -> &SpriteRegistry {
        &self.ctx.sprites
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn keys(&self) -> &KeyboardState {
        &self.keys
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    /// Number of completed ticks.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

fn camera_for(config: &GameConfig) -> Camera2D {
    Camera2D::new(
        config.pixels_per_unit,
        Vec2::new(config.window_width as f32, config.window_height as f32),
    )
}
