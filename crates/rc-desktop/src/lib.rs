//! Desktop platform for rc-engine games.
//!
//! Opens the window through macroquad, feeds keyboard and close events into
//! the engine's [`GameRunner`](rc_engine::GameRunner), draws each frame and
//! plays the sound events the game emits.

pub mod audio;
pub mod input;
pub mod render;
pub mod runner;

pub use audio::ChannelAudio;
pub use input::KeyboardPoller;
pub use render::MacroquadRenderer;
pub use runner::run;

use macroquad::window::Conf;
use rc_engine::GameConfig;

/// Window settings for a game. Use from the function passed to `#[macroquad::main]`.
pub fn window_conf(config: &GameConfig) -> Conf {
    Conf {
        window_title: config.caption.clone(),
        window_width: config.window_width as i32,
        window_height: config.window_height as i32,
        window_resizable: false,
        ..Default::default()
    }
}

/// Install the log output. `log` records are forwarded into tracing.
/// Safe to call more than once.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .try_init();
}
