use std::time::Instant;

use anyhow::Context;
use macroquad::input::prevent_quit;
use macroquad::window::next_frame;
use rc_engine::{AssetSource, FrameClock, Game, GameRunner};

use crate::audio::ChannelAudio;
use crate::input::KeyboardPoller;
use crate::render::MacroquadRenderer;

/// Run a game until its window is closed.
///
/// Startup failures (bad manifest, missing or undecodable sprite) are returned
/// before the loop starts. Sound problems are logged and never stop the game.
pub async fn run<G: Game>(
    game: G,
    manifest_json: &str,
    assets: impl AssetSource + 'static,
) -> anyhow::Result<()> {
    let mut runner = GameRunner::new(game);
    runner
        .load_manifest(manifest_json)
        .context("failed to parse asset manifest")?;

    let images = runner
        .sprites()
        .load_images(&assets)
        .with_context(|| format!("failed to load sprites from {}", assets.describe()))?;
    let mut renderer = MacroquadRenderer::from_images(images)?;
    let mut audio = ChannelAudio::new(Box::new(assets), runner.config().audio_channels);

    runner.init();
    prevent_quit();

    let mut clock = FrameClock::new(runner.config().tick_rate);
    let mut poller = KeyboardPoller::new();
    let mut events = Vec::new();

    while !runner.exit_requested() {
        poller.poll(&mut events);
        for event in events.drain(..) {
            runner.push_input(event);
        }

        let dt = clock.tick(Instant::now());
        runner.tick(dt);
        runner.present(&mut renderer);

        let sounds = runner.sounds().to_vec();
        for sound in &sounds {
            audio.play(sound).await;
        }

        next_frame().await;

        let idle = clock.remaining(Instant::now());
        if !idle.is_zero() {
            std::thread::sleep(idle);
        }
    }

    audio.shutdown();
    log::info!("{}: exited after {} ticks", runner.config().caption, runner.ticks());
    Ok(())
}
