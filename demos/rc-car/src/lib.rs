//! Radio-controlled car demo.
//!
//! A single car driven from the keyboard: arrows or WASD steer and throttle,
//! Space sounds the horn. The battery drains with time and throttle; audio
//! cues fire on departure, low battery, empty battery and the horn.

pub mod audio_effect;
pub mod car;
pub mod controls;
pub mod game;
pub mod hud;

pub use audio_effect::AudioEffect;
pub use car::{Car, CarParams, InputSnapshot, VehicleState};
pub use game::RcCar;

use std::path::{Path, PathBuf};

/// Sprite manifest, embedded at compile time.
pub const MANIFEST_JSON: &str = include_str!("../assets/manifest.json");

const ASSET_DIR: &str = "assets";

/// Asset directory for a binary at `exe`.
///
/// An `assets/` directory holding the manifest next to the executable wins, so
/// a copied binary finds the assets shipped beside it. Otherwise the crate's
/// own `assets/` directory is used.
pub fn asset_root(exe: Option<&Path>) -> PathBuf {
    let beside_exe = exe
        .and_then(Path::parent)
        .map(|dir| dir.join(ASSET_DIR))
        .filter(|dir| dir.join("manifest.json").is_file());
    beside_exe.unwrap_or_else(|| Path::new(env!("CARGO_MANIFEST_DIR")).join(ASSET_DIR))
}
