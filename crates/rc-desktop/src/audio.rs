use std::collections::{HashMap, HashSet};

use macroquad::audio::{load_sound_from_bytes, play_sound, stop_sound, PlaySoundParams, Sound};
use rc_engine::{AssetSource, ChannelBank, SoundEvent};

/// Channel-based sound playback.
///
/// Sounds are read from the asset source the first time they fire and cached.
/// A sound that fails to load is reported once and then ignored. Playing on a
/// busy channel cuts the previous sound off.
pub struct ChannelAudio {
    source: Box<dyn AssetSource>,
    cache: HashMap<&'static str, Sound>,
    failed: HashSet<&'static str>,
    bank: ChannelBank<Sound>,
}

impl ChannelAudio {
    pub fn new(source: Box<dyn AssetSource>, channels: usize) -> Self {
        Self {
            source,
            cache: HashMap::new(),
            failed: HashSet::new(),
            bank: ChannelBank::new(channels),
        }
    }

    pub async fn play(&mut self, event: &SoundEvent) {
        if event.channel >= self.bank.count() {
            log::warn!(
                "sound {} dropped: channel {} out of range ({} channels)",
                event.asset,
                event.channel,
                self.bank.count()
            );
            return;
        }

        let Some(sound) = self.load(event.asset).await else {
            return;
        };

        match self.bank.assign(event.channel, sound.clone()) {
            Ok(Some(previous)) => stop_sound(&previous),
            Ok(None) => {}
            Err(e) => {
                log::warn!("sound {} dropped: {}", event.asset, e);
                return;
            }
        }

        play_sound(
            &sound,
            PlaySoundParams {
                looped: false,
                volume: 1.0,
            },
        );
    }

    async fn load(&mut self, asset: &'static str) -> Option<Sound> {
        if let Some(sound) = self.cache.get(asset) {
            return Some(sound.clone());
        }
        if self.failed.contains(asset) {
            return None;
        }

        let bytes = match self.source.read(asset) {
            Ok(bytes) => bytes,
            Err(e) => {
                log::warn!("sound unavailable: {}", e);
                self.failed.insert(asset);
                return None;
            }
        };
        match load_sound_from_bytes(&bytes).await {
            Ok(sound) => {
                log::debug!("sound {} loaded ({} bytes)", asset, bytes.len());
                self.cache.insert(asset, sound.clone());
                Some(sound)
            }
            Err(e) => {
                log::warn!("failed to decode sound {}: {:?}", asset, e);
                self.failed.insert(asset);
                None
            }
        }
    }

    /// Stop every channel and drop cached sounds.
    pub fn shutdown(&mut self) {
        for sound in self.bank.release_all() {
            stop_sound(&sound);
        }
        if !self.cache.is_empty() {
            log::info!("audio released ({} cached sounds)", self.cache.len());
        }
        self.cache.clear();
    }
}

impl Drop for ChannelAudio {
    fn drop(&mut self) {
        self.shutdown();
    }
}
