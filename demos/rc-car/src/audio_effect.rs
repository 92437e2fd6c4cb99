use rc_engine::SoundEvent;

/// Channel for driving sounds (engine, horn).
pub const DRIVE_CHANNEL: usize = 0;
/// Channel for battery warnings.
pub const BATTERY_CHANNEL: usize = 1;

/// Audio cues the car can raise. Each maps to a fixed sound file and channel.
///
/// `EngineStart` and `Horn` share [`DRIVE_CHANNEL`]. When both fire in the same
/// tick the car yields them in that order, so the horn cuts the engine start
/// off and is the one heard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioEffect {
    EngineStart,
    Horn,
    LowBattery,
    BatteryEmpty,
}

impl AudioEffect {
    pub const fn path(self) -> &'static str {
        match self {
            AudioEffect::EngineStart => "engine_start.wav",
            AudioEffect::Horn => "horn.wav",
            AudioEffect::LowBattery => "low_battery.wav",
            AudioEffect::BatteryEmpty => "battery_empty.wav",
        }
    }

    pub const fn channel(self) -> usize {
        match self {
            AudioEffect::EngineStart | AudioEffect::Horn => DRIVE_CHANNEL,
            AudioEffect::LowBattery | AudioEffect::BatteryEmpty => BATTERY_CHANNEL,
        }
    }
}

impl From<AudioEffect> for SoundEvent {
    fn from(effect: AudioEffect) -> Self {
        SoundEvent::new(effect.path(), effect.channel())
    }
}
