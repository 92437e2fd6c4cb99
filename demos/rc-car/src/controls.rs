use rc_engine::{Key, KeyboardState};
use crate::car::InputSnapshot;

/// Fixed keyboard layout: arrows or WASD to drive, Space for the horn.
pub struct KeyBindings {
    pub accelerate: &'static [Key],
    pub brake: &'static [Key],
    pub steer_left: &'static [Key],
    pub steer_right: &'static [Key],
    pub horn: &'static [Key],
}

pub const DEFAULT_BINDINGS: KeyBindings = KeyBindings {
    accelerate: &[Key::Up, Key::W],
    brake: &[Key::Down, Key::S],
    steer_left: &[Key::Left, Key::A],
    steer_right: &[Key::Right, Key::D],
    horn: &[Key::Space],
};

impl KeyBindings {
    /// Sample the car controls from the held keys.
    pub fn snapshot(&self, keys: &KeyboardState) -> InputSnapshot {
        InputSnapshot {
            accelerate: keys.any_down(self.accelerate),
            brake: keys.any_down(self.brake),
            steer_left: keys.any_down(self.steer_left),
            steer_right: keys.any_down(self.steer_right),
            horn: keys.any_down(self.horn),
        }
    }
}
