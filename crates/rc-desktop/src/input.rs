use macroquad::input::{is_key_down, is_quit_requested, KeyCode};
use rc_engine::{InputEvent, Key, KeyboardState};

const KEY_MAP: [(Key, KeyCode); 9] = [
    (Key::Up, KeyCode::Up),
    (Key::Down, KeyCode::Down),
    (Key::Left, KeyCode::Left),
    (Key::Right, KeyCode::Right),
    (Key::W, KeyCode::W),
    (Key::A, KeyCode::A),
    (Key::S, KeyCode::S),
    (Key::D, KeyCode::D),
    (Key::Space, KeyCode::Space),
];

/// Turns polled key state into engine key events.
/// Only changes since the previous poll are reported.
#[derive(Default)]
pub struct KeyboardPoller {
    last: KeyboardState,
}

impl KeyboardPoller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Poll the window: key transitions, then a close request if one is pending.
    pub fn poll(&mut self, out: &mut Vec<InputEvent>) {
        self.diff(|key| {
            KEY_MAP
                .iter()
                .find(|(k, _)| *k == key)
                .map(|&(_, code)| is_key_down(code))
                .unwrap_or(false)
        }, out);
        if is_quit_requested() {
            out.push(InputEvent::CloseRequested);
        }
    }

    fn diff(&mut self, is_down: impl Fn(Key) -> bool, out: &mut Vec<InputEvent>) {
        for key in Key::ALL {
            let down = is_down(key);
            if down == self.last.is_down(key) {
                continue;
            }
            let event = if down {
                InputEvent::KeyDown { key }
            } else {
                InputEvent::KeyUp { key }
            };
            self.last.apply(&event);
            out.push(event);
        }
    }
}
