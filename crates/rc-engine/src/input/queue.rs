/// Keys the engine tracks. Platforms translate their native key codes into these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    W,
    A,
    S,
    D,
    Space,
}

impl Key {
    pub const ALL: [Key; 9] = [
        Key::Up,
        Key::Down,
        Key::Left,
        Key::Right,
        Key::W,
        Key::A,
        Key::S,
        Key::D,
        Key::Space,
    ];

    fn bit(self) -> u32 {
        1 << (self as u32)
    }
}

/// Input/window event types the engine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A key was pressed.
    KeyDown { key: Key },
    /// A key was released.
    KeyUp { key: Key },
    /// The window was asked to close.
    CloseRequested,
}

/// A queue of input events.
/// The platform pushes events each iteration; the runner drains them at the
/// start of the next tick.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(16),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

/// Set of keys currently held, folded from key events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyboardState {
    held: u32,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one event into the held-key set. Non-key events are ignored.
    pub fn apply(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::KeyDown { key } => self.held |= key.bit(),
            InputEvent::KeyUp { key } => self.held &= !key.bit(),
            InputEvent::CloseRequested => {}
        }
    }

    pub fn is_down(&self, key: Key) -> bool {
        self.held & key.bit() != 0
    }

    /// True if any of the given keys is held.
    pub fn any_down(&self, keys: &[Key]) -> bool {
        keys.iter().any(|&k| self.is_down(k))
    }

    /// Build a state with exactly the given keys held.
    pub fn with_keys(keys: &[Key]) -> Self {
        let mut state = Self::new();
        for &key in keys {
            state.apply(&InputEvent::KeyDown { key });
        }
        state
    }
}
