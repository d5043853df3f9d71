//! Level-triggered key state.
//!
//! The platform layer forwards press/release transitions; systems only ask
//! whether a key is currently held.

use std::collections::HashSet;

use crate::components::Side;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    S,
    Up,
    Down,
    Escape,
}

/// Keys moving one paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaddleKeys {
    pub up: Key,
    pub down: Key,
}

impl PaddleKeys {
    pub fn for_side(side: Side) -> Self {
        match side {
            Side::Left => Self {
                up: Key::W,
                down: Key::S,
            },
            Side::Right => Self {
                up: Key::Up,
                down: Key::Down,
            },
        }
    }
}

pub const QUIT_KEY: Key = Key::Escape;

#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: HashSet<Key>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: Key) {
        self.held.insert(key);
    }

    pub fn key_up(&mut self, key: Key) {
        self.held.remove(&key);
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    pub fn quit_requested(&self) -> bool {
        self.is_held(QUIT_KEY)
    }

    /// Release every held key
    pub fn clear(&mut self) {
        self.held.clear();
    }
}
