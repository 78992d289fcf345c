//! Keyboard queries and mapping to tick input
//!
//! Left paddle: W / S. Right paddle: Up / Down. Space resumes after a point,
//! Escape quits.

use std::collections::HashSet;

use crate::sim::{PaddleMove, TickInput};

/// Keys the game reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    S,
    Up,
    Down,
    Space,
    Escape,
}

/// Key state queries supplied by the display/input collaborator
pub trait Keyboard {
    /// Key is currently held
    fn is_key_down(&self, key: Key) -> bool;
    /// Key went down since the previous frame
    fn is_key_pressed(&self, key: Key) -> bool;
}

/// Build this frame's tick input from key states
pub fn read_input(keys: &impl Keyboard) -> TickInput {
    TickInput {
        left: PaddleMove::from_keys(keys.is_key_down(Key::W), keys.is_key_down(Key::S)),
        right: PaddleMove::from_keys(keys.is_key_down(Key::Up), keys.is_key_down(Key::Down)),
        resume: keys.is_key_pressed(Key::Space),
        quit: keys.is_key_pressed(Key::Escape),
    }
}

/// Held keys plus this frame's presses.
/// Frame lifecycle: press()/release() → query → end_frame().
#[derive(Debug, Default, Clone)]
pub struct KeyState {
    down: HashSet<Key>,
    pressed_this_frame: HashSet<Key>,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) {
        if self.down.insert(key) {
            self.pressed_this_frame.insert(key);
        }
    }

    pub fn release(&mut self, key: Key) {
        self.down.remove(&key);
    }

    /// Clear per-frame presses; held keys stay down
    pub fn end_frame(&mut self) {
        self.pressed_this_frame.clear();
    }
}

impl Keyboard for KeyState {
    fn is_key_down(&self, key: Key) -> bool {
        self.down.contains(&key)
    }

    fn is_key_pressed(&self, key: Key) -> bool {
        self.pressed_this_frame.contains(&key)
    }
}
