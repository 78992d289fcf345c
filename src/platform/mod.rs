//! Platform abstraction layer
//!
//! The seam to the external display/input collaborator:
//! - Surface size (re-read every frame)
//! - Keyboard queries
//! - Frame timing
//!
//! Drawing is left to the collaborator. `Headless` stands in for it when
//! running without a window.

pub mod input;
pub mod time;

pub use input::{Key, KeyState, Keyboard, read_input};
pub use time::FramePacer;

use crate::sim::Arena;

/// Display surface queried for the playable area each frame
pub trait Surface {
    fn size(&self) -> Arena;
}

/// Windowless surface and keyboard
#[derive(Debug, Clone)]
pub struct Headless {
    pub arena: Arena,
    pub keys: KeyState,
}

impl Headless {
    pub fn new(arena: Arena) -> Self {
        Self {
            arena,
            keys: KeyState::new(),
        }
    }

    /// Change the surface size, as a window resize would
    pub fn resize(&mut self, width: u32, height: u32) {
        log::debug!("Surface resized to {}x{}", width, height);
        self.arena = Arena::new(width, height);
    }
}

impl Surface for Headless {
    fn size(&self) -> Arena {
        self.arena
    }
}

impl Keyboard for Headless {
    fn is_key_down(&self, key: Key) -> bool {
        self.keys.is_key_down(key)
    }

    fn is_key_pressed(&self, key: Key) -> bool {
        self.keys.is_key_pressed(key)
    }
}
