//! Game settings and tuning
//!
//! Loaded from a JSON file next to the binary; any field left out of the file
//! keeps its default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::Arena;

/// Game settings/tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Frames per second the driver loop aims for
    pub target_fps: u32,
    /// Seed for the ball's serve generator
    pub seed: u64,
    /// Arena used by the headless surface
    pub arena: Arena,
    /// Stop after this many frames (None runs until killed)
    pub max_frames: Option<u64>,

    // === Ball ===
    pub ball_radius: f32,
    /// Starting position (x, y)
    pub ball_start: (f32, f32),
    /// Serve velocity (x, y), used at start and after every point
    pub ball_speed: (f32, f32),
    /// Multiplicative velocity growth per frame
    pub speed_growth: f32,
    /// Speed cap (None keeps growth unbounded)
    pub max_ball_speed: Option<f32>,

    // === Paddles ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Distance moved per frame of input
    pub paddle_step: f32,
    /// Distance of each paddle from its side of the arena
    pub paddle_inset: f32,
    pub paddle_start_y: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            target_fps: TARGET_FPS,
            seed: 0x5eed_9096,
            arena: Arena::new(DEFAULT_ARENA_WIDTH, DEFAULT_ARENA_HEIGHT),
            max_frames: None,

            ball_radius: BALL_RADIUS,
            ball_start: (BALL_START_X, BALL_START_Y),
            ball_speed: (BALL_SERVE_VX, BALL_SERVE_VY),
            speed_growth: BALL_SPEED_GROWTH,
            max_ball_speed: None,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_step: PADDLE_STEP,
            paddle_inset: PADDLE_INSET,
            paddle_start_y: PADDLE_START_Y,
        }
    }
}

impl Settings {
    /// Environment variable naming the settings file
    pub const PATH_ENV: &'static str = "PONG_SETTINGS";
    /// Settings file used when the environment variable is unset
    pub const DEFAULT_PATH: &'static str = "pong_settings.json";

    /// Default settings with a specific seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Parse settings from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize settings to pretty JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from the file named by `PONG_SETTINGS`, or the default path
    pub fn load() -> Self {
        let path = std::env::var(Self::PATH_ENV).unwrap_or_else(|_| Self::DEFAULT_PATH.to_string());
        Self::load_from(path)
    }

    /// Load settings from a file, falling back to defaults if it is missing or invalid
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No settings at {}, using defaults", path.display());
                return Self::default();
            }
            Err(e) => {
                log::warn!("Could not read {}: {}; using defaults", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Invalid settings in {}: {}; using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save settings to a file
    pub fn save_to(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let json = self.to_json().map_err(std::io::Error::other)?;
        std::fs::write(path.as_ref(), json)?;
        log::info!("Settings saved to {}", path.as_ref().display());
        Ok(())
    }

    /// Duration of one frame in seconds
    pub fn frame_dt(&self) -> f32 {
        crate::frame_dt(self.target_fps)
    }
}
