//! Duel Pong - a two-player Pong simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, game loop state)
//! - `platform`: Display/input seam and the headless implementation
//! - `settings`: Data-driven tuning loaded from JSON

pub mod platform;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Target frame rate of the game loop
    pub const TARGET_FPS: u32 = 60;
    /// Maximum frames run per pacer call to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 25.0;
    pub const BALL_START_X: f32 = 500.0;
    pub const BALL_START_Y: f32 = 500.0;
    /// Serve velocity, used at start and after every point
    pub const BALL_SERVE_VX: f32 = 15.0;
    pub const BALL_SERVE_VY: f32 = 15.0;
    /// Per-frame multiplicative speed growth
    pub const BALL_SPEED_GROWTH: f32 = 1.00005;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 25.0;
    pub const PADDLE_HEIGHT: f32 = 210.0;
    /// Vertical distance moved per frame of input
    pub const PADDLE_STEP: f32 = 20.0;
    /// Distance of each paddle from its side of the arena
    pub const PADDLE_INSET: f32 = 120.0;
    pub const PADDLE_START_Y: f32 = 100.0;

    /// Headless arena size
    pub const DEFAULT_ARENA_WIDTH: u32 = 1280;
    pub const DEFAULT_ARENA_HEIGHT: u32 = 720;
}

/// Frame duration in seconds for a target frame rate
#[inline]
pub fn frame_dt(target_fps: u32) -> f32 {
    1.0 / target_fps.max(1) as f32
}
