//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, no wall-clock time
//! - Seeded RNG only
//! - Fixed left-then-right processing order
//! - No rendering or platform dependencies

pub mod ai;
pub mod collision;
pub mod state;
pub mod tick;

pub use ai::DemoPlayer;
pub use state::{Arena, Ball, GameEvent, GamePhase, GameState, Paddle, Score, Side};
pub use tick::{LoopControl, PaddleMove, TickInput, TickOutcome, tick};
