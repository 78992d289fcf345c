//! Demo players
//!
//! Drives both paddles so the game can run unattended. The tracker aims at
//! the ball with a slowly drifting offset so rallies eventually end.

use super::state::{GamePhase, GameState, Paddle, Side};
use super::tick::{PaddleMove, TickInput};

/// Computer player settings shared by both sides
#[derive(Debug, Clone, Copy)]
pub struct DemoPlayer {
    /// Frames to wait after a point before resuming
    pub serve_delay_frames: u64,
    /// Largest aim offset from the ball, as a fraction of paddle height
    pub aim_wobble: f32,
}

impl Default for DemoPlayer {
    fn default() -> Self {
        Self {
            serve_delay_frames: crate::consts::TARGET_FPS as u64,
            aim_wobble: 0.9,
        }
    }
}

impl DemoPlayer {
    pub fn new(serve_delay_frames: u64) -> Self {
        Self {
            serve_delay_frames,
            ..Self::default()
        }
    }

    /// Build this frame's input for both paddles
    pub fn input(&self, state: &GameState) -> TickInput {
        match state.phase {
            GamePhase::PausedAfterScore => TickInput {
                resume: state.frames_in_phase() >= self.serve_delay_frames,
                ..Default::default()
            },
            GamePhase::Playing => TickInput {
                left: self.steer(Side::Left, state),
                right: self.steer(Side::Right, state),
                ..Default::default()
            },
        }
    }

    fn steer(&self, side: Side, state: &GameState) -> PaddleMove {
        let paddle = state.paddle(side);
        // Oscillating offset for variety, out of phase between the sides
        let phase = match side {
            Side::Left => 0.0,
            Side::Right => 1.7,
        };
        let t = state.frame as f32 * 0.013 + phase;
        let wobble = (t.sin() * 0.7 + (t * 0.37).sin() * 0.3) * self.aim_wobble;
        let target_y = state.ball.pos.y + wobble * paddle.height;
        track_y(paddle, target_y)
    }
}

/// Step toward `target_y`, holding still within one step of the paddle centre
pub fn track_y(paddle: &Paddle, target_y: f32) -> PaddleMove {
    let delta = target_y - paddle.center_y();
    if delta > paddle.step {
        PaddleMove::Down
    } else if delta < -paddle.step {
        PaddleMove::Up
    } else {
        PaddleMove::Stay
    }
}
