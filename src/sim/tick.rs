//! Per-frame simulation tick
//!
//! Core game loop step: paddle input, scoring, ball motion and collisions,
//! advanced once per frame.

use serde::{Deserialize, Serialize};

use super::state::{Arena, GameEvent, GamePhase, GameState, Side};

/// Paddle command for one frame; up and down are mutually exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PaddleMove {
    #[default]
    Stay,
    Up,
    Down,
}

impl PaddleMove {
    /// Map raw key states; down wins when both are held
    pub fn from_keys(up: bool, down: bool) -> Self {
        if down {
            PaddleMove::Down
        } else if up {
            PaddleMove::Up
        } else {
            PaddleMove::Stay
        }
    }
}

/// Input commands for a single tick
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub left: PaddleMove,
    pub right: PaddleMove,
    /// Resume play after a point
    pub resume: bool,
    /// Stop the loop
    pub quit: bool,
}

impl TickInput {
    pub fn paddle(&self, side: Side) -> PaddleMove {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

/// Whether the driver loop should keep running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Quit,
}

/// What a tick produced
#[derive(Debug, Clone)]
pub struct TickOutcome {
    pub events: Vec<GameEvent>,
    pub control: LoopControl,
}

impl TickOutcome {
    fn quit() -> Self {
        Self {
            events: Vec::new(),
            control: LoopControl::Quit,
        }
    }

    /// Side that scored this tick, if any
    pub fn scorer(&self) -> Option<Side> {
        self.events.iter().find_map(|e| match e {
            GameEvent::Scored { scorer } => Some(*scorer),
            _ => None,
        })
    }
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput, arena: Arena) -> TickOutcome {
    if input.quit {
        log::debug!("Quit requested at frame {}", state.frame);
        return TickOutcome::quit();
    }

    state.frame += 1;
    let mut events = Vec::new();

    match state.phase {
        GamePhase::PausedAfterScore => {
            if input.resume {
                state.enter_phase(GamePhase::Playing);
                events.push(GameEvent::Resumed);
            }
        }
        GamePhase::Playing => {
            // Paddles
            for side in [Side::Left, Side::Right] {
                let paddle = state.paddle_mut(side);
                match input.paddle(side) {
                    PaddleMove::Down => paddle.move_down(arena.height),
                    PaddleMove::Up => paddle.move_up(),
                    PaddleMove::Stay => {}
                }
            }

            // Scoring uses the position the ball ended last frame on
            let wall = if state.ball.hit_left_wall() {
                Some(Side::Left)
            } else if state.ball.hit_right_wall(arena.width) {
                Some(Side::Right)
            } else {
                None
            };
            if let Some(wall) = wall {
                let scorer = wall.opponent();
                state.score.increment(scorer);
                state.ball.reset(arena);
                state.enter_phase(GamePhase::PausedAfterScore);
                log::info!(
                    "Point to {} ({} - {})",
                    scorer.as_str(),
                    state.score.left,
                    state.score.right
                );
                events.push(GameEvent::Scored { scorer });
            }

            // The ball still advances on the frame a point is scored
            state.ball.update();
            if state.ball.check_wall_collision(arena) {
                events.push(GameEvent::WallBounce);
            }
            for side in [Side::Left, Side::Right] {
                let paddle = state.paddle(side);
                let (pos, width, height) = (paddle.pos, paddle.width, paddle.height);
                if state.ball.check_paddle_collision(pos, width, height) {
                    events.push(GameEvent::PaddleHit(side));
                }
            }
        }
    }

    for event in &events {
        log::trace!("frame {}: {:?}", state.frame, event);
    }

    TickOutcome {
        events,
        control: LoopControl::Continue,
    }
}
