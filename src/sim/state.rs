//! Game state and core simulation types
//!
//! Everything a frame mutates lives here, so a whole match can be
//! snapshotted and replayed from its seed.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision;
use crate::Settings;

/// Playable surface size, re-read from the display every frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Arena {
    pub width: u32,
    pub height: u32,
}

impl Arena {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn width_f(&self) -> f32 {
        self.width as f32
    }

    #[inline]
    pub fn height_f(&self) -> f32 {
        self.height as f32
    }
}

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    #[default]
    Playing,
    /// A point was just scored; waiting for the resume input
    PausedAfterScore,
}

/// Left or right player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// Something that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball bounced off the top or bottom edge
    WallBounce,
    /// Ball bounced off a paddle
    PaddleHit(Side),
    /// Ball reached a scoring edge
    Scored { scorer: Side },
    /// Play resumed after a point
    Resumed,
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Velocity restored by `reset`
    pub serve_vel: Vec2,
    /// Multiplicative velocity growth per update
    pub growth: f32,
    /// Optional speed cap applied after growth
    pub max_speed: Option<f32>,
    /// Serve position generator, seeded once at construction
    rng: Pcg32,
}

impl Ball {
    /// Create a ball with default tuning and its own seeded generator
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, seed: u64) -> Self {
        Self {
            pos,
            vel,
            radius,
            serve_vel: Vec2::new(crate::consts::BALL_SERVE_VX, crate::consts::BALL_SERVE_VY),
            growth: crate::consts::BALL_SPEED_GROWTH,
            max_speed: None,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        let serve_vel = Vec2::from(settings.ball_speed);
        Self {
            serve_vel,
            growth: settings.speed_growth,
            max_speed: settings.max_ball_speed,
            ..Self::new(
                Vec2::from(settings.ball_start),
                serve_vel,
                settings.ball_radius,
                settings.seed,
            )
        }
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    pub fn flip_horizontal(&mut self) {
        self.vel.x = -self.vel.x;
    }

    pub fn flip_vertical(&mut self) {
        self.vel.y = -self.vel.y;
    }

    /// Move by one frame of velocity, then grow the velocity
    pub fn update(&mut self) {
        self.pos += self.vel;
        self.vel *= self.growth;
        if let Some(max) = self.max_speed {
            self.vel = self.vel.clamp_length_max(max);
        }
    }

    /// Bounce off the top or bottom edge. Returns true if the ball bounced.
    pub fn check_wall_collision(&mut self, arena: Arena) -> bool {
        let hit = collision::touches_top_or_bottom(self.pos, self.radius, arena.height_f());
        if hit {
            self.flip_vertical();
        }
        hit
    }

    /// Bounce off a paddle whose top-left corner is `paddle_pos`.
    /// Returns true if the ball bounced.
    ///
    /// `_paddle_width` is accepted for symmetry with the paddle's shape but
    /// the contact test only measures distance from the paddle's x edge.
    pub fn check_paddle_collision(
        &mut self,
        paddle_pos: Vec2,
        _paddle_width: f32,
        paddle_height: f32,
    ) -> bool {
        let hit = collision::ball_paddle_contact(self.pos, self.radius, paddle_pos, paddle_height);
        if hit {
            self.flip_horizontal();
        }
        hit
    }

    pub fn hit_left_wall(&self) -> bool {
        collision::past_left_wall(self.pos, self.radius)
    }

    pub fn hit_right_wall(&self, width: u32) -> bool {
        collision::past_right_wall(self.pos, self.radius, width as f32)
    }

    /// Re-serve from a random point in the middle of the arena
    pub fn reset(&mut self, arena: Arena) {
        let (w, h) = (arena.width as u64, arena.height as u64);
        let x = sample_span(&mut self.rng, w / 4, 3 * w / 4);
        let y = sample_span(&mut self.rng, h / 8, h - h / 8);
        self.pos = Vec2::new(x as f32, y as f32);
        self.vel = self.serve_vel;
    }
}

/// Uniform integer in `[lo, hi)`, or `lo` when the span is empty
fn sample_span(rng: &mut Pcg32, lo: u64, hi: u64) -> u64 {
    if lo >= hi { lo } else { rng.random_range(lo..hi) }
}

/// A player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Top-left corner; only y changes during play
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Distance moved per frame of input
    pub step: f32,
}

impl Paddle {
    /// Create a default-sized paddle at x
    pub fn new(x: f32) -> Self {
        use crate::consts::*;
        Self {
            pos: Vec2::new(x, PADDLE_START_Y),
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            step: PADDLE_STEP,
        }
    }

    /// Create the paddle for a side, inset from that side of the arena
    pub fn for_side(side: Side, arena: Arena, settings: &Settings) -> Self {
        let x = match side {
            Side::Left => settings.paddle_inset,
            Side::Right => arena.width_f() - settings.paddle_inset,
        };
        Self {
            pos: Vec2::new(x, settings.paddle_start_y),
            width: settings.paddle_width,
            height: settings.paddle_height,
            step: settings.paddle_step,
        }
    }

    /// Move down one step if the bottom edge is above the arena floor.
    /// The guard runs before the move, so the last step may overshoot.
    pub fn move_down(&mut self, arena_height: u32) {
        if self.pos.y + self.height < arena_height as f32 {
            self.pos.y += self.step;
        }
    }

    /// Move up one step if the top edge is below zero.
    /// The guard runs before the move, so the last step may overshoot.
    pub fn move_up(&mut self) {
        if self.pos.y > 0.0 {
            self.pos.y -= self.step;
        }
    }

    /// Vertical centre of the paddle
    #[inline]
    pub fn center_y(&self) -> f32 {
        self.pos.y + self.height / 2.0
    }
}

/// Points per player
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Left => self.left = self.left.saturating_add(1),
            Side::Right => self.right = self.right.saturating_add(1),
        }
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Seed the ball's generator was created with
    pub seed: u64,
    pub phase: GamePhase,
    pub ball: Ball,
    pub left: Paddle,
    pub right: Paddle,
    pub score: Score,
    /// Frames ticked so far (both phases)
    pub frame: u64,
    /// Frame the current phase began on
    pub phase_started: u64,
}

impl GameState {
    /// Create a new game with default tuning and the given seed
    pub fn new(seed: u64, arena: Arena) -> Self {
        Self::from_settings(&Settings::with_seed(seed), arena)
    }

    /// Create a new game. Paddle x positions use the arena width at start.
    pub fn from_settings(settings: &Settings, arena: Arena) -> Self {
        Self {
            seed: settings.seed,
            phase: GamePhase::Playing,
            ball: Ball::from_settings(settings),
            left: Paddle::for_side(Side::Left, arena, settings),
            right: Paddle::for_side(Side::Right, arena, settings),
            score: Score::default(),
            frame: 0,
            phase_started: 0,
        }
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Switch phase and remember when it happened
    pub fn enter_phase(&mut self, phase: GamePhase) {
        if self.phase != phase {
            log::debug!("Phase {:?} -> {:?} at frame {}", self.phase, phase, self.frame);
            self.phase = phase;
            self.phase_started = self.frame;
        }
    }

    /// Frames spent in the current phase
    pub fn frames_in_phase(&self) -> u64 {
        self.frame.saturating_sub(self.phase_started)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ball_at(x: f32, y: f32) -> Ball {
        Ball::new(Vec2::new(x, y), Vec2::new(15.0, 15.0), 25.0, 1)
    }

    #[test]
    fn test_update_moves_then_grows() {
        let mut ball = ball_at(100.0, 100.0);
        ball.update();
        assert_eq!(ball.pos, Vec2::new(115.0, 115.0));
        assert!((ball.vel.x - 15.0 * 1.00005).abs() < 1e-5);
        assert!((ball.vel.y - 15.0 * 1.00005).abs() < 1e-5);
    }

    #[test]
    fn test_speed_cap() {
        let mut ball = ball_at(100.0, 100.0);
        ball.max_speed = Some(10.0);
        ball.update();
        assert!(ball.speed() <= 10.0 + 1e-4);
    }

    #[test]
    fn test_wall_collision_at_origin() {
        let mut ball = ball_at(0.0, 0.0);
        assert!(ball.check_wall_collision(Arena::new(800, 100)));
        assert_eq!(ball.vel, Vec2::new(15.0, -15.0));
    }

    #[test]
    fn test_wall_collision_bottom_and_clear() {
        let mut ball = ball_at(400.0, 80.0);
        assert!(ball.check_wall_collision(Arena::new(800, 100)));
        assert_eq!(ball.vel.y, -15.0);

        let mut ball = ball_at(400.0, 50.0);
        assert!(!ball.check_wall_collision(Arena::new(800, 100)));
        assert_eq!(ball.vel.y, 15.0);
    }

    #[test]
    fn test_paddle_collision_flips_x_only() {
        let paddle = Paddle::new(120.0);
        let mut ball = ball_at(140.0, 200.0);
        assert!(ball.check_paddle_collision(paddle.pos, paddle.width, paddle.height));
        assert_eq!(ball.vel, Vec2::new(-15.0, 15.0));
        // Position is never corrected
        assert_eq!(ball.pos, Vec2::new(140.0, 200.0));
    }

    #[test]
    fn test_paddle_collision_misses_outside_span() {
        let paddle = Paddle::new(120.0);
        let mut ball = ball_at(120.0, 50.0);
        assert!(!ball.check_paddle_collision(paddle.pos, paddle.width, paddle.height));
        let mut ball = ball_at(120.0, 400.0);
        assert!(!ball.check_paddle_collision(paddle.pos, paddle.width, paddle.height));
        assert_eq!(ball.vel, Vec2::new(15.0, 15.0));
    }

    #[test]
    fn test_side_walls() {
        assert!(ball_at(-1.0, 300.0).hit_left_wall());
        assert!(!ball_at(400.0, 300.0).hit_left_wall());
        assert!(ball_at(790.0, 300.0).hit_right_wall(800));
        assert!(!ball_at(400.0, 300.0).hit_right_wall(800));
    }

    #[test]
    fn test_reset_restores_serve_velocity() {
        let mut ball = ball_at(-1.0, 300.0);
        ball.vel = Vec2::new(-40.0, 3.0);
        ball.reset(Arena::new(800, 600));
        assert_eq!(ball.vel, Vec2::new(15.0, 15.0));
    }

    #[test]
    fn test_reset_tiny_arena_uses_lower_bound() {
        let mut ball = ball_at(0.0, 0.0);
        ball.reset(Arena::new(1, 1));
        assert_eq!(ball.pos, Vec2::ZERO);
    }

    #[test]
    fn test_reset_is_seeded() {
        let arena = Arena::new(1280, 720);
        let mut a = Ball::new(Vec2::ZERO, Vec2::ZERO, 25.0, 99);
        let mut b = Ball::new(Vec2::ZERO, Vec2::ZERO, 25.0, 99);
        for _ in 0..10 {
            a.reset(arena);
            b.reset(arena);
            assert_eq!(a.pos, b.pos);
        }
    }

    #[test]
    fn test_move_up_at_top_stays() {
        let mut paddle = Paddle::new(120.0);
        paddle.pos.y = 0.0;
        paddle.move_up();
        assert_eq!(paddle.pos.y, 0.0);
    }

    #[test]
    fn test_move_up_overshoots_below_zero() {
        let mut paddle = Paddle::new(120.0);
        paddle.pos.y = 5.0;
        paddle.move_up();
        assert_eq!(paddle.pos.y, -15.0);
        paddle.move_up();
        assert_eq!(paddle.pos.y, -15.0);
    }

    #[test]
    fn test_move_down_flush_with_bottom_stays() {
        let mut paddle = Paddle::new(120.0);
        paddle.pos.y = 600.0 - paddle.height;
        paddle.move_down(600);
        assert_eq!(paddle.pos.y, 600.0 - paddle.height);
    }

    #[test]
    fn test_move_down_overshoots_bottom() {
        let mut paddle = Paddle::new(120.0);
        paddle.pos.y = 600.0 - paddle.height - 1.0;
        paddle.move_down(600);
        assert_eq!(paddle.pos.y + paddle.height, 619.0);
        paddle.move_down(600);
        assert_eq!(paddle.pos.y + paddle.height, 619.0);
    }

    #[test]
    fn test_paddles_inset_from_sides() {
        let state = GameState::new(1, Arena::new(1000, 700));
        assert_eq!(state.left.pos, Vec2::new(120.0, 100.0));
        assert_eq!(state.right.pos, Vec2::new(880.0, 100.0));
        assert_eq!(state.ball.pos, Vec2::new(500.0, 500.0));
        assert_eq!(state.ball.radius, 25.0);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_score_counters_are_independent() {
        let mut score = Score::default();
        score.increment(Side::Right);
        score.increment(Side::Right);
        score.increment(Side::Left);
        assert_eq!(score.get(Side::Left), 1);
        assert_eq!(score.get(Side::Right), 2);
    }

    #[test]
    fn test_state_snapshot_round_trip() {
        let arena = Arena::new(800, 600);
        let mut state = GameState::new(5, arena);
        state.ball.reset(arena);
        let json = serde_json::to_string(&state).unwrap();
        let mut restored: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.ball.pos, state.ball.pos);

        // Generator state survives the snapshot
        state.ball.reset(arena);
        restored.ball.reset(arena);
        assert_eq!(restored.ball.pos, state.ball.pos);
    }

    proptest! {
        #[test]
        fn reset_stays_in_serve_box(seed in any::<u64>(), width in 8u32..4000, height in 8u32..4000) {
            let arena = Arena::new(width, height);
            let mut ball = Ball::new(Vec2::ZERO, Vec2::new(-3.0, 9.0), 25.0, seed);
            ball.reset(arena);

            let (x, y) = (ball.pos.x as u32, ball.pos.y as u32);
            prop_assert!(x >= width / 4 && x < 3 * width / 4);
            prop_assert!(y >= height / 8 && y < height - height / 8);
            prop_assert_eq!(ball.vel, Vec2::new(15.0, 15.0));
        }
    }
}
