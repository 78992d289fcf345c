//! Duel Pong entry point
//!
//! Runs the simulation headless at the target frame rate with both paddles
//! driven by demo players. Drawing and input polling belong to a windowed
//! front end; this driver logs the match instead.

use std::time::{Duration, Instant};

use duel_pong::Settings;
use duel_pong::platform::{FramePacer, Headless, Surface, read_input};
use duel_pong::sim::{DemoPlayer, GameEvent, GameState, LoopControl, TickInput, tick};

/// Game instance holding all state
struct Game {
    state: GameState,
    surface: Headless,
    pacer: FramePacer,
    demo: DemoPlayer,
    max_frames: Option<u64>,
}

impl Game {
    fn new(settings: &Settings) -> Self {
        let surface = Headless::new(settings.arena);
        Self {
            state: GameState::from_settings(settings, surface.size()),
            surface,
            pacer: FramePacer::new(settings.target_fps),
            demo: DemoPlayer::new(settings.target_fps as u64),
            max_frames: settings.max_frames,
        }
    }

    /// Input for this frame: keys from the surface, paddles from the demo players
    fn frame_input(&self) -> TickInput {
        let keys = read_input(&self.surface);
        let demo = self.demo.input(&self.state);
        let out_of_frames = self.max_frames.is_some_and(|max| self.state.frame >= max);
        TickInput {
            resume: keys.resume || demo.resume,
            quit: keys.quit || out_of_frames,
            ..demo
        }
    }

    /// Run one frame
    fn step(&mut self) -> LoopControl {
        let input = self.frame_input();
        let arena = self.surface.size();
        let outcome = tick(&mut self.state, &input, arena);
        self.surface.keys.end_frame();

        for event in &outcome.events {
            if let GameEvent::Resumed = event {
                log::info!("Serve at frame {}", self.state.frame);
            }
        }
        outcome.control
    }

    /// Run frames at the target rate until the loop is told to stop
    fn run(&mut self) {
        let mut last = Instant::now();
        loop {
            let now = Instant::now();
            let frames = self.pacer.advance((now - last).as_secs_f32());
            last = now;

            for _ in 0..frames {
                if self.step() == LoopControl::Quit {
                    return;
                }
            }

            std::thread::sleep(Duration::from_secs_f32(self.pacer.until_next_frame()));
        }
    }
}

fn main() {
    env_logger::init();
    log::info!("Duel Pong (headless) starting...");

    let settings = Settings::load();
    log::info!(
        "Arena {}x{} at {} fps, seed {}",
        settings.arena.width,
        settings.arena.height,
        settings.target_fps,
        settings.seed
    );

    let mut game = Game::new(&settings);
    game.run();

    log::info!(
        "Final score {} - {} after {} frames",
        game.state.score.left,
        game.state.score.right,
        game.state.frame
    );
}
