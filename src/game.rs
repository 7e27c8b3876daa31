//! Frame driver
//!
//! `Game` owns the simulation state and runs one frame at a time in a fixed
//! order: sample clock and input, tick, handle events, draw.

use crate::highscores::HighScores;
use crate::platform::{Clock, FrameTimer, InputSource, Key};
use crate::renderer::{Renderer, TextRenderer, draw_scene};
use crate::sim::{GameEvent, GameState, TickInput, tick};
use crate::tuning::Tuning;

/// A running game instance
pub struct Game {
    state: GameState,
    timer: FrameTimer,
    high_scores: HighScores,
    /// Runs finished so far
    runs: u32,
}

impl Game {
    /// Create a game whose clock starts at `start_time`
    pub fn new(tuning: Tuning, start_time: f64) -> Self {
        log::info!("Game initialized with seed: {}", tuning.seed);
        let timer = FrameTimer::new(start_time, tuning.max_frame_dt);
        let mut state = GameState::new(tuning);
        // Input counts from launch like it does from a death
        state.last_death = start_time;
        Self {
            state,
            timer,
            high_scores: HighScores::new(),
            runs: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn high_scores(&self) -> &HighScores {
        &self.high_scores
    }

    /// Number of finished runs
    pub fn runs(&self) -> u32 {
        self.runs
    }

    /// Run one frame: input -> update -> collisions -> draw
    pub fn frame<I, C, R>(&mut self, input: &I, clock: &C, renderer: &mut R)
    where
        I: InputSource,
        C: Clock,
        R: Renderer + TextRenderer,
    {
        let now = clock.now();
        let dt = self.timer.advance(now);
        let tick_input = TickInput {
            jump_down: input.is_key_down(Key::Space),
            now,
        };

        tick(&mut self.state, &tick_input, dt);
        self.handle_events(now);

        draw_scene(&self.state, self.high_scores.best(), renderer);
    }

    fn handle_events(&mut self, now: f64) {
        for event in self.state.events.drain(..) {
            match event {
                GameEvent::RunStarted => {
                    log::info!("Run {} started", self.runs + 1);
                }
                GameEvent::Collided { score } => {
                    self.runs += 1;
                    match self.high_scores.record(score, self.runs, now) {
                        Some(1) => log::info!("Run {} ended: score {} (new best!)", self.runs, score),
                        Some(rank) => {
                            log::info!("Run {} ended: score {} (rank {})", self.runs, score, rank)
                        }
                        None => log::info!("Run {} ended: score {}", self.runs, score),
                    }
                }
                GameEvent::Jumped => log::trace!("Jump"),
                GameEvent::ObstacleWrapped { reset_x } => {
                    log::debug!("Obstacle wrapped, next reset at x={}", reset_x)
                }
                GameEvent::BackgroundWrapped { size } => {
                    log::debug!("Background wrapped, new size {}x{}", size.x, size.y)
                }
            }
        }
    }
}
