//! Game state and core simulation types
//!
//! Everything the simulation mutates lives in [`GameState`], which is owned
//! by the caller and passed by `&mut` into [`super::tick`].

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::entity::{
    Ground, Obstacle, Player, background_reset_x, roll_background_size, roll_gap_threshold,
};
use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Title screen; a completed jump starts a run
    Start,
    /// Active run
    Game,
    /// Declared for completeness, never entered
    End,
}

/// Something notable that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// Jump cycle began
    Jumped,
    /// Start -> Game, score reset
    RunStarted,
    /// Player hit the obstacle; `score` is the final score of the run
    Collided { score: u64 },
    /// Foreground obstacle wrapped; `reset_x` is its next threshold
    ObstacleWrapped { reset_x: f32 },
    /// Background obstacle wrapped with a new size
    BackgroundWrapped { size: Vec2 },
}

/// Previous/current state of the jump key
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JumpKey {
    pub prev: bool,
    pub down: bool,
}

impl JumpKey {
    /// Shift in this frame's reading
    pub fn update(&mut self, down: bool) {
        self.prev = self.down;
        self.down = down;
    }

    /// Went down this frame
    #[inline]
    pub fn pressed(&self) -> bool {
        self.down && !self.prev
    }
}

/// Complete game state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    pub tuning: Tuning,
    pub rng: Pcg32,
    pub phase: GamePhase,
    /// Frames survived in the current (or last) run
    pub score: u64,
    /// Clock time of the last collision, or of launch before the first one
    pub last_death: f64,
    pub jump_key: JumpKey,
    pub player: Player,
    /// Collidable foreground triangle
    pub obstacle: Obstacle,
    /// Decorative background triangle
    pub background: Obstacle,
    pub ground: Ground,
    /// Events from the latest ticks, drained by the caller
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game state from tuning (the RNG is seeded from `tuning.seed`)
    pub fn new(tuning: Tuning) -> Self {
        let mut rng = Pcg32::seed_from_u64(tuning.seed);

        let background_size = roll_background_size(&mut rng, &tuning);
        let obstacle_reset = roll_gap_threshold(&mut rng, &tuning);

        let player = Player::new(&tuning);
        let obstacle = Obstacle {
            pos: Vec2::new(SCREEN_WIDTH, tuning.jump_floor),
            size: Vec2::new(OBSTACLE_WIDTH, OBSTACLE_HEIGHT),
            reset_x: obstacle_reset,
        };
        let background = Obstacle {
            pos: Vec2::new(SCREEN_WIDTH + BACKGROUND_OFFSCREEN_OFFSET, tuning.jump_floor),
            size: background_size,
            reset_x: background_reset_x(background_size),
        };

        Self {
            tuning,
            rng,
            phase: GamePhase::Start,
            score: 0,
            last_death: 0.0,
            jump_key: JumpKey::default(),
            player,
            obstacle,
            background,
            ground: Ground::default(),
            events: Vec::new(),
        }
    }

    /// Jump input is ignored for a short while after a death (and after launch)
    pub fn jump_debounced(&self, now: f64) -> bool {
        now - self.last_death > self.tuning.jump_debounce
    }

    /// Move both obstacles off-screen to the right
    pub fn reset_obstacles(&mut self) {
        self.obstacle.pos.x = SCREEN_WIDTH;
        self.background.pos.x = SCREEN_WIDTH + BACKGROUND_OFFSCREEN_OFFSET;
    }
}
