//! gl_jump - A minimal 2D endless runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, game phases)
//! - `game`: Per-frame driver tying input, clock, simulation and drawing together
//! - `renderer`: Drawing boundary and CPU-side display list
//! - `platform`: Input/clock boundary and frame timing
//! - `tuning`: Data-driven game balance

pub mod game;
pub mod highscores;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use game::Game;
pub use highscores::HighScores;
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Logical screen size (fixed window, not resizable)
    pub const SCREEN_WIDTH: f32 = 500.0;
    pub const SCREEN_HEIGHT: f32 = 500.0;

    /// Seed used when nothing else is configured
    pub const DEFAULT_SEED: u64 = 1;

    /// Player rectangle defaults
    pub const PLAYER_WIDTH: f32 = 60.0;
    pub const PLAYER_HEIGHT: f32 = 60.0;
    pub const PLAYER_X: f32 = 100.0;

    /// Jump cycle: fixed step per frame, flips at apex, ends at floor
    pub const JUMP_STEP: f32 = 10.0;
    pub const JUMP_APEX: f32 = 250.0;
    pub const JUMP_FLOOR: f32 = 100.0;

    /// Ground line height (same as floor, player sits on it)
    pub const GROUND_Y: f32 = 100.0;

    /// Foreground obstacle defaults
    pub const OBSTACLE_WIDTH: f32 = 50.0;
    pub const OBSTACLE_HEIGHT: f32 = 50.0;

    /// Background obstacle starts/resets this far past the right edge after a death
    pub const BACKGROUND_OFFSCREEN_OFFSET: f32 = 550.0;

    /// Scroll speed in pixels/s before score scaling
    pub const BASE_SPEED: f32 = 300.0;

    /// Player y at or below this counts as "still on the ground" for collisions
    pub const GROUND_COLLISION_THRESHOLD: f32 = 135.0;

    /// Seconds after a death during which the jump key is ignored
    pub const JUMP_DEBOUNCE: f64 = 0.2;

    /// Largest delta time fed to the simulation (frame stalls)
    pub const MAX_FRAME_DT: f32 = 0.1;
}
