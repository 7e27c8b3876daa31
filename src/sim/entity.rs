//! Entity models: the player rectangle, triangle obstacles and the ground line
//!
//! Entities only know their own geometry and update rules. Anything that
//! involves two entities (collisions) or randomness is done by the tick.

use glam::Vec2;
use rand::Rng;

use crate::consts::*;
use crate::tuning::Tuning;

/// The player's rectangle
///
/// `pos` is the bottom-left corner; y grows upward.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub pos: Vec2,
    pub size: Vec2,
    /// Currently in a jump cycle
    pub jumping: bool,
    /// Signed vertical step applied per frame while jumping
    pub jump_amount: f32,
}

impl Player {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(PLAYER_X, tuning.jump_floor),
            size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            jumping: false,
            jump_amount: tuning.jump_step,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    /// Begin a jump cycle. Returns false if one is already running.
    pub fn start_jump(&mut self) -> bool {
        if self.jumping {
            return false;
        }
        self.jumping = true;
        true
    }

    /// Advance the jump cycle by one step
    ///
    /// Moves by `jump_amount`, turns around once above the apex and finishes
    /// on reaching the floor. Returns true on the step that finishes the cycle.
    pub fn step_jump(&mut self, tuning: &Tuning) -> bool {
        if !self.jumping {
            return false;
        }

        self.pos.y += self.jump_amount;
        if self.pos.y > tuning.jump_apex {
            self.jump_amount = -tuning.jump_step;
        }
        if self.pos.y <= tuning.jump_floor {
            self.pos.y = tuning.jump_floor;
            self.jump_amount = tuning.jump_step;
            self.jumping = false;
            return true;
        }
        false
    }

    /// Drop out of any jump and stand on the floor, ready for the next cycle
    pub fn land(&mut self, tuning: &Tuning) {
        self.jumping = false;
        self.jump_amount = tuning.jump_step;
        self.pos.y = tuning.jump_floor;
    }
}

/// A triangle scrolling right-to-left
///
/// `pos` is the bottom-left corner of the triangle's base.
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    pub pos: Vec2,
    pub size: Vec2,
    /// Once `pos.x` drops below this the obstacle wraps to the right edge
    pub reset_x: f32,
}

impl Obstacle {
    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    /// Scroll left by `distance`, wrapping to `wrap_x` past the reset threshold.
    /// Returns true if the obstacle wrapped.
    pub fn advance(&mut self, distance: f32, wrap_x: f32) -> bool {
        self.pos.x -= distance;
        if self.pos.x < self.reset_x {
            self.pos.x = wrap_x;
            return true;
        }
        false
    }
}

/// Static ground line the player stands on
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ground {
    pub start: Vec2,
    pub end: Vec2,
}

impl Default for Ground {
    fn default() -> Self {
        Self {
            start: Vec2::new(0.0, GROUND_Y),
            end: Vec2::new(SCREEN_WIDTH, GROUND_Y),
        }
    }
}

/// Scroll speed for the current score (pixels/s)
#[inline]
pub fn scroll_speed(tuning: &Tuning, score: u64) -> f32 {
    tuning.base_speed + score as f32
}

/// Roll a foreground reset threshold: -(random(0..gap_steps) * gap_unit) - gap_min
pub fn roll_gap_threshold<R: Rng>(rng: &mut R, tuning: &Tuning) -> f32 {
    let steps = rng.random_range(0..tuning.gap_steps);
    -(steps as f32 * tuning.gap_unit) - tuning.gap_min
}

/// Roll a background triangle size (height drawn first, then width)
pub fn roll_background_size<R: Rng>(rng: &mut R, tuning: &Tuning) -> Vec2 {
    let height = rng.random_range(0..tuning.background_height_steps) as f32
        * tuning.background_size_unit
        + tuning.background_size_min;
    let width = rng.random_range(0..tuning.background_width_steps) as f32
        * tuning.background_size_unit
        + tuning.background_size_min;
    Vec2::new(width, height)
}

/// Background wraps once it is three of its own widths past the left edge
#[inline]
pub fn background_reset_x(size: Vec2) -> f32 {
    -(size.x * 3.0)
}
