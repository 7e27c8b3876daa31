//! Data-driven game balance
//!
//! Every number the simulation depends on lives here so runs can be replayed
//! or rebalanced without touching code. Missing JSON fields fall back to the
//! defaults in [`crate::consts`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Environment variable naming a JSON tuning file
pub const TUNING_ENV_VAR: &str = "GL_JUMP_TUNING";

/// Errors produced while loading or validating tuning data
#[derive(Debug, thiserror::Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid tuning value `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Gameplay constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// RNG seed for obstacle gaps and background sizes
    pub seed: u64,

    // === Jump ===
    pub jump_step: f32,
    pub jump_apex: f32,
    pub jump_floor: f32,

    // === Scrolling ===
    /// Pixels per second before adding the score
    pub base_speed: f32,
    /// Foreground gap: threshold = -(random(0..gap_steps) * gap_unit) - gap_min
    pub gap_steps: u32,
    pub gap_unit: f32,
    pub gap_min: f32,
    /// Background size: random(0..steps) * size_unit + size_min
    pub background_width_steps: u32,
    pub background_height_steps: u32,
    pub background_size_unit: f32,
    pub background_size_min: f32,

    // === Collision / input ===
    pub collision_threshold: f32,
    /// Seconds the jump key is ignored after a death
    pub jump_debounce: f64,
    /// Holding the jump key keeps jumping; when false every jump needs a fresh press
    pub hold_to_jump: bool,

    // === Timing ===
    /// Upper bound on the per-frame delta time
    pub max_frame_dt: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,

            jump_step: JUMP_STEP,
            jump_apex: JUMP_APEX,
            jump_floor: JUMP_FLOOR,

            base_speed: BASE_SPEED,
            gap_steps: 50,
            gap_unit: 100.0,
            gap_min: 200.0,
            background_width_steps: 8,
            background_height_steps: 5,
            background_size_unit: 100.0,
            background_size_min: 200.0,

            collision_threshold: GROUND_COLLISION_THRESHOLD,
            jump_debounce: JUMP_DEBOUNCE,
            hold_to_jump: true,

            max_frame_dt: MAX_FRAME_DT,
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.as_ref().display());
        Ok(tuning)
    }

    /// Load from the file named by `GL_JUMP_TUNING`, or defaults if unset
    pub fn from_env() -> Result<Self, TuningError> {
        match std::env::var_os(TUNING_ENV_VAR) {
            Some(path) => Self::load(path),
            None => {
                log::debug!("{} not set, using default tuning", TUNING_ENV_VAR);
                Ok(Self::default())
            }
        }
    }

    /// Reject values that would break the simulation invariants
    pub fn validate(&self) -> Result<(), TuningError> {
        fn invalid(field: &'static str, reason: &'static str) -> Result<(), TuningError> {
            Err(TuningError::Invalid { field, reason })
        }

        if !(self.jump_step > 0.0) {
            return invalid("jump_step", "must be positive");
        }
        if !(self.jump_apex > self.jump_floor) {
            return invalid("jump_apex", "must be above jump_floor");
        }
        if !self.base_speed.is_finite() || self.base_speed < 0.0 {
            return invalid("base_speed", "must be finite and non-negative");
        }
        if self.gap_steps == 0 {
            return invalid("gap_steps", "must be at least 1");
        }
        // Nearest foreground threshold is -gap_min, left of the screen edge
        if !self.gap_unit.is_finite() || self.gap_unit < 0.0 {
            return invalid("gap_unit", "must be finite and non-negative");
        }
        if !self.gap_min.is_finite() || self.gap_min <= 0.0 {
            return invalid("gap_min", "must be finite and positive");
        }
        if self.background_width_steps == 0 {
            return invalid("background_width_steps", "must be at least 1");
        }
        if self.background_height_steps == 0 {
            return invalid("background_height_steps", "must be at least 1");
        }
        if !self.background_size_unit.is_finite() || self.background_size_unit < 0.0 {
            return invalid("background_size_unit", "must be finite and non-negative");
        }
        if !self.background_size_min.is_finite() || self.background_size_min <= 0.0 {
            return invalid("background_size_min", "must be finite and positive");
        }
        if !self.collision_threshold.is_finite() {
            return invalid("collision_threshold", "must be finite");
        }
        if !(self.jump_debounce >= 0.0) {
            return invalid("jump_debounce", "must be non-negative");
        }
        if !(self.max_frame_dt > 0.0) {
            return invalid("max_frame_dt", "must be positive");
        }
        Ok(())
    }
}
