//! Demo-mode input: watches the game state and presses jump on its own

use super::{InputSource, Key};
use crate::sim::{GamePhase, GameState, scroll_speed};

/// Frames of lead before the obstacle reaches the player.
/// The player clears the collision height on the 4th frame of a jump.
const LEAD_FRAMES: f32 = 4.5;

/// AI input source for headless/demo runs
#[derive(Debug, Clone)]
pub struct Autopilot {
    /// Expected frame duration, used to turn speed into per-frame distance
    frame_dt: f32,
    jump: bool,
}

impl Autopilot {
    pub fn new(frame_dt: f32) -> Self {
        Self {
            frame_dt,
            jump: false,
        }
    }

    /// Decide this frame's key state from the current game state
    pub fn observe(&mut self, state: &GameState) {
        self.jump = match state.phase {
            // Tap every other frame so both hold and press modes start a run
            GamePhase::Start => !self.jump,
            GamePhase::Game => {
                let per_frame = scroll_speed(&state.tuning, state.score + 1) * self.frame_dt;
                let gap = state.obstacle.left() - state.player.right();
                !state.player.jumping && gap >= 0.0 && gap <= per_frame * LEAD_FRAMES
            }
            GamePhase::End => false,
        };
    }
}

impl InputSource for Autopilot {
    fn is_key_down(&self, key: Key) -> bool {
        key == Key::Space && self.jump
    }
}
