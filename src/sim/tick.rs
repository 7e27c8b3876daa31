//! Per-frame simulation step
//!
//! Advances the state machine one frame: jump input, jump cycle, scrolling,
//! collision and phase transitions, in that order.

use super::collision::player_hits_obstacle;
use super::entity::{background_reset_x, roll_background_size, roll_gap_threshold, scroll_speed};
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Input sampled for a single frame
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Jump key is held this frame
    pub jump_down: bool,
    /// Clock time of this frame in seconds (used for the post-death debounce)
    pub now: f64,
}

/// Advance the game state by one frame of `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.jump_key.update(input.jump_down);

    let wants_jump = if state.tuning.hold_to_jump {
        state.jump_key.down
    } else {
        state.jump_key.pressed()
    };

    match state.phase {
        GamePhase::Start => {
            if !state.player.jumping && wants_jump && state.jump_debounced(input.now) {
                state.player.start_jump();
                state.events.push(GameEvent::Jumped);
            }

            // Obstacles stay frozen; a finished jump starts the run
            if state.player.step_jump(&state.tuning) {
                state.phase = GamePhase::Game;
                state.score = 0;
                state.events.push(GameEvent::RunStarted);
            }
        }

        GamePhase::Game => {
            state.score += 1;

            if wants_jump && state.player.start_jump() {
                state.events.push(GameEvent::Jumped);
            }
            state.player.step_jump(&state.tuning);

            let distance = scroll_speed(&state.tuning, state.score) * dt;

            if state.obstacle.advance(distance, SCREEN_WIDTH) {
                let reset_x = roll_gap_threshold(&mut state.rng, &state.tuning);
                state.obstacle.reset_x = reset_x;
                state.events.push(GameEvent::ObstacleWrapped { reset_x });
            }

            if state.background.advance(distance, SCREEN_WIDTH) {
                let size = roll_background_size(&mut state.rng, &state.tuning);
                state.background.size = size;
                state.background.reset_x = background_reset_x(size);
                state.events.push(GameEvent::BackgroundWrapped { size });
            }

            if player_hits_obstacle(
                &state.player,
                &state.obstacle,
                state.tuning.collision_threshold,
            ) {
                // Score is kept for the title screen until the next run starts
                state.phase = GamePhase::Start;
                state.reset_obstacles();
                state.player.land(&state.tuning);
                state.last_death = input.now;
                state.events.push(GameEvent::Collided { score: state.score });
            }
        }

        GamePhase::End => {}
    }
}
