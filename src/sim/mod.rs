//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only enters through the `dt`/`now` values handed to `tick`
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod entity;
pub mod state;
pub mod tick;

pub use collision::{collides_x, collides_y, player_hits_obstacle};
pub use entity::{Ground, Obstacle, Player, scroll_speed};
pub use state::{GameEvent, GamePhase, GameState, JumpKey};
pub use tick::{TickInput, tick};
