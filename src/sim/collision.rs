//! Collision detection between the player and the foreground obstacle
//!
//! Deliberately coarse: a horizontal span overlap plus a "still near the
//! ground" height test. The triangle's slope is ignored.

use super::entity::{Obstacle, Player};

/// Horizontal overlap of the player span and the obstacle span (inclusive)
#[inline]
pub fn collides_x(player_right: f32, player_left: f32, obstacle_left: f32, obstacle_right: f32) -> bool {
    player_right >= obstacle_left && player_left <= obstacle_right
}

/// True while the player has not climbed above `threshold`
#[inline]
pub fn collides_y(player_y: f32, threshold: f32) -> bool {
    player_y <= threshold
}

/// Both predicates for the given entities
pub fn player_hits_obstacle(player: &Player, obstacle: &Obstacle, threshold: f32) -> bool {
    collides_x(player.right(), player.left(), obstacle.left(), obstacle.right())
        && collides_y(player.pos.y, threshold)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;
    use glam::Vec2;

    fn obstacle_at(x: f32) -> Obstacle {
        Obstacle {
            pos: Vec2::new(x, 100.0),
            size: Vec2::new(50.0, 50.0),
            reset_x: -200.0,
        }
    }

    #[test]
    fn test_touching_edges_collide() {
        // Player spans [100, 160]
        assert!(collides_x(160.0, 100.0, 160.0, 210.0));
        assert!(collides_x(160.0, 100.0, 50.0, 100.0));
    }

    #[test]
    fn test_separated_spans_do_not_collide() {
        assert!(!collides_x(160.0, 100.0, 160.5, 210.5));
        assert!(!collides_x(160.0, 100.0, 0.0, 99.5));
    }

    #[test]
    fn test_height_threshold_inclusive() {
        assert!(collides_y(100.0, 135.0));
        assert!(collides_y(135.0, 135.0));
        assert!(!collides_y(140.0, 135.0));
    }

    #[test]
    fn test_player_hits_obstacle_on_ground() {
        let tuning = Tuning::default();
        let player = Player::new(&tuning);
        assert!(player_hits_obstacle(&player, &obstacle_at(130.0), 135.0));
        assert!(!player_hits_obstacle(&player, &obstacle_at(300.0), 135.0));
    }

    #[test]
    fn test_jumping_player_clears_obstacle() {
        let tuning = Tuning::default();
        let mut player = Player::new(&tuning);
        player.pos.y = 140.0;
        assert!(!player_hits_obstacle(&player, &obstacle_at(130.0), 135.0));
    }
}
