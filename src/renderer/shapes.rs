//! Shape generation for 2D primitives
//!
//! Everything is emitted as a triangle list so one pipeline can draw a whole
//! frame. Lines become thin quads.

use glam::Vec2;

use super::vertex::{Color, Vertex};
use crate::sim::{Ground, Obstacle, Player};

/// Line thickness in pixels
pub const LINE_WIDTH: f32 = 1.0;

/// A drawable primitive in screen space (origin bottom-left, y up)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Axis-aligned filled rectangle; `pos` is the bottom-left corner
    Rectangle { pos: Vec2, size: Vec2 },
    /// Filled isosceles triangle; `pos` is the left end of the base
    Triangle { pos: Vec2, size: Vec2 },
    /// Line segment
    Line { start: Vec2, end: Vec2 },
}

impl Shape {
    /// Triangle-list vertices for this shape
    pub fn vertices(&self, color: Color) -> Vec<Vertex> {
        match *self {
            Shape::Rectangle { pos, size } => rectangle(pos, size, color),
            Shape::Triangle { pos, size } => triangle(pos, size, color),
            Shape::Line { start, end } => line(start, end, LINE_WIDTH, color),
        }
    }
}

impl From<&Player> for Shape {
    fn from(player: &Player) -> Self {
        Shape::Rectangle {
            pos: player.pos,
            size: player.size,
        }
    }
}

impl From<&Obstacle> for Shape {
    fn from(obstacle: &Obstacle) -> Self {
        Shape::Triangle {
            pos: obstacle.pos,
            size: obstacle.size,
        }
    }
}

impl From<&Ground> for Shape {
    fn from(ground: &Ground) -> Self {
        Shape::Line {
            start: ground.start,
            end: ground.end,
        }
    }
}

/// Generate vertices for a filled rectangle
pub fn rectangle(pos: Vec2, size: Vec2, color: Color) -> Vec<Vertex> {
    /*
     *   B - C
     *   | / |
     *   A - D
     */
    let a = pos;
    let b = pos + Vec2::new(0.0, size.y);
    let c = pos + size;
    let d = pos + Vec2::new(size.x, 0.0);

    vec![
        Vertex::new(a.x, a.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(a.x, a.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(d.x, d.y, color),
    ]
}

/// Generate vertices for a filled triangle with its apex above the base midpoint
pub fn triangle(pos: Vec2, size: Vec2, color: Color) -> Vec<Vertex> {
    /*
     *     B
     *    / \
     *   A - C
     */
    let a = pos;
    let b = pos + Vec2::new(size.x / 2.0, size.y);
    let c = pos + Vec2::new(size.x, 0.0);

    vec![
        Vertex::new(a.x, a.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(c.x, c.y, color),
    ]
}

/// Generate vertices for a line segment as a quad of the given width
pub fn line(start: Vec2, end: Vec2, width: f32, color: Color) -> Vec<Vertex> {
    let dir = (end - start).normalize_or_zero();
    // Perpendicular for width
    let perp = Vec2::new(-dir.y, dir.x) * (width / 2.0);

    let v1a = start + perp;
    let v1b = start - perp;
    let v2a = end + perp;
    let v2b = end - perp;

    vec![
        Vertex::new(v1a.x, v1a.y, color),
        Vertex::new(v1b.x, v1b.y, color),
        Vertex::new(v2a.x, v2a.y, color),
        Vertex::new(v2a.x, v2a.y, color),
        Vertex::new(v1b.x, v1b.y, color),
        Vertex::new(v2b.x, v2b.y, color),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Color = [1.0; 4];

    #[test]
    fn test_rectangle_corners() {
        let verts = rectangle(Vec2::new(100.0, 100.0), Vec2::new(60.0, 60.0), WHITE);
        assert_eq!(verts.len(), 6);
        let xs: Vec<f32> = verts.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = verts.iter().map(|v| v.position[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::MAX, f32::min), 100.0);
        assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 160.0);
        assert_eq!(ys.iter().cloned().fold(f32::MAX, f32::min), 100.0);
        assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), 160.0);
    }

    #[test]
    fn test_triangle_apex_centered() {
        let verts = triangle(Vec2::new(500.0, 100.0), Vec2::new(50.0, 50.0), WHITE);
        assert_eq!(verts.len(), 3);
        assert_eq!(verts[0].position, [500.0, 100.0]);
        assert_eq!(verts[1].position, [525.0, 150.0]);
        assert_eq!(verts[2].position, [550.0, 100.0]);
    }

    #[test]
    fn test_horizontal_line_quad() {
        let verts = line(Vec2::new(0.0, 100.0), Vec2::new(500.0, 100.0), 1.0, WHITE);
        assert_eq!(verts.len(), 6);
        for v in &verts {
            assert!((v.position[1] - 100.0).abs() <= 0.5);
        }
    }

    #[test]
    fn test_shape_from_player() {
        let tuning = crate::tuning::Tuning::default();
        let player = Player::new(&tuning);
        assert_eq!(
            Shape::from(&player),
            Shape::Rectangle {
                pos: Vec2::new(100.0, 100.0),
                size: Vec2::new(60.0, 60.0),
            }
        );
    }
}
