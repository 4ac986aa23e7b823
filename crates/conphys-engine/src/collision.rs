//! Narrow-phase contact tests.
//!
//! Every test returns `None` for "no contact", including the degenerate cases
//! (zero-length line, coincident ball centers) where a normal cannot be
//! defined.

use glam::DVec2;

use crate::body::{Ball, Line};

/// A single contact between two shapes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Unit separation direction. See each test for which way it points.
    pub normal: DVec2,
    /// How far the shapes overlap along `normal`.
    pub depth: f64,
}

impl Contact {
    /// Same contact seen from the other body.
    pub fn flipped(self) -> Self {
        Self {
            normal: -self.normal,
            depth: self.depth,
        }
    }
}

/// Which vertical world wall a ball crossed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// x = 0
    Left,
    /// x = world width
    Right,
}

/// Ball against a closed line segment.
///
/// Touching (distance == radius) counts as contact. The normal points from
/// the closest point on the segment toward the ball center; when the center
/// lies exactly on the segment it falls back to the segment's left-hand
/// perpendicular.
pub fn ball_line_contact(ball: &Ball, line: &Line) -> Option<Contact> {
    let closest = line.closest_point(ball.position)?;
    let offset = ball.position - closest;
    let dist = offset.length();
    if dist > ball.radius() {
        return None;
    }

    let normal = if dist == 0.0 {
        let dir = line.direction();
        dir.perp() / dir.length()
    } else {
        offset / dist
    };

    Some(Contact {
        normal,
        depth: ball.radius() - dist,
    })
}

/// Ball against ball. The normal points from `ball` toward `other`.
///
/// Coincident centers report no contact since the normal is undefined.
pub fn ball_ball_contact(ball: &Ball, other: &Ball) -> Option<Contact> {
    let delta = other.position - ball.position;
    let dist = delta.length();
    let min_dist = ball.radius() + other.radius();

    if dist > 0.0 && dist < min_dist {
        Some(Contact {
            normal: delta / dist,
            depth: min_dist - dist,
        })
    } else {
        None
    }
}

/// Ball against the vertical world walls at x = 0 and x = `world_width`.
/// There is no top or bottom wall; the table catches falling balls.
pub fn boundary_contact(ball: &Ball, world_width: f64) -> Option<Boundary> {
    if ball.position.x - ball.radius() < 0.0 {
        Some(Boundary::Left)
    } else if ball.position.x + ball.radius() > world_width {
        Some(Boundary::Right)
    } else {
        None
    }
}
