//! Impulse-based collision response.
//!
//! One pass per contact per frame with no substeps or solver iterations. Dense
//! stacks can jitter or keep a little overlap.

use crate::body::Ball;
use crate::collision::{Boundary, Contact};

/// Push a ball out of a line and reflect its velocity.
///
/// `contact.normal` must point from the line toward the ball center (as
/// returned by [`crate::collision::ball_line_contact`]). The whole penetration
/// is removed in one step. The normal velocity is reversed and scaled by
/// `bounce`; the tangential velocity is scaled by `friction` once per contact.
pub fn resolve_ball_line(ball: &mut Ball, contact: &Contact, bounce: f64, friction: f64) {
    let n = contact.normal;
    ball.position += n * contact.depth;

    let normal_velocity = n * ball.velocity.dot(n);
    let tangent_velocity = ball.velocity - normal_velocity;
    ball.velocity = -normal_velocity * bounce + tangent_velocity * friction;
}

/// Separate two overlapping balls and exchange a restitution impulse.
///
/// `contact.normal` points from `a` toward `b`. Each ball moves half the
/// overlap. If the balls are already separating along the normal the
/// velocities are left untouched. Returns whether an impulse was applied.
///
/// Spin is never transferred; rotation is cosmetic.
pub fn resolve_ball_pair(a: &mut Ball, b: &mut Ball, contact: &Contact, bounce: f64) -> bool {
    let n = contact.normal;
    let separation = n * (contact.depth / 2.0);
    a.position -= separation;
    b.position += separation;

    let vn = (b.velocity - a.velocity).dot(n);
    if vn > 0.0 {
        return false;
    }

    let inv_a = 1.0 / a.mass();
    let inv_b = 1.0 / b.mass();
    let j = -(1.0 + bounce) * vn / (inv_a + inv_b);
    let impulse = n * j;
    a.velocity -= impulse * inv_a;
    b.velocity += impulse * inv_b;
    true
}

/// Clamp a ball back inside a vertical world wall and reflect vx.
pub fn resolve_boundary(ball: &mut Ball, boundary: Boundary, world_width: f64, bounce: f64) {
    ball.position.x = match boundary {
        Boundary::Left => ball.radius(),
        Boundary::Right => world_width - ball.radius(),
    };
    ball.velocity.x *= -bounce;
}
