//! Read-only physical quantities for a ball, for display.
//!
//! Everything here is a pure function of the ball, the table, gravity and the
//! scale passed in by the caller. Nothing is cached, so values always reflect
//! the current parameters. Outputs are SI (meters, seconds, kilograms).

use glam::DVec2;
use serde::Serialize;

use conphys_core::Scale;

use crate::body::{Ball, Line};
use crate::collision;

/// Multiplier in the contact force estimate `|v| * m * ELASTIC_STIFFNESS`.
pub const ELASTIC_STIFFNESS: f64 = 10.0;
/// Friction coefficient used for the display-only friction force estimate.
/// Unrelated to the simulator's tangential `friction` multiplier.
pub const DISPLAY_FRICTION_COEFFICIENT: f64 = 0.1;

/// Every derived quantity for one ball at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Diagnostics {
    /// Center position (m).
    pub position: DVec2,
    /// Velocity (m/s).
    pub velocity: DVec2,
    /// J
    pub kinetic_energy: f64,
    /// J
    pub potential_energy: f64,
    /// J
    pub total_energy: f64,
    /// kg·m/s
    pub momentum: f64,
    /// m/s
    pub speed: f64,
    /// m/s^2
    pub acceleration: f64,
    /// N
    pub gravity_force: f64,
    /// N
    pub elastic_force: f64,
    /// N
    pub friction_force: f64,
}

impl Diagnostics {
    pub fn compute(ball: &Ball, table: &Line, gravity: f64, scale: Scale) -> Self {
        let kinetic = kinetic_energy(ball, scale);
        let potential = potential_energy(ball, table, gravity, scale);
        Self {
            position: scale.vec_to_meters(ball.position),
            velocity: scale.vec_to_meters(ball.velocity),
            kinetic_energy: kinetic,
            potential_energy: potential,
            total_energy: kinetic + potential,
            momentum: momentum(ball, scale),
            speed: speed(ball, scale),
            acceleration: acceleration(ball, scale),
            gravity_force: gravity_force(ball, gravity),
            elastic_force: elastic_force(ball, table, scale),
            friction_force: friction_force(ball, gravity),
        }
    }
}

/// Speed in m/s.
pub fn speed(ball: &Ball, scale: Scale) -> f64 {
    scale.to_meters(ball.velocity.length())
}

/// Magnitude of the last step's acceleration in m/s^2.
pub fn acceleration(ball: &Ball, scale: Scale) -> f64 {
    scale.to_meters(ball.acceleration().length())
}

pub fn kinetic_energy(ball: &Ball, scale: Scale) -> f64 {
    let v = speed(ball, scale);
    0.5 * ball.mass() * v * v
}

/// `m * g * h` where `h` is the height of the ball's lowest point above the
/// table, measured vertically from the ball's closest point on the table.
///
/// +y points down, so a ball above the table has a smaller y. Zero when the
/// ball is at or below the table, or the table has zero length.
pub fn potential_energy(ball: &Ball, table: &Line, gravity: f64, scale: Scale) -> f64 {
    let Some(closest) = table.closest_point(ball.position) else {
        return 0.0;
    };
    let height = scale.to_meters(closest.y - ball.position.y - ball.radius());
    if height > 0.0 {
        ball.mass() * gravity * height
    } else {
        0.0
    }
}

/// Linear momentum magnitude.
pub fn momentum(ball: &Ball, scale: Scale) -> f64 {
    ball.mass() * speed(ball, scale)
}

pub fn gravity_force(ball: &Ball, gravity: f64) -> f64 {
    ball.mass() * gravity
}

/// Rough contact force while the ball touches the table, zero otherwise.
pub fn elastic_force(ball: &Ball, table: &Line, scale: Scale) -> f64 {
    if collision::ball_line_contact(ball, table).is_some() {
        speed(ball, scale) * ball.mass() * ELASTIC_STIFFNESS
    } else {
        0.0
    }
}

/// `mu * N` with `N = m * g` (flat-surface normal force).
pub fn friction_force(ball: &Ball, gravity: f64) -> f64 {
    DISPLAY_FRICTION_COEFFICIENT * gravity_force(ball, gravity)
}
