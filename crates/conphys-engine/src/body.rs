use glam::DVec2;
use serde::{Deserialize, Serialize};

use conphys_core::{BodyId, Color, Scale, SimParams};

use crate::collision::{self, Boundary, Contact};
use crate::resolve;

/// Default line thickness (presentation only).
pub const LINE_THICKNESS: f64 = 5.0;

/// Kinematic state a ball returns to on reset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InitialState {
    pub position: DVec2,
    pub velocity: DVec2,
    pub rotation: f64,
    pub angular_velocity: f64,
}

/// A rigid circular body.
///
/// All lengths are simulation units. `mass` and `radius` are private so the
/// radius/mass coupling in [`Ball::set_radius`] cannot be bypassed.
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub position: DVec2,
    pub velocity: DVec2,
    acceleration: DVec2,
    radius: f64,
    mass: f64,
    /// Radians.
    pub rotation: f64,
    /// Radians per second. Collisions never change it.
    pub angular_velocity: f64,
    pub color: Color,
    pub fill: Color,
    initial: InitialState,
}

impl Ball {
    /// Create a resting ball. `radius` and `mass` must be positive; the
    /// simulator builder rejects balls that break this.
    pub fn new(position: DVec2, radius: f64, mass: f64) -> Self {
        Self {
            position,
            velocity: DVec2::ZERO,
            acceleration: DVec2::ZERO,
            radius,
            mass,
            rotation: 0.0,
            angular_velocity: 0.0,
            color: Color::BALL_OUTLINE,
            fill: Color::BALL_FILL,
            initial: InitialState {
                position,
                velocity: DVec2::ZERO,
                rotation: 0.0,
                angular_velocity: 0.0,
            },
        }
    }

    /// Create a ball from a center and radius given in meters.
    pub fn from_meters(center: DVec2, radius: f64, mass: f64, scale: Scale) -> Self {
        Self::new(scale.vec_to_units(center), scale.to_units(radius), mass)
    }

    pub fn with_velocity(mut self, velocity: DVec2) -> Self {
        self.velocity = velocity;
        self.initial.velocity = velocity;
        self
    }

    pub fn with_angular_velocity(mut self, angular_velocity: f64) -> Self {
        self.angular_velocity = angular_velocity;
        self.initial.angular_velocity = angular_velocity;
        self
    }

    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self.initial.rotation = rotation;
        self
    }

    pub fn with_colors(mut self, color: Color, fill: Color) -> Self {
        self.color = color;
        self.fill = fill;
        self
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Velocity change over the last integration step divided by its dt.
    pub fn acceleration(&self) -> DVec2 {
        self.acceleration
    }

    pub fn rotation_degrees(&self) -> f64 {
        self.rotation.to_degrees()
    }

    pub fn initial_state(&self) -> &InitialState {
        &self.initial
    }

    /// Replace the mass. Callers keep it positive.
    pub fn set_mass(&mut self, mass: f64) {
        debug_assert!(mass > 0.0, "ball mass must be positive, got {mass}");
        self.mass = mass;
    }

    /// Replace the radius, scaling mass by the square of the radius ratio so
    /// the apparent (areal) density stays the same.
    pub fn set_radius(&mut self, radius: f64) {
        debug_assert!(radius > 0.0, "ball radius must be positive, got {radius}");
        let ratio = radius / self.radius;
        self.mass *= ratio * ratio;
        self.radius = radius;
    }

    /// Radians.
    pub fn set_rotation(&mut self, rotation: f64) {
        self.rotation = rotation;
    }

    pub fn set_rotation_degrees(&mut self, degrees: f64) {
        self.set_rotation(degrees.to_radians());
    }

    /// Restore the state recorded at construction and clear acceleration.
    pub fn reset_to_initial(&mut self) {
        self.position = self.initial.position;
        self.velocity = self.initial.velocity;
        self.rotation = self.initial.rotation;
        self.angular_velocity = self.initial.angular_velocity;
        self.acceleration = DVec2::ZERO;
    }

    /// Advance one fixed step.
    ///
    /// The order is fixed: gravity, explicit Euler position update,
    /// acceleration bookkeeping, table contact, world walls, spin. Changing it
    /// changes trajectories.
    pub fn integrate(
        &mut self,
        dt: f64,
        params: &SimParams,
        table: &Line,
        world_width: f64,
    ) -> StepContacts {
        let prev_velocity = self.velocity;

        self.velocity.y += params.gravity * dt;
        self.position += self.velocity * dt;

        if dt != 0.0 {
            self.acceleration = (self.velocity - prev_velocity) / dt;
        }

        let table_contact = collision::ball_line_contact(self, table);
        if let Some(contact) = &table_contact {
            resolve::resolve_ball_line(self, contact, params.bounce, params.friction);
        }

        let boundary = collision::boundary_contact(self, world_width);
        if let Some(side) = boundary {
            resolve::resolve_boundary(self, side, world_width, params.bounce);
        }

        self.rotation += self.angular_velocity * dt;

        StepContacts {
            table: table_contact.is_some(),
            boundary,
        }
    }
}

/// Contacts a ball resolved during its own integration step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepContacts {
    pub table: bool,
    pub boundary: Option<Boundary>,
}

/// An immovable line segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub start: DVec2,
    pub end: DVec2,
    /// Presentation only; collisions treat the line as infinitely thin.
    pub thickness: f64,
    pub color: Color,
}

impl Line {
    pub fn new(start: DVec2, end: DVec2) -> Self {
        Self {
            start,
            end,
            thickness: LINE_THICKNESS,
            color: Color::LINE,
        }
    }

    /// Create a line from endpoints given in meters.
    pub fn from_meters(start: DVec2, end: DVec2, scale: Scale) -> Self {
        Self::new(scale.vec_to_units(start), scale.vec_to_units(end))
    }

    pub fn with_thickness(mut self, thickness: f64) -> Self {
        self.thickness = thickness;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// `end - start`.
    pub fn direction(&self) -> DVec2 {
        self.end - self.start
    }

    /// Closest point on the closed segment to `point`, or `None` for a
    /// zero-length line.
    pub fn closest_point(&self, point: DVec2) -> Option<DVec2> {
        let dir = self.direction();
        let len_sq = dir.length_squared();
        if len_sq == 0.0 {
            return None;
        }
        let t = ((point - self.start).dot(dir) / len_sq).clamp(0.0, 1.0);
        Some(self.start + dir * t)
    }
}

/// The closed set of body shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum BodyKind {
    Ball(Ball),
    Line(Line),
}

/// A body record: a stable id plus its shape and state.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    id: BodyId,
    kind: BodyKind,
}

impl Body {
    pub(crate) fn new(id: BodyId, kind: BodyKind) -> Self {
        Self { id, kind }
    }

    pub fn id(&self) -> BodyId {
        self.id
    }

    pub fn kind(&self) -> &BodyKind {
        &self.kind
    }

    /// Static bodies never move and are skipped by integration and the
    /// pairwise sweep.
    pub fn is_static(&self) -> bool {
        matches!(self.kind, BodyKind::Line(_))
    }

    pub fn as_ball(&self) -> Option<&Ball> {
        match &self.kind {
            BodyKind::Ball(ball) => Some(ball),
            BodyKind::Line(_) => None,
        }
    }

    pub fn as_ball_mut(&mut self) -> Option<&mut Ball> {
        match &mut self.kind {
            BodyKind::Ball(ball) => Some(ball),
            BodyKind::Line(_) => None,
        }
    }

    pub fn as_line(&self) -> Option<&Line> {
        match &self.kind {
            BodyKind::Line(line) => Some(line),
            BodyKind::Ball(_) => None,
        }
    }

    pub fn as_line_mut(&mut self) -> Option<&mut Line> {
        match &mut self.kind {
            BodyKind::Line(line) => Some(line),
            BodyKind::Ball(_) => None,
        }
    }

    /// Advance the body one step. Lines do nothing.
    pub fn integrate(
        &mut self,
        dt: f64,
        params: &SimParams,
        table: &Line,
        world_width: f64,
    ) -> StepContacts {
        match &mut self.kind {
            BodyKind::Ball(ball) => ball.integrate(dt, params, table, world_width),
            BodyKind::Line(_) => StepContacts::default(),
        }
    }

    /// Contact between this body and `other`, with the normal pointing from
    /// `self` toward `other`. Two lines never collide.
    pub fn collide_with(&self, other: &Body) -> Option<Contact> {
        match (&self.kind, &other.kind) {
            (BodyKind::Ball(a), BodyKind::Ball(b)) => collision::ball_ball_contact(a, b),
            (BodyKind::Ball(ball), BodyKind::Line(line)) => {
                collision::ball_line_contact(ball, line).map(Contact::flipped)
            },
            (BodyKind::Line(line), BodyKind::Ball(ball)) => {
                collision::ball_line_contact(ball, line)
            },
            (BodyKind::Line(_), BodyKind::Line(_)) => None,
        }
    }
}
