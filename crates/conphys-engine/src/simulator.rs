use conphys_core::{BodyId, SimError, SimParams, SimResult};

use crate::body::{Ball, Body, BodyKind, Line};
use crate::collision;
use crate::diagnostics::Diagnostics;
use crate::resolve;
use crate::snapshot::BodySnapshot;

/// Contact counts and clock for one `update` call.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameReport {
    /// Elapsed simulation time after the frame (s).
    pub elapsed: f64,
    /// Balls that touched the table this frame.
    pub table_contacts: usize,
    /// Balls clamped at a world wall this frame.
    pub boundary_hits: usize,
    /// Overlapping ball pairs found by the sweep (including separating ones).
    pub pair_contacts: usize,
}

/// Collects bodies and assigns ids before a [`Simulator`] is built.
#[derive(Debug)]
pub struct SimulatorBuilder {
    bodies: Vec<Body>,
    table: Option<BodyId>,
    params: SimParams,
    world_width: f64,
}

impl SimulatorBuilder {
    pub fn new(world_width: f64) -> Self {
        Self {
            bodies: Vec::new(),
            table: None,
            params: SimParams::default(),
            world_width,
        }
    }

    pub fn params(mut self, params: SimParams) -> Self {
        self.params = params;
        self
    }

    fn push(&mut self, kind: BodyKind) -> BodyId {
        let id = BodyId(self.bodies.len() as u32);
        self.bodies.push(Body::new(id, kind));
        id
    }

    pub fn add_ball(&mut self, ball: Ball) -> BodyId {
        self.push(BodyKind::Ball(ball))
    }

    pub fn add_line(&mut self, line: Line) -> BodyId {
        self.push(BodyKind::Line(line))
    }

    /// Add a line and designate it as the table.
    pub fn add_table(&mut self, line: Line) -> BodyId {
        let id = self.add_line(line);
        self.table = Some(id);
        id
    }

    /// Validate the body set and build the simulator.
    ///
    /// Without an explicit table the first line becomes the table. A body set
    /// with no line at all is rejected here rather than on the first frame.
    pub fn build(self) -> SimResult<Simulator> {
        for body in &self.bodies {
            if let Some(ball) = body.as_ball() {
                validate_mass(body.id(), ball.mass())?;
                validate_radius(body.id(), ball.radius())?;
            }
        }

        let table = match self.table {
            Some(id) => id,
            None => self
                .bodies
                .iter()
                .find(|b| b.as_line().is_some())
                .map(Body::id)
                .ok_or(SimError::MissingTable)?,
        };
        match self.bodies.get(table.index()) {
            Some(body) if body.as_line().is_some() => {},
            Some(_) => return Err(SimError::TableNotALine(table)),
            None => return Err(SimError::UnknownBody(table)),
        }

        if let Err(e) = self.params.validate() {
            tracing::warn!(error = %e, "Building simulator with out-of-range parameters");
        }

        let balls = self.bodies.iter().filter(|b| b.as_ball().is_some()).count();
        tracing::debug!(
            balls,
            lines = self.bodies.len() - balls,
            %table,
            world_width = self.world_width,
            "Simulator built"
        );

        Ok(Simulator {
            bodies: self.bodies,
            table,
            params: self.params,
            world_width: self.world_width,
            elapsed: 0.0,
        })
    }
}

fn validate_mass(id: BodyId, mass: f64) -> SimResult<()> {
    if mass.is_finite() && mass > 0.0 {
        Ok(())
    } else {
        Err(SimError::InvalidMass { id, mass })
    }
}

fn validate_radius(id: BodyId, radius: f64) -> SimResult<()> {
    if radius.is_finite() && radius > 0.0 {
        Ok(())
    } else {
        Err(SimError::InvalidRadius { id, radius })
    }
}

/// Fixed-timestep simulator over a fixed set of balls and lines.
///
/// Single-threaded: `update`, `set_parameters` and the property setters all
/// take `&mut self`, so they cannot overlap.
#[derive(Debug, Clone)]
pub struct Simulator {
    bodies: Vec<Body>,
    table: BodyId,
    params: SimParams,
    world_width: f64,
    elapsed: f64,
}

impl Simulator {
    pub fn builder(world_width: f64) -> SimulatorBuilder {
        SimulatorBuilder::new(world_width)
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.get(id.index())
    }

    pub fn ball(&self, id: BodyId) -> SimResult<&Ball> {
        self.body(id)
            .ok_or(SimError::UnknownBody(id))?
            .as_ball()
            .ok_or(SimError::NotABall(id))
    }

    fn ball_mut(&mut self, id: BodyId) -> SimResult<&mut Ball> {
        self.bodies
            .get_mut(id.index())
            .ok_or(SimError::UnknownBody(id))?
            .as_ball_mut()
            .ok_or(SimError::NotABall(id))
    }

    fn line_mut(&mut self, id: BodyId) -> SimResult<&mut Line> {
        self.bodies
            .get_mut(id.index())
            .ok_or(SimError::UnknownBody(id))?
            .as_line_mut()
            .ok_or(SimError::NotALine(id))
    }

    pub fn balls(&self) -> impl Iterator<Item = (BodyId, &Ball)> {
        self.bodies
            .iter()
            .filter_map(|b| b.as_ball().map(|ball| (b.id(), ball)))
    }

    pub fn table_id(&self) -> BodyId {
        self.table
    }

    /// The table line. Copied out because integration needs it while the
    /// body list is borrowed mutably.
    pub fn table(&self) -> Line {
        match self.bodies[self.table.index()].kind() {
            BodyKind::Line(line) => *line,
            // The builder only accepts a line as the table and the body set
            // never changes kind afterwards.
            BodyKind::Ball(_) => unreachable!("table {} is not a line", self.table),
        }
    }

    pub fn params(&self) -> &SimParams {
        &self.params
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn world_width(&self) -> f64 {
        self.world_width
    }

    /// Advance the simulation by `dt` seconds (scaled by `time_scale`).
    ///
    /// Every ball integrates first, resolving its own table and wall contacts.
    /// Only then are ball pairs swept, so every pair sees post-integration
    /// positions.
    pub fn update(&mut self, dt: f64) -> FrameReport {
        let dt = dt * self.params.time_scale;
        self.elapsed += dt;

        let table = self.table();
        let mut report = FrameReport::default();
        for body in &mut self.bodies {
            let contacts = body.integrate(dt, &self.params, &table, self.world_width);
            report.table_contacts += usize::from(contacts.table);
            report.boundary_hits += usize::from(contacts.boundary.is_some());
        }

        report.pair_contacts = self.resolve_ball_pairs();
        report.elapsed = self.elapsed;

        tracing::trace!(
            elapsed = report.elapsed,
            table = report.table_contacts,
            walls = report.boundary_hits,
            pairs = report.pair_contacts,
            "Frame stepped"
        );
        report
    }

    /// O(n^2) sweep over ball pairs; lines never take part.
    fn resolve_ball_pairs(&mut self) -> usize {
        let bounce = self.params.bounce;
        let mut contacts = 0;
        for j in 1..self.bodies.len() {
            let (head, tail) = self.bodies.split_at_mut(j);
            let Some(b) = tail[0].as_ball_mut() else {
                continue;
            };
            for body in head.iter_mut() {
                let Some(a) = body.as_ball_mut() else {
                    continue;
                };
                if let Some(contact) = collision::ball_ball_contact(a, b) {
                    resolve::resolve_ball_pair(a, b, &contact, bounce);
                    contacts += 1;
                }
            }
        }
        contacts
    }

    /// Replace the whole parameter set. Applies from the next `update`;
    /// existing positions and velocities are not rescaled.
    pub fn set_parameters(&mut self, params: SimParams) {
        if let Err(e) = params.validate() {
            tracing::warn!(error = %e, "Applying out-of-range simulation parameters");
        }
        tracing::debug!(?params, "Simulation parameters replaced");
        self.params = params;
    }

    /// Zero the clock. Bodies are untouched.
    pub fn reset_time(&mut self) {
        tracing::debug!(elapsed = self.elapsed, "Simulation time reset");
        self.elapsed = 0.0;
    }

    /// Return every ball to the state recorded when it was built. The clock
    /// and lines are untouched.
    pub fn reset_bodies(&mut self) {
        for ball in self.bodies.iter_mut().filter_map(Body::as_ball_mut) {
            ball.reset_to_initial();
        }
        tracing::debug!("Bodies reset to initial state");
    }

    /// Move the right-hand world wall (e.g. after a viewport resize).
    pub fn set_world_width(&mut self, world_width: f64) {
        self.world_width = world_width;
    }

    pub fn set_ball_mass(&mut self, id: BodyId, mass: f64) -> SimResult<()> {
        validate_mass(id, mass)?;
        self.ball_mut(id)?.set_mass(mass);
        Ok(())
    }

    /// Set a ball's radius in simulation units. Mass follows the square of
    /// the radius ratio.
    pub fn set_ball_radius(&mut self, id: BodyId, radius: f64) -> SimResult<()> {
        validate_radius(id, radius)?;
        self.ball_mut(id)?.set_radius(radius);
        Ok(())
    }

    /// Set a ball's radius in meters, converted with the current scale.
    pub fn set_ball_radius_meters(&mut self, id: BodyId, radius: f64) -> SimResult<()> {
        let units = self.params.scale().to_units(radius);
        self.set_ball_radius(id, units)
    }

    pub fn set_ball_rotation_degrees(&mut self, id: BodyId, degrees: f64) -> SimResult<()> {
        self.ball_mut(id)?.set_rotation_degrees(degrees);
        Ok(())
    }

    pub fn set_line_thickness(&mut self, id: BodyId, thickness: f64) -> SimResult<()> {
        self.line_mut(id)?.thickness = thickness;
        Ok(())
    }

    /// Derived quantities for one ball under the current parameters.
    pub fn diagnostics(&self, id: BodyId) -> SimResult<Diagnostics> {
        let ball = self.ball(id)?;
        Ok(Diagnostics::compute(
            ball,
            &self.table(),
            self.params.gravity,
            self.params.scale(),
        ))
    }

    /// Geometry of every body for drawing this frame.
    pub fn snapshot(&self) -> Vec<BodySnapshot> {
        self.bodies.iter().map(BodySnapshot::from).collect()
    }
}
