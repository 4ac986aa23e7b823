use glam::DVec2;
use serde::Serialize;

use conphys_core::{BodyId, Color};

use crate::body::{Body, BodyKind};

/// Per-frame drawing data for one body, in simulation units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BodySnapshot {
    Ball {
        id: BodyId,
        position: DVec2,
        radius: f64,
        /// Radians, for drawing the orientation marker.
        rotation: f64,
        color: Color,
        fill: Color,
    },
    Line {
        id: BodyId,
        start: DVec2,
        end: DVec2,
        thickness: f64,
        color: Color,
    },
}

impl BodySnapshot {
    pub fn id(&self) -> BodyId {
        match self {
            Self::Ball { id, .. } | Self::Line { id, .. } => *id,
        }
    }
}

impl From<&Body> for BodySnapshot {
    fn from(body: &Body) -> Self {
        let id = body.id();
        match body.kind() {
            BodyKind::Ball(ball) => Self::Ball {
                id,
                position: ball.position,
                radius: ball.radius(),
                rotation: ball.rotation,
                color: ball.color,
                fill: ball.fill,
            },
            BodyKind::Line(line) => Self::Line {
                id,
                start: line.start,
                end: line.end,
                thickness: line.thickness,
                color: line.color,
            },
        }
    }
}
