//! Conversion between simulation units and meters.
//!
//! All physics runs in simulation units (one unit per display pixel). A single
//! meters-per-unit factor converts at the edges: when bodies are built from
//! real-world sizes and when values are shown to a user. Changing the factor
//! never rescales state that already exists.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Default meters-per-unit factor (1 unit = 0.1 m).
pub const DEFAULT_METERS_PER_UNIT: f64 = 0.1;

/// Meters-per-unit conversion factor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Scale {
    meters_per_unit: f64,
}

impl Scale {
    pub const fn new(meters_per_unit: f64) -> Self {
        Self { meters_per_unit }
    }

    pub fn meters_per_unit(self) -> f64 {
        self.meters_per_unit
    }

    /// Simulation units -> meters.
    pub fn to_meters(self, units: f64) -> f64 {
        units * self.meters_per_unit
    }

    /// Meters -> simulation units.
    pub fn to_units(self, meters: f64) -> f64 {
        meters / self.meters_per_unit
    }

    pub fn vec_to_meters(self, units: DVec2) -> DVec2 {
        units * self.meters_per_unit
    }

    pub fn vec_to_units(self, meters: DVec2) -> DVec2 {
        meters / self.meters_per_unit
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self::new(DEFAULT_METERS_PER_UNIT)
    }
}
