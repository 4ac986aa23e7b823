use serde::{Deserialize, Serialize};

use crate::error::{SimError, SimResult};
use crate::units::{DEFAULT_METERS_PER_UNIT, Scale};

/// Gravity acceleration (simulation units/s^2, toward +y).
pub const GRAVITY: f64 = 9.8;
/// Coefficient of restitution for every contact.
pub const BOUNCE: f64 = 0.8;
/// Tangential velocity multiplier applied on each line contact.
pub const FRICTION: f64 = 0.999;

/// The shared, externally editable parameter set.
///
/// The simulator owns the single copy; everything that needs a parameter
/// receives it as an argument, so there is nothing to keep in sync when the
/// settings panel changes a value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimParams {
    /// Constant vertical acceleration in simulation units/s^2.
    pub gravity: f64,
    /// Restitution in [0, 1]: 0 kills the normal velocity, 1 mirrors it.
    pub bounce: f64,
    /// Tangential multiplier per line contact: 1 keeps all speed.
    pub friction: f64,
    /// Multiplier applied to every frame's dt.
    pub time_scale: f64,
    /// Meters per simulation unit.
    pub meters_per_unit: f64,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            bounce: BOUNCE,
            friction: FRICTION,
            time_scale: 1.0,
            meters_per_unit: DEFAULT_METERS_PER_UNIT,
        }
    }
}

impl SimParams {
    pub fn scale(&self) -> Scale {
        Scale::new(self.meters_per_unit)
    }

    /// Check every value against the range the settings panel allows.
    pub fn validate(&self) -> SimResult<()> {
        let all_finite = [
            self.gravity,
            self.bounce,
            self.friction,
            self.time_scale,
            self.meters_per_unit,
        ]
        .iter()
        .all(|v| v.is_finite());
        if !all_finite {
            return Err(SimError::InvalidParameter(format!(
                "all parameters must be finite: {self:?}"
            )));
        }
        if self.gravity < 0.0 {
            return Err(SimError::InvalidParameter(format!(
                "gravity must be >= 0, got {}",
                self.gravity
            )));
        }
        if !(0.0..=1.0).contains(&self.bounce) {
            return Err(SimError::InvalidParameter(format!(
                "bounce must be in [0, 1], got {}",
                self.bounce
            )));
        }
        if !(0.0..=1.0).contains(&self.friction) {
            return Err(SimError::InvalidParameter(format!(
                "friction must be in [0, 1], got {}",
                self.friction
            )));
        }
        if self.time_scale <= 0.0 {
            return Err(SimError::InvalidParameter(format!(
                "time_scale must be > 0, got {}",
                self.time_scale
            )));
        }
        if self.meters_per_unit <= 0.0 {
            return Err(SimError::InvalidParameter(format!(
                "meters_per_unit must be > 0, got {}",
                self.meters_per_unit
            )));
        }
        Ok(())
    }
}
