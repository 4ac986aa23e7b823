pub mod color;
pub mod config;
pub mod error;
pub mod ids;
pub mod params;
pub mod units;

pub use color::Color;
pub use config::SimConfig;
pub use error::{ConfigError, ConfigResult, SimError, SimResult};
pub use ids::BodyId;
pub use params::SimParams;
pub use units::Scale;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers {
    use glam::DVec2;

    /// Tolerance used by the physics tests for values that should match exactly
    /// up to floating-point rounding.
    pub const EPS: f64 = 1e-9;

    /// Assert two scalars agree within `eps`.
    #[track_caller]
    pub fn assert_close(actual: f64, expected: f64, eps: f64) {
        assert!(
            (actual - expected).abs() <= eps,
            "expected {expected}, got {actual} (tolerance {eps})"
        );
    }

    /// Assert two vectors agree component-wise within `eps`.
    #[track_caller]
    pub fn assert_vec_close(actual: DVec2, expected: DVec2, eps: f64) {
        assert!(
            (actual.x - expected.x).abs() <= eps && (actual.y - expected.y).abs() <= eps,
            "expected {expected:?}, got {actual:?} (tolerance {eps})"
        );
    }
}
