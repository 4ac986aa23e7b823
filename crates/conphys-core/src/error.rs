use thiserror::Error;

use crate::ids::BodyId;

/// Errors raised while building or editing a simulation.
#[derive(Debug, Error)]
pub enum SimError {
    /// The body set has no line that can serve as the table.
    #[error("body set has no line to use as the table")]
    MissingTable,

    /// The body designated as the table is not a line.
    #[error("table body {0} is not a line")]
    TableNotALine(BodyId),

    #[error("body {id} has invalid mass {mass} (must be finite and > 0)")]
    InvalidMass { id: BodyId, mass: f64 },

    #[error("body {id} has invalid radius {radius} (must be finite and > 0)")]
    InvalidRadius { id: BodyId, radius: f64 },

    #[error("no body with id {0}")]
    UnknownBody(BodyId),

    #[error("body {0} is not a ball")]
    NotABall(BodyId),

    #[error("body {0} is not a line")]
    NotALine(BodyId),

    /// A simulation parameter is outside its accepted range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// A scene description could not be turned into bodies.
    #[error("invalid scene: {0}")]
    Scene(String),
}

/// Errors raised while reading configuration or scene files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The file parsed but holds values the simulator cannot use.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

impl From<SimError> for ConfigError {
    fn from(err: SimError) -> Self {
        Self::Invalid(err.to_string())
    }
}

/// Convenience alias for `Result<T, SimError>`.
pub type SimResult<T> = Result<T, SimError>;

/// Convenience alias for `Result<T, ConfigError>`.
pub type ConfigResult<T> = Result<T, ConfigError>;
