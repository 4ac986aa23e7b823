//! Scene descriptions: the initial body set in real-world units.
//!
//! Scenes are plain data so they can live in JSON or TOML files next to the
//! simulation config. Positions and radii are meters; line thickness is a
//! drawing width in simulation units.

use std::path::Path;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use conphys_core::{Color, ConfigError, ConfigResult, SimConfig, SimError, SimResult};

use crate::body::{Ball, LINE_THICKNESS, Line};
use crate::simulator::Simulator;

/// One ball in a scene file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BallSpec {
    /// Center (m).
    pub center: DVec2,
    /// Radius (m).
    pub radius: f64,
    /// kg
    #[serde(default = "default_mass")]
    pub mass: f64,
    /// m/s
    #[serde(default)]
    pub velocity: DVec2,
    /// rad/s
    #[serde(default)]
    pub angular_velocity: f64,
    #[serde(default = "default_ball_color")]
    pub color: Color,
    #[serde(default = "default_ball_fill")]
    pub fill: Color,
}

/// One line in a scene file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineSpec {
    /// Start point (m).
    pub start: DVec2,
    /// End point (m).
    pub end: DVec2,
    #[serde(default = "default_thickness")]
    pub thickness: f64,
    #[serde(default = "default_line_color")]
    pub color: Color,
    /// Marks this line as the table.
    #[serde(default)]
    pub table: bool,
}

fn default_mass() -> f64 {
    1.0
}

fn default_thickness() -> f64 {
    LINE_THICKNESS
}

fn default_ball_color() -> Color {
    Color::BALL_OUTLINE
}

fn default_ball_fill() -> Color {
    Color::BALL_FILL
}

fn default_line_color() -> Color {
    Color::LINE
}

impl BallSpec {
    pub fn new(center: DVec2, radius: f64, mass: f64) -> Self {
        Self {
            center,
            radius,
            mass,
            velocity: DVec2::ZERO,
            angular_velocity: 0.0,
            color: Color::BALL_OUTLINE,
            fill: Color::BALL_FILL,
        }
    }
}

impl LineSpec {
    pub fn new(start: DVec2, end: DVec2) -> Self {
        Self {
            start,
            end,
            thickness: LINE_THICKNESS,
            color: Color::LINE,
            table: false,
        }
    }
}

/// A full scene: every ball and line, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    #[serde(default)]
    pub balls: Vec<BallSpec>,
    #[serde(default)]
    pub lines: Vec<LineSpec>,
}

impl SceneConfig {
    /// 20 x 10 grid of 0.5 m balls resting above a sloped table.
    pub fn ball_grid() -> Self {
        let mut balls = Vec::with_capacity(200);
        for x in 0..20 {
            for y in 0..10 {
                balls.push(BallSpec::new(
                    DVec2::new(f64::from(x) + 2.0, 10.0 + f64::from(y)),
                    0.5,
                    1.0,
                ));
            }
        }
        let table = LineSpec {
            thickness: 2.0,
            table: true,
            ..LineSpec::new(DVec2::new(-10.0, 40.0), DVec2::new(200.0, 50.0))
        };
        Self {
            balls,
            lines: vec![table],
        }
    }

    /// One large ball over a sloped table.
    pub fn single_ball() -> Self {
        let table = LineSpec {
            table: true,
            ..LineSpec::new(DVec2::new(0.0, 40.0), DVec2::new(100.0, 50.0))
        };
        Self {
            balls: vec![BallSpec::new(DVec2::new(10.0, 20.0), 5.0, 1.0)],
            lines: vec![table],
        }
    }

    /// Convert to simulation units with the config's scale and build a
    /// simulator. Balls get the lower ids, lines follow.
    pub fn build(&self, config: &SimConfig) -> SimResult<Simulator> {
        if self.lines.iter().filter(|l| l.table).count() > 1 {
            return Err(SimError::Scene(
                "more than one line is marked as the table".to_string(),
            ));
        }

        let scale = config.params.scale();
        let mut builder = Simulator::builder(config.world_width).params(config.params);

        for spec in &self.balls {
            let ball = Ball::from_meters(spec.center, spec.radius, spec.mass, scale)
                .with_velocity(scale.vec_to_units(spec.velocity))
                .with_angular_velocity(spec.angular_velocity)
                .with_colors(spec.color, spec.fill);
            builder.add_ball(ball);
        }

        let table_index = self.lines.iter().position(|l| l.table).unwrap_or(0);
        for (i, spec) in self.lines.iter().enumerate() {
            let line = Line::from_meters(spec.start, spec.end, scale)
                .with_thickness(spec.thickness)
                .with_color(spec.color);
            if i == table_index {
                builder.add_table(line);
            } else {
                builder.add_line(line);
            }
        }

        builder.build()
    }
}

/// Load a scene from a `.json` or `.toml` file.
pub fn load_scene_from_file(path: impl AsRef<Path>) -> ConfigResult<SceneConfig> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    let scene: SceneConfig = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::from_str(&content)?,
        Some("toml") => toml::from_str(&content)?,
        _ => {
            return Err(ConfigError::Invalid(format!(
                "unrecognized scene file extension: {}",
                path.display()
            )));
        },
    };
    tracing::debug!(
        path = %path.display(),
        balls = scene.balls.len(),
        lines = scene.lines.len(),
        "Scene loaded"
    );
    Ok(scene)
}

/// Load a scene, falling back to [`SceneConfig::ball_grid`] if the file is
/// missing or unparseable.
pub fn load_scene(path: impl AsRef<Path>) -> SceneConfig {
    let path = path.as_ref();
    match load_scene_from_file(path) {
        Ok(scene) => scene,
        Err(ConfigError::Io(_)) => SceneConfig::ball_grid(),
        Err(e) => {
            tracing::warn!("Failed to load scene {}: {e}, using default grid", path.display());
            SceneConfig::ball_grid()
        },
    }
}
