//! Deterministic 2D simulator for balls and static line segments.
//!
//! Bodies live in simulation units (one unit per display pixel) with +y
//! pointing down, so gravity accelerates balls toward +y. Each
//! [`Simulator::update`] integrates every ball against the designated table
//! line and the vertical world walls, then resolves overlapping ball pairs
//! with a restitution impulse. Real-world units only appear at the edges:
//! [`scene`] builds bodies from meters and [`diagnostics`] reports SI values.

pub mod body;
pub mod collision;
pub mod diagnostics;
pub mod resolve;
pub mod scene;
pub mod simulator;
pub mod snapshot;

pub use body::{Ball, Body, BodyKind, InitialState, Line, StepContacts};
pub use collision::{Boundary, Contact};
pub use diagnostics::Diagnostics;
pub use scene::{BallSpec, LineSpec, SceneConfig, load_scene, load_scene_from_file};
pub use simulator::{FrameReport, Simulator, SimulatorBuilder};
pub use snapshot::BodySnapshot;

pub use conphys_core::{BodyId, Color, Scale, SimConfig, SimError, SimParams, SimResult};
