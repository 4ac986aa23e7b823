#![allow(dead_code)]

use glam::DVec2;

use conphys_engine::{Ball, BodyId, Line, SimParams, Simulator};

pub const DT: f64 = 1.0 / 60.0;
pub const TABLE_Y: f64 = 100.0;
pub const WORLD_WIDTH: f64 = 1000.0;

/// Horizontal table spanning the whole world at `TABLE_Y`.
pub fn flat_table() -> Line {
    Line::new(DVec2::new(0.0, TABLE_Y), DVec2::new(WORLD_WIDTH, TABLE_Y))
}

pub fn no_gravity() -> SimParams {
    SimParams {
        gravity: 0.0,
        ..SimParams::default()
    }
}

/// A simulator over the flat table plus `balls`, in insertion order.
///
/// The table is added first, so ball ids start at 1.
pub struct TestWorld {
    pub sim: Simulator,
    pub balls: Vec<BodyId>,
}

impl TestWorld {
    pub fn new(params: SimParams, balls: impl IntoIterator<Item = Ball>) -> Self {
        let mut builder = Simulator::builder(WORLD_WIDTH).params(params);
        builder.add_table(flat_table());
        let balls = balls.into_iter().map(|b| builder.add_ball(b)).collect();
        let sim = builder.build().unwrap();
        Self { sim, balls }
    }

    pub fn ball(&self, n: usize) -> &Ball {
        self.sim.ball(self.balls[n]).unwrap()
    }

    pub fn step(&mut self, frames: usize) {
        for _ in 0..frames {
            self.sim.update(DT);
        }
    }
}
