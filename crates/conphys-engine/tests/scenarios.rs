mod common;

use glam::DVec2;

use common::{DT, TABLE_Y, TestWorld, flat_table, no_gravity};
use conphys_core::test_helpers::{EPS, assert_close, assert_vec_close};
use conphys_engine::{Ball, BodySnapshot, SceneConfig, SimConfig, SimError, SimParams, Simulator};

#[test]
fn free_fall_first_frame() {
    let mut world = TestWorld::new(
        SimParams::default(),
        [Ball::new(DVec2::new(500.0, 10.0), 1.0, 1.0)],
    );
    world.step(1);

    let ball = world.ball(0);
    assert_close(ball.velocity.y, SimParams::default().gravity * DT, EPS);
    assert_close(ball.velocity.x, 0.0, EPS);
    assert!(ball.position.y > 10.0);
}

#[test]
fn dropped_ball_settles_on_table() {
    let params = SimParams::default();
    let radius = 0.5;
    let mut world = TestWorld::new(
        params,
        [Ball::new(DVec2::new(500.0, TABLE_Y - radius - 5.0), radius, 1.0)],
    );
    world.step(900);

    let ball = world.ball(0);
    let distance = TABLE_Y - ball.position.y;
    assert!(
        (distance - radius).abs() < 1e-6,
        "ball should rest on the table, distance {distance}"
    );
    assert!(
        ball.velocity.y.abs() < params.gravity * DT,
        "residual vertical speed {} too large",
        ball.velocity.y
    );
}

#[test]
fn ball_never_sinks_through_table() {
    let mut world = TestWorld::new(
        SimParams::default(),
        [Ball::new(DVec2::new(500.0, 50.0), 3.0, 1.0).with_velocity(DVec2::new(40.0, 0.0))],
    );
    for _ in 0..600 {
        world.step(1);
        let ball = world.ball(0);
        assert!(
            TABLE_Y - ball.position.y >= ball.radius() - 1e-9,
            "ball center at {} is inside the table",
            ball.position.y
        );
    }
}

#[test]
fn elastic_head_on_swap() {
    let params = SimParams {
        bounce: 1.0,
        ..no_gravity()
    };
    let mut world = TestWorld::new(
        params,
        [
            Ball::new(DVec2::new(100.0, 50.0), 1.0, 2.0).with_velocity(DVec2::new(3.0, 0.0)),
            Ball::new(DVec2::new(101.5, 50.0), 1.0, 2.0).with_velocity(DVec2::new(-3.0, 0.0)),
        ],
    );
    let report = world.sim.update(DT);

    assert_eq!(report.pair_contacts, 1);
    assert_vec_close(world.ball(0).velocity, DVec2::new(-3.0, 0.0), EPS);
    assert_vec_close(world.ball(1).velocity, DVec2::new(3.0, 0.0), EPS);
}

#[test]
fn separating_pair_keeps_velocities() {
    let mut world = TestWorld::new(
        no_gravity(),
        [
            Ball::new(DVec2::new(100.0, 50.0), 1.0, 1.0).with_velocity(DVec2::new(-1.0, 0.0)),
            Ball::new(DVec2::new(101.0, 50.0), 1.0, 1.0).with_velocity(DVec2::new(1.0, 0.0)),
        ],
    );
    world.sim.update(DT);

    assert_vec_close(world.ball(0).velocity, DVec2::new(-1.0, 0.0), EPS);
    assert_vec_close(world.ball(1).velocity, DVec2::new(1.0, 0.0), EPS);
    // Positional correction still runs for the overlap.
    assert_close(
        world.ball(0).position.distance(world.ball(1).position),
        2.0,
        EPS,
    );
}

#[test]
fn pair_momentum_conserved_through_update() {
    let mut world = TestWorld::new(
        SimParams {
            bounce: 0.6,
            ..no_gravity()
        },
        [
            Ball::new(DVec2::new(300.0, 40.0), 4.0, 1.0).with_velocity(DVec2::new(30.0, 5.0)),
            Ball::new(DVec2::new(306.0, 42.0), 4.0, 3.0).with_velocity(DVec2::new(-10.0, 0.0)),
        ],
    );
    let momentum = |w: &TestWorld| {
        w.ball(0).velocity * w.ball(0).mass() + w.ball(1).velocity * w.ball(1).mass()
    };
    let before = momentum(&world);
    world.step(1);
    assert_vec_close(momentum(&world), before, 1e-9);
}

#[test]
fn scale_change_leaves_state_alone() {
    let mut world = TestWorld::new(
        SimParams::default(),
        [Ball::new(DVec2::new(500.0, 20.0), 5.0, 1.0).with_velocity(DVec2::new(10.0, 0.0))],
    );
    world.step(10);
    let before = world.ball(0).clone();
    let speed_before = world.sim.diagnostics(world.balls[0]).unwrap().speed;

    world.sim.set_parameters(SimParams {
        meters_per_unit: 0.2,
        ..*world.sim.params()
    });
    let after = world.ball(0);
    assert_eq!(after.position, before.position);
    assert_eq!(after.velocity, before.velocity);
    assert_eq!(after.radius(), before.radius());

    let speed_after = world.sim.diagnostics(world.balls[0]).unwrap().speed;
    assert_close(speed_after, 2.0 * speed_before, EPS);
}

#[test]
fn missing_table_fails_at_build() {
    let mut builder = Simulator::builder(100.0);
    builder.add_ball(Ball::new(DVec2::new(10.0, 10.0), 1.0, 1.0));
    assert!(matches!(builder.build(), Err(SimError::MissingTable)));
}

#[test]
fn radius_change_preserves_density() {
    let mut world = TestWorld::new(
        SimParams::default(),
        [Ball::new(DVec2::new(500.0, 20.0), 2.0, 3.0)],
    );
    let id = world.balls[0];
    world.sim.set_ball_radius(id, 6.0).unwrap();
    assert_close(world.ball(0).mass(), 27.0, EPS);

    world.sim.set_ball_radius(id, 3.0).unwrap();
    assert_close(world.ball(0).mass(), 6.75, EPS);
}

#[test]
fn reset_time_leaves_bodies_untouched() {
    let mut world = TestWorld::new(
        SimParams::default(),
        [Ball::new(DVec2::new(500.0, 20.0), 2.0, 3.0)],
    );
    world.step(30);
    let snapshot = world.sim.snapshot();

    world.sim.reset_time();
    assert_eq!(world.sim.elapsed(), 0.0);
    assert_eq!(world.sim.snapshot(), snapshot);
}

#[test]
fn elapsed_accumulates_scaled_time() {
    let mut world = TestWorld::new(
        SimParams {
            time_scale: 2.0,
            ..SimParams::default()
        },
        [],
    );
    world.step(60);
    assert_close(world.sim.elapsed(), 2.0, 1e-9);
}

#[test]
fn walls_keep_balls_inside() {
    let mut world = TestWorld::new(
        no_gravity(),
        [
            Ball::new(DVec2::new(10.0, 50.0), 5.0, 1.0).with_velocity(DVec2::new(-600.0, 0.0)),
            Ball::new(DVec2::new(990.0, 50.0), 5.0, 1.0).with_velocity(DVec2::new(600.0, 0.0)),
        ],
    );
    let report = world.sim.update(DT);
    assert_eq!(report.boundary_hits, 2);
    assert_close(world.ball(0).position.x, 5.0, EPS);
    assert_close(world.ball(1).position.x, 995.0, EPS);
    assert!(world.ball(0).velocity.x > 0.0);
    assert!(world.ball(1).velocity.x < 0.0);
}

#[test]
fn snapshot_lists_every_body_in_id_order() {
    let world = TestWorld::new(
        SimParams::default(),
        [
            Ball::new(DVec2::new(100.0, 20.0), 2.0, 1.0),
            Ball::new(DVec2::new(200.0, 20.0), 3.0, 1.0),
        ],
    );
    let snapshot = world.sim.snapshot();
    assert_eq!(snapshot.len(), 3);
    for (i, body) in snapshot.iter().enumerate() {
        assert_eq!(body.id().index(), i);
    }
    assert!(matches!(snapshot[0], BodySnapshot::Line { start, .. } if start == flat_table().start));
    assert!(matches!(snapshot[2], BodySnapshot::Ball { radius, .. } if radius == 3.0));
}

#[test]
fn ball_grid_runs_without_blowing_up() {
    let mut sim = SceneConfig::ball_grid().build(&SimConfig::default()).unwrap();
    for _ in 0..120 {
        sim.update(DT);
    }
    assert_eq!(sim.balls().count(), 200);
    for (id, ball) in sim.balls() {
        assert!(
            ball.position.is_finite() && ball.velocity.is_finite(),
            "ball {id} diverged: {ball:?}"
        );
    }
}

#[test]
fn reset_bodies_replays_identically() {
    let mut sim = SceneConfig::single_ball().build(&SimConfig::default()).unwrap();
    for _ in 0..90 {
        sim.update(DT);
    }
    let first_run = sim.snapshot();

    sim.reset_bodies();
    sim.reset_time();
    for _ in 0..90 {
        sim.update(DT);
    }
    assert_eq!(sim.snapshot(), first_run);
}
