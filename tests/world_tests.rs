use squishy::{Ball, BallConfig, FixedStep, PointRef, Vec, Vec2, World};

fn two_ball_world() -> World<f64> {
    let configs = [
        BallConfig::new().with_position(Vec2::new(-30.0, 0.0)).with_point_count(8),
        BallConfig::new().with_position(Vec2::new(30.0, 0.0)).with_point_count(12),
    ];
    World::from_configs(configs.iter())
}

#[test]
fn steps_every_ball_and_counts_ticks() {
    let mut world = two_ball_world();
    assert_eq!(world.len(), 2);
    world
        .ball_mut(0)
        .unwrap()
        .set_velocity(PointRef::Edge(0), Vec2::new(0.0, 4.0))
        .unwrap();
    world
        .ball_mut(1)
        .unwrap()
        .set_velocity(PointRef::Edge(3), Vec2::new(-4.0, 0.0))
        .unwrap();
    let before: std::vec::Vec<_> = world.balls().iter().map(|b| b.points()).collect();

    for _ in 0..10 {
        world.step(0.01);
    }

    assert_eq!(world.ticks(), 10);
    for (ball, old) in world.balls().iter().zip(before.iter()) {
        assert_ne!(&ball.points(), old);
    }
}

#[test]
fn balls_do_not_interact() {
    let mut world = two_ball_world();
    let mut alone = Ball::new(&BallConfig::new().with_position(Vec2::new(30.0, 0.0)).with_point_count(12));

    world
        .ball_mut(0)
        .unwrap()
        .set_velocity(PointRef::Edge(2), Vec2::new(50.0, 0.0))
        .unwrap();

    for _ in 0..200 {
        world.step(0.01);
        alone.update(0.01);
    }
    assert_eq!(world.ball(1).unwrap().points(), alone.points());
}

#[test]
fn add_ball_returns_index() {
    let mut world = World::new();
    assert!(world.is_empty());
    let idx = world.add_ball(Ball::new(&BallConfig::<f32>::new()));
    assert_eq!(idx, 0);
    assert_eq!(world.add_ball(Ball::new(&BallConfig::new())), 1);
    assert!(world.ball(2).is_none());
}

#[test]
fn fixed_step_drives_world_at_its_own_cadence() {
    let mut world = two_ball_world();
    let mut stepper = FixedStep::new(0.125).unwrap().with_max_ticks(100);
    world
        .ball_mut(1)
        .unwrap()
        .set_velocity(PointRef::Edge(0), Vec2::new(3.0, 3.0))
        .unwrap();

    // Uneven frame times; physics still advances in whole 1/8 ticks.
    let mut run = 0;
    for elapsed in [0.1875, 0.25, 0.0625, 0.390625, 0.359375] {
        run += stepper.step_world(&mut world, elapsed);
    }
    assert_eq!(run, 10);
    assert_eq!(world.ticks(), 10);

    let mut reference = two_ball_world();
    reference
        .ball_mut(1)
        .unwrap()
        .set_velocity(PointRef::Edge(0), Vec2::new(3.0, 3.0))
        .unwrap();
    for _ in 0..10 {
        reference.step(0.125);
    }
    for (a, b) in world.balls().iter().zip(reference.balls()) {
        for (p, q) in a.points().iter().zip(b.points().iter()) {
            assert!(p.distance(*q) < 1e-12);
        }
    }
}
