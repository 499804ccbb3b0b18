use squishy::{Ball, BallConfig, PointRef, Vec2, World};

fn kicked_ball() -> Ball<f32> {
    let config = BallConfig::new()
        .with_radius(15.0)
        .with_point_count(30)
        .with_stiffness(1.0, 0.25)
        .with_damping(0.1, 0.05);
    let mut ball = Ball::new(&config);
    ball.set_velocity(PointRef::Edge(0), Vec2::new(10.0, 0.0)).unwrap();
    ball.set_velocity(PointRef::Edge(2), Vec2::new(-10.0, 0.0)).unwrap();
    ball
}

#[test]
fn ball_deterministic() {
    let results: Vec<_> = (0..10).map(|_| {
        let mut ball = kicked_ball();
        for _ in 0..500 {
            ball.update(0.05);
        }
        (ball.points(), ball.center())
    }).collect();

    for r in &results[1..] {
        assert_eq!(results[0].1, r.1);
        for (a, b) in results[0].0.iter().zip(r.0.iter()) {
            assert_eq!(a.x, b.x);
            assert_eq!(a.y, b.y);
        }
    }
}

#[test]
fn world_deterministic() {
    let results: Vec<_> = (0..5).map(|_| {
        let configs = [
            BallConfig::new().with_averaging(true, false),
            BallConfig::new().with_position(Vec2::new(40.0, 0.0)).with_averaging(false, true),
        ];
        let mut world = World::from_configs(configs.iter());
        for ball in 0..world.len() {
            world
                .ball_mut(ball)
                .unwrap()
                .poke(Vec2::new(0.0, 100.0), Vec2::new(0.0, 5.0));
        }
        for _ in 0..300 {
            world.step(1.0f32 / 60.0);
        }
        world.balls().iter().map(|b| b.points()).collect::<Vec<_>>()
    }).collect();

    for r in &results[1..] {
        assert_eq!(&results[0], r);
    }
}
