use squishy::{PointMass, Vec, Vec2};

#[test]
fn coasts_exactly_without_force() {
    let mut p: PointMass<Vec2<f64>> = PointMass::new(Vec2::new(1.0, -2.0));
    p.vel = Vec2::new(0.5, 0.25);
    let dt = 0.125;
    let before = p.clone();
    p.integrate(dt);
    assert_eq!(p.vel, before.vel);
    assert_eq!(p.pos, before.pos + before.vel.scale(dt));
}

#[test]
fn acceleration_is_cleared_each_step() {
    let mut p: PointMass<Vec2<f64>> = PointMass::new(Vec2::zero());
    p.apply_force(Vec2::new(2.0, 0.0));
    p.apply_force(Vec2::new(1.0, 1.0));
    assert_eq!(p.acc, Vec2::new(3.0, 1.0));
    p.integrate(0.1);
    assert_eq!(p.acc, Vec2::zero());
    let vel = p.vel;
    p.integrate(0.1);
    assert_eq!(p.vel, vel, "acceleration leaked into the next step");
}

#[test]
fn constant_force_matches_semi_implicit_euler() {
    let mut p: PointMass<Vec2<f64>> = PointMass::with_mass(Vec2::zero(), 2.0);
    let dt = 0.5;
    for _ in 0..4 {
        p.apply_force(Vec2::new(0.0, -4.0));
        p.integrate(dt);
    }
    // a = -2: v_k = -k, x_k = x_{k-1} + v_k * dt
    assert_eq!(p.vel, Vec2::new(0.0, -4.0));
    assert_eq!(p.pos, Vec2::new(0.0, -(1.0 + 2.0 + 3.0 + 4.0) * 0.5));
}
