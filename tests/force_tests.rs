use squishy::{ForceKind, ForceRelation, PointMass, PointRef, Vec, Vec2};

fn points(a: Vec2<f64>, b: Vec2<f64>) -> (PointMass<Vec2<f64>>, PointMass<Vec2<f64>>) {
    (PointMass::new(a), PointMass::new(b))
}

#[test]
fn spring_at_rest_length_is_zero() {
    let (a, b) = points(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0));
    let f = ForceKind::spring(10.0, 5.0).evaluate(&a, &b);
    assert_eq!(f.length(), 0.0);
}

#[test]
fn stretched_spring_attracts() {
    let (a, b) = points(Vec2::new(0.0, 0.0), Vec2::new(15.0, 0.0));
    let f = ForceKind::spring(10.0, 2.0).evaluate(&a, &b);
    assert!((f.length() - 10.0).abs() < 1e-12, "|f| = {}", f.length());
    assert!(f.x > 0.0, "force on a should point at b, got {:?}", f);
}

#[test]
fn compressed_spring_repels() {
    let (a, b) = points(Vec2::new(0.0, 0.0), Vec2::new(0.0, 4.0));
    let f = ForceKind::spring(10.0, 2.0).evaluate(&a, &b);
    assert!((f.length() - 12.0).abs() < 1e-12);
    assert!(f.y < 0.0, "force on a should point away from b, got {:?}", f);
}

#[test]
fn spring_is_antisymmetric_when_applied_both_ways() {
    let (a, b) = points(Vec2::new(1.0, 2.0), Vec2::new(-3.0, 5.0));
    let rel = ForceRelation::new(PointRef::Edge(0), PointRef::Edge(1), ForceKind::spring(2.0, 3.0));
    let (fa, fb) = rel.forces(&a, &b);
    assert!((fa + fb).length() < 1e-12);
}

#[test]
fn damping_without_relative_motion_is_zero() {
    let (mut a, mut b) = points(Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0));
    a.vel = Vec2::new(3.0, 3.0);
    b.vel = Vec2::new(3.0, 3.0);
    assert_eq!(ForceKind::damping(4.0).evaluate(&a, &b), Vec2::zero());
}

#[test]
fn damping_with_coincident_points_is_zero() {
    let (mut a, b) = points(Vec2::new(2.0, 2.0), Vec2::new(2.0, 2.0));
    a.vel = Vec2::new(1.0, 0.0);
    assert_eq!(ForceKind::damping(4.0).evaluate(&a, &b), Vec2::zero());
}

#[test]
fn radial_power_scales_with_distance() {
    let (a, b) = points(Vec2::new(0.0, 3.0), Vec2::new(0.0, 0.0));
    let f = ForceKind::radial_power(2.0, 2.0).evaluate(&a, &b);
    assert!((f.y - 18.0).abs() < 1e-12, "got {:?}", f);
    let inv = ForceKind::radial_power(9.0, -2.0).evaluate(&a, &b);
    assert!((inv.y - 1.0).abs() < 1e-12, "got {:?}", inv);
}
