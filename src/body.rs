//! Soft balls: a ring of edge points around a center point, held together
//! by spring-damper relations.

use crate::config::BallConfig;
use crate::error::PhysicsError;
use crate::float::Float;
use crate::force::{ForceKind, ForceRelation, PointRef};
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::point::PointMass;
use crate::vec::{Vec, Vec2};
use alloc::vec::Vec as AllocVec;

/// How the center point takes part in a tick.
///
/// An averaged quantity is overwritten with the mean of the edge points
/// before integration, and the acceleration that would have changed it is
/// discarded.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CenterMode {
    /// Free dynamic particle.
    Dynamic,
    /// Position is the edge mean; velocity still integrates.
    PositionAveraged,
    /// Velocity is the edge mean; position integrates from it.
    VelocityAveraged,
    /// Both position and velocity are edge means.
    Both,
}

impl CenterMode {
    pub fn from_flags(position_averaged: bool, velocity_averaged: bool) -> Self {
        match (position_averaged, velocity_averaged) {
            (false, false) => CenterMode::Dynamic,
            (true, false) => CenterMode::PositionAveraged,
            (false, true) => CenterMode::VelocityAveraged,
            (true, true) => CenterMode::Both,
        }
    }

    pub fn averages_position(self) -> bool {
        matches!(self, CenterMode::PositionAveraged | CenterMode::Both)
    }

    pub fn averages_velocity(self) -> bool {
        matches!(self, CenterMode::VelocityAveraged | CenterMode::Both)
    }
}

type Point<F> = PointMass<Vec2<F>>;

/// A deformable ball.
///
/// Edge point `i` is tied to `i + 1 (mod N)` and to the center. The relation
/// list is fixed at construction apart from explicit [`Ball::add_force`].
#[derive(Clone, Debug)]
pub struct Ball<F: Float> {
    radius: F,
    edges: AllocVec<Point<F>>,
    center: Point<F>,
    forces: AllocVec<ForceRelation<Vec2<F>>>,
    mode: CenterMode,
}

fn resolve<'a, F: Float>(
    edges: &'a [Point<F>],
    center: &'a Point<F>,
    r: PointRef,
) -> Option<&'a Point<F>> {
    match r {
        PointRef::Edge(i) => edges.get(i),
        PointRef::Center => Some(center),
    }
}

fn resolve_mut<'a, F: Float>(
    edges: &'a mut [Point<F>],
    center: &'a mut Point<F>,
    r: PointRef,
) -> Option<&'a mut Point<F>> {
    match r {
        PointRef::Edge(i) => edges.get_mut(i),
        PointRef::Center => Some(center),
    }
}

impl<F: Float> Ball<F> {
    /// Build a ball in mechanical equilibrium, all points at rest.
    pub fn new(config: &BallConfig<F>) -> Self {
        let n = config.point_count;
        let step = F::two() * F::pi() / F::from_usize(n);

        let mut edges = AllocVec::with_capacity(n);
        for i in 0..n {
            let angle = F::from_usize(i) * step;
            let pos = Vec2::from_polar(config.radius, angle) + config.position;
            edges.push(PointMass::with_mass(pos, config.point_mass));
        }

        let center = PointMass::with_mass(config.position, config.point_mass);

        let mut forces = AllocVec::with_capacity(n * 4);
        for i in 0..n {
            let j = (i + 1) % n;
            let (a, b) = (PointRef::Edge(i), PointRef::Edge(j));
            // Rest length from the generated positions, not the chord formula.
            let rest = edges[i].pos.distance(edges[j].pos);
            forces.push(ForceRelation::new(a, b, ForceKind::spring(rest, config.edge_stiffness)));
            forces.push(ForceRelation::new(a, b, ForceKind::damping(config.edge_damping)));

            let c = PointRef::Center;
            forces.push(ForceRelation::new(a, c, ForceKind::spring(config.radius, config.center_stiffness)));
            forces.push(ForceRelation::new(a, c, ForceKind::damping(config.center_damping)));
        }

        let mode = CenterMode::from_flags(config.position_averaged, config.velocity_averaged);
        log::debug!(
            "built ball: {} edge points, {} force relations, center {:?}",
            n,
            forces.len(),
            mode
        );

        Ball { radius: config.radius, edges, center, forces, mode }
    }

    /// Advance one tick.
    pub fn update(&mut self, dt: F) {
        self.update_observed(dt, &mut NoOpStepObserver);
    }

    /// Advance one tick, reporting each phase to `observer`.
    ///
    /// Phases run strictly in order: forces, center override, integration.
    /// An averaged center therefore reflects the edge state from before this
    /// tick's integration (one tick of lag).
    pub fn update_observed<O: StepObserver>(&mut self, dt: F, observer: &mut O) {
        self.apply_relations();
        observer.on_forces_applied(self.forces.len());

        self.resolve_center();
        observer.on_center_resolved(self.mode);

        match self.mode {
            CenterMode::Dynamic => self.center.integrate(dt),
            CenterMode::PositionAveraged => {
                self.center.advance_velocity(dt);
                self.center.clear_acceleration();
            }
            CenterMode::VelocityAveraged => {
                self.center.advance_position(dt);
                self.center.clear_acceleration();
            }
            CenterMode::Both => self.center.clear_acceleration(),
        }
        for p in self.edges.iter_mut() {
            p.integrate(dt);
        }
        observer.on_integrate();

        observer.on_step_complete();
    }

    fn apply_relations(&mut self) {
        let Ball { edges, center, forces, .. } = self;
        for rel in forces.iter() {
            let a = resolve(&edges[..], &*center, rel.a);
            let b = resolve(&edges[..], &*center, rel.b);
            let (fa, fb) = match (a, b) {
                (Some(a), Some(b)) => rel.forces(a, b),
                _ => continue,
            };
            if let Some(p) = resolve_mut(&mut edges[..], &mut *center, rel.a) {
                p.apply_force(fa);
            }
            if let Some(p) = resolve_mut(&mut edges[..], &mut *center, rel.b) {
                p.apply_force(fb);
            }
        }
    }

    fn resolve_center(&mut self) {
        if self.edges.is_empty() {
            return;
        }
        let inv_n = F::one() / F::from_usize(self.edges.len());
        if self.mode.averages_position() {
            self.center.pos = self.centroid();
        }
        if self.mode.averages_velocity() {
            let sum = self.edges.iter().fold(Vec2::zero(), |acc, p| acc + p.vel);
            self.center.vel = sum.scale(inv_n);
        }
    }

    /// Copies of the edge positions in ring order.
    pub fn points(&self) -> AllocVec<Vec2<F>> {
        self.edges.iter().map(|p| p.pos).collect()
    }

    /// Current center position.
    pub fn center(&self) -> Vec2<F> {
        self.center.pos
    }

    pub fn center_point(&self) -> &Point<F> {
        &self.center
    }

    pub fn edge_point(&self, index: usize) -> Option<&Point<F>> {
        self.edges.get(index)
    }

    pub fn point(&self, r: PointRef) -> Option<&Point<F>> {
        resolve(&self.edges, &self.center, r)
    }

    fn point_mut(&mut self, r: PointRef) -> Result<&mut Point<F>, PhysicsError> {
        let count = self.edges.len();
        match r {
            PointRef::Edge(index) => self
                .edges
                .get_mut(index)
                .ok_or(PhysicsError::PointOutOfBounds { index, count }),
            PointRef::Center => Ok(&mut self.center),
        }
    }

    pub fn forces(&self) -> &[ForceRelation<Vec2<F>>] {
        &self.forces
    }

    pub fn radius(&self) -> F {
        self.radius
    }

    pub fn center_mode(&self) -> CenterMode {
        self.mode
    }

    /// Number of edge points.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Overwrite the velocity of one point.
    pub fn set_velocity(&mut self, r: PointRef, vel: Vec2<F>) -> Result<(), PhysicsError> {
        self.point_mut(r)?.vel = vel;
        Ok(())
    }

    /// Push `force` onto every edge point for the next tick.
    pub fn apply_force(&mut self, force: Vec2<F>) {
        for p in self.edges.iter_mut() {
            p.apply_force(force);
        }
    }

    /// Push `force` onto a single point for the next tick.
    pub fn apply_force_at(&mut self, r: PointRef, force: Vec2<F>) -> Result<(), PhysicsError> {
        self.point_mut(r)?.apply_force(force);
        Ok(())
    }

    /// Register an extra relation, e.g. a radial repulsion from the center.
    pub fn add_force(&mut self, relation: ForceRelation<Vec2<F>>) -> Result<(), PhysicsError> {
        let count = self.edges.len();
        for r in [relation.a, relation.b] {
            if let PointRef::Edge(index) = r {
                if index >= count {
                    return Err(PhysicsError::PointOutOfBounds { index, count });
                }
            }
        }
        self.forces.push(relation);
        Ok(())
    }

    /// Add `velocity_change` to the edge point nearest to `point`.
    pub fn poke(&mut self, point: Vec2<F>, velocity_change: Vec2<F>) {
        let nearest = self
            .edges
            .iter_mut()
            .map(|p| (p.pos.distance_sq(point), p))
            .reduce(|best, cur| if cur.0 < best.0 { cur } else { best });
        if let Some((_, p)) = nearest {
            p.vel += velocity_change;
        }
    }

    /// Mean edge position.
    pub fn centroid(&self) -> Vec2<F> {
        if self.edges.is_empty() {
            return Vec2::zero();
        }
        let sum = self.edges.iter().fold(Vec2::zero(), |acc, p| acc + p.pos);
        sum.scale(F::one() / F::from_usize(self.edges.len()))
    }

    /// Enclosed area via the shoelace formula.
    pub fn area(&self) -> F {
        let n = self.edges.len();
        if n < 3 {
            return F::zero();
        }
        let mut sum = F::zero();
        for i in 0..n {
            let j = (i + 1) % n;
            sum = sum + self.edges[i].pos.cross(self.edges[j].pos);
        }
        (sum * F::half()).abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ball(n: usize) -> Ball<f64> {
        Ball::new(&BallConfig::new().with_point_count(n).with_radius(10.0))
    }

    #[test]
    fn topology_has_four_relations_per_edge_point() {
        let b = ball(6);
        assert_eq!(b.forces().len(), 24);
        let centers = b
            .forces()
            .iter()
            .filter(|r| r.b == PointRef::Center)
            .count();
        assert_eq!(centers, 12);
    }

    #[test]
    fn ring_rest_length_matches_chord() {
        let b = ball(8);
        let expected = 2.0 * 10.0 * (core::f64::consts::PI / 8.0).sin();
        match b.forces()[0].kind {
            ForceKind::Spring { rest_length, .. } => {
                assert!((rest_length - expected).abs() < 1e-9, "rest = {}", rest_length)
            }
            other => panic!("expected spring, got {:?}", other),
        }
    }

    #[test]
    fn center_mode_from_flags() {
        assert_eq!(CenterMode::from_flags(false, false), CenterMode::Dynamic);
        assert_eq!(CenterMode::from_flags(true, true), CenterMode::Both);
        assert!(CenterMode::PositionAveraged.averages_position());
        assert!(!CenterMode::PositionAveraged.averages_velocity());
        assert!(CenterMode::VelocityAveraged.averages_velocity());
    }

    #[test]
    fn out_of_range_edge_rejected() {
        let mut b = ball(4);
        assert_eq!(
            b.set_velocity(PointRef::Edge(4), Vec2::new(1.0, 0.0)),
            Err(PhysicsError::PointOutOfBounds { index: 4, count: 4 })
        );
        let bad = ForceRelation::new(PointRef::Center, PointRef::Edge(9), ForceKind::damping(1.0));
        assert!(b.add_force(bad).is_err());
        assert_eq!(b.forces().len(), 16);
    }

    #[test]
    fn poke_hits_nearest_edge_point() {
        let mut b = ball(4);
        // Edge point 1 sits at (0, 10).
        b.poke(Vec2::new(1.0, 12.0), Vec2::new(0.0, -3.0));
        assert_eq!(b.edge_point(1).unwrap().vel, Vec2::new(0.0, -3.0));
        assert_eq!(b.edge_point(0).unwrap().vel, Vec2::zero());
    }
}
