//! Fixed-cadence physics stepping and an independent frame clock.
//!
//! Neither type owns a timer. The host feeds wall-clock deltas in and gets
//! back how many ticks to run or whether a frame is due, so physics and
//! rendering stay decoupled and never interleave inside a tick.

use crate::error::PhysicsError;
use crate::float::Float;
use crate::world::World;

/// Default cap on ticks run for a single wall-clock advance.
pub const DEFAULT_MAX_TICKS: usize = 8;

/// Accumulates elapsed time and releases it in whole ticks of `dt`.
///
/// When more than `max_ticks` ticks are owed at once the remainder is
/// dropped, so a stalled host does not spiral into ever longer catch-ups.
#[derive(Clone, Debug)]
pub struct FixedStep<F: Float> {
    dt: F,
    accumulator: F,
    max_ticks: usize,
    dropped: u64,
}

impl<F: Float> FixedStep<F> {
    pub fn new(dt: F) -> Result<Self, PhysicsError> {
        if !(dt > F::zero()) {
            return Err(PhysicsError::InvalidArgument("tick length must be positive"));
        }
        Ok(FixedStep {
            dt,
            accumulator: F::zero(),
            max_ticks: DEFAULT_MAX_TICKS,
            dropped: 0,
        })
    }

    /// Set the catch-up cap. Zero is treated as one.
    pub fn with_max_ticks(mut self, max_ticks: usize) -> Self {
        self.max_ticks = max_ticks.max(1);
        self
    }

    pub fn dt(&self) -> F {
        self.dt
    }

    /// Time banked towards the next tick.
    pub fn pending(&self) -> F {
        self.accumulator
    }

    /// Total ticks discarded by the catch-up cap.
    pub fn dropped(&self) -> u64 {
        self.dropped
    }

    /// Bank `elapsed` and return how many ticks are now due.
    pub fn advance(&mut self, elapsed: F) -> usize {
        if elapsed > F::zero() {
            self.accumulator = self.accumulator + elapsed;
        }
        let mut due = 0;
        while due < self.max_ticks && self.accumulator >= self.dt {
            self.accumulator = self.accumulator - self.dt;
            due += 1;
        }
        if self.accumulator >= self.dt {
            self.drop_backlog();
        }
        due
    }

    /// Discard every whole tick still banked, keeping the sub-tick remainder.
    fn drop_backlog(&mut self) {
        let backlog = (self.accumulator / self.dt).floor();
        // `as` saturates, so an infinite backlog counts as u64::MAX.
        let skipped = backlog.to_f64() as u64;
        self.dropped = self.dropped.saturating_add(skipped);
        log::warn!("physics fell behind: dropping {} ticks", skipped);

        let rest = self.accumulator - backlog * self.dt;
        // Large accumulators lose the remainder to rounding.
        self.accumulator = if rest >= F::zero() && rest < self.dt { rest } else { F::zero() };
    }

    /// Advance and run the due ticks on `world`. Returns the ticks run.
    pub fn step_world(&mut self, world: &mut World<F>, elapsed: F) -> usize {
        let due = self.advance(elapsed);
        for _ in 0..due {
            world.step(self.dt);
        }
        due
    }
}

/// Tells the host when the next frame should be drawn.
#[derive(Clone, Debug)]
pub struct FrameClock<F: Float> {
    interval: F,
    since_last: F,
}

impl<F: Float> FrameClock<F> {
    pub fn new(interval: F) -> Result<Self, PhysicsError> {
        if !(interval > F::zero()) {
            return Err(PhysicsError::InvalidArgument("frame interval must be positive"));
        }
        // First call always draws.
        Ok(FrameClock { interval, since_last: interval })
    }

    /// Record `elapsed` and report whether a frame is due. Missed frames are
    /// never queued: at most one frame per call.
    pub fn tick(&mut self, elapsed: F) -> bool {
        if elapsed > F::zero() {
            self.since_last = self.since_last + elapsed;
        }
        if self.since_last >= self.interval {
            self.since_last = F::zero();
            true
        } else {
            false
        }
    }
}
