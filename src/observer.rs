//! Step observer trait for monitoring ball updates.

use crate::body::CenterMode;

/// Trait for observing the phases of a ball update.
///
/// Implement this trait to watch a tick unfold (e.g., for debugging,
/// visualization, or profiling). All methods have default no-op
/// implementations. Hooks fire in phase order.
pub trait StepObserver {
    /// Called after every force relation has been applied in both directions.
    fn on_forces_applied(&mut self, _relations: usize) {}

    /// Called after the center point has been overridden by edge averages
    /// (or left alone, for [`CenterMode::Dynamic`]).
    fn on_center_resolved(&mut self, _mode: CenterMode) {}

    /// Called after every point has been integrated.
    fn on_integrate(&mut self) {}

    /// Called when a tick is fully committed.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}
