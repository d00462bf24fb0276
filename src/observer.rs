//! Step observer trait for monitoring simulator progress.

/// Hooks called by [`Simulator::update`](crate::Simulator::update) as each
/// phase completes.
///
/// Implement this to trace, visualise or profile the solver. All methods
/// default to doing nothing.
pub trait StepObserver {
    /// Called after every particle has been integrated.
    fn on_integrate(&mut self, _particles: usize) {}

    /// Called after each relaxation sub-step over all constraint blocks.
    fn on_relax_iteration(&mut self, _iteration: usize) {}

    /// Called after every particle has been clamped into the world bounds.
    fn on_clamp(&mut self) {}

    /// Called when an update is fully complete.
    fn on_step_complete(&mut self) {}
}

/// An observer that ignores every event.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}
