//! Configuration for the simulator's environment and relaxation order.

use crate::constraint::ConstraintKind;
use crate::float::Float;
use crate::vec::Vec2;

/// Order in which the constraint blocks are visited on every sub-step.
pub const DEFAULT_RELAX_ORDER: [ConstraintKind; 3] =
    [ConstraintKind::Distance, ConstraintKind::Angular, ConstraintKind::Pin];

/// Environmental constants and solver ordering for a [`Simulator`](crate::Simulator).
///
/// # Builder Pattern
/// ```
/// use verlet_arena::config::SimulatorConfig;
/// use verlet_arena::vec::Vec2;
///
/// let config: SimulatorConfig<f32> = SimulatorConfig::new()
///     .with_gravity(Vec2::new(0.0, 0.4))
///     .with_friction(0.99)
///     .with_ground_friction(0.5);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SimulatorConfig<F: Float> {
    /// Added to every particle's position once per update. Default: `(0, 0.2)`,
    /// pointing toward the floor (y grows downward).
    pub gravity: Vec2<F>,
    /// Fraction of the implied velocity kept each update, in `[0, 1]`. Default: 1.
    pub friction: F,
    /// Extra speed retention in `[0, 1]` for particles resting on the floor.
    /// Default: 0.8.
    pub ground_friction: F,
    /// Constraint blocks in relaxation order. A kind may be listed more than
    /// once or left out. Default: distance, angular, pin.
    pub relax_order: [ConstraintKind; 3],
}

impl<F: Float> SimulatorConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        SimulatorConfig {
            gravity: Vec2::new(F::zero(), F::from_f64(0.2)),
            friction: F::one(),
            ground_friction: F::from_f64(0.8),
            relax_order: DEFAULT_RELAX_ORDER,
        }
    }

    pub fn with_gravity(mut self, gravity: Vec2<F>) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_friction(mut self, friction: F) -> Self {
        self.friction = friction;
        self
    }

    pub fn with_ground_friction(mut self, ground_friction: F) -> Self {
        self.ground_friction = ground_friction;
        self
    }

    pub fn with_relax_order(mut self, relax_order: [ConstraintKind; 3]) -> Self {
        self.relax_order = relax_order;
        self
    }
}

impl<F: Float> Default for SimulatorConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
