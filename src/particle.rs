//! Verlet particles: current and previous position, velocity is implicit.

use crate::float::Float;
use crate::vec::Vec2;

/// A Verlet particle.
///
/// `last_position` always holds the position committed by the previous
/// integration step (or the initial placement), so velocity is recovered as
/// `position - last_position`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Particle<F: Float> {
    pub position: Vec2<F>,
    pub last_position: Vec2<F>,
}

impl<F: Float> Particle<F> {
    /// A particle at rest at `position`.
    pub fn new(position: Vec2<F>) -> Self {
        Particle { position, last_position: position }
    }

    /// Displacement over the last step.
    pub fn velocity(&self) -> Vec2<F> {
        self.position - self.last_position
    }

    /// One Verlet step with global and floor damping.
    ///
    /// `floor` is the y coordinate at or beyond which the particle counts as
    /// resting on the ground; there the implied speed is additionally scaled by
    /// `ground_friction` with its direction kept.
    pub fn integrate(&mut self, gravity: Vec2<F>, friction: F, ground_friction: F, floor: F) {
        let mut velocity = self.velocity() * friction;

        if self.position.y >= floor && velocity.length_sq() > F::from_f64(1e-6) {
            let magnitude = velocity.length();
            velocity /= magnitude;
            velocity *= magnitude * ground_friction;
        }

        self.last_position = self.position;
        self.position += gravity;
        self.position += velocity;
    }

    /// Truncate the position into `[0, max.x] × [0, max.y]`, one axis at a time.
    pub fn clamp_to(&mut self, max: Vec2<F>) {
        self.position.x = self.position.x.clamp(F::zero(), max.x);
        self.position.y = self.position.y.clamp(F::zero(), max.y);
    }
}
