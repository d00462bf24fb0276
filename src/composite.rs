//! A body: the particles and constraints that belong together.

use crate::constraint::ConstraintRef;
use crate::float::Float;
use crate::handle::Slot;
use crate::particle::Particle;
use alloc::string::String;
use alloc::vec::Vec as AllocVec;

/// One logical body (rope, polygon, tire, cloth patch).
///
/// A composite does not own storage; it lists slots into the arena in the
/// order they were added. Constraint order is insertion order.
#[derive(Clone, Debug, PartialEq)]
pub struct Composite<F: Float> {
    name: Option<String>,
    particles: AllocVec<Slot<Particle<F>>>,
    constraints: AllocVec<ConstraintRef<F>>,
}

impl<F: Float> Composite<F> {
    pub fn new() -> Self {
        Composite {
            name: None,
            particles: AllocVec::new(),
            constraints: AllocVec::new(),
        }
    }

    pub fn named(name: impl Into<String>) -> Self {
        Composite { name: Some(name.into()), ..Self::new() }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn add_particle(&mut self, particle: Slot<Particle<F>>) {
        self.particles.push(particle);
    }

    pub fn add_constraint(&mut self, constraint: ConstraintRef<F>) {
        self.constraints.push(constraint);
    }

    pub fn particles(&self) -> &[Slot<Particle<F>>] {
        &self.particles
    }

    pub fn constraints(&self) -> &[ConstraintRef<F>] {
        &self.constraints
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    pub fn constraint_count(&self) -> usize {
        self.constraints.len()
    }
}

impl<F: Float> Default for Composite<F> {
    fn default() -> Self {
        Self::new()
    }
}
