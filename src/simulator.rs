//! Per-frame integrate, relax, clamp pass over the whole arena.

use crate::arena::ObjectArena;
use crate::config::SimulatorConfig;
use crate::float::Float;
use crate::observer::StepObserver;
use crate::vec::Vec2;

/// Runs the solver over every object in an [`ObjectArena`].
///
/// The world spans `[0, width - 1] × [0, height - 1]` with y growing toward
/// the floor at `height - 1`.
pub struct Simulator<F: Float> {
    width: F,
    height: F,
    config: SimulatorConfig<F>,
    arena: ObjectArena<F>,
}

impl<F: Float> Simulator<F> {
    pub fn new(width: F, height: F, arena: ObjectArena<F>, config: SimulatorConfig<F>) -> Self {
        Simulator { width, height, config, arena }
    }

    /// Simulator with the default gravity, friction and relax order.
    pub fn with_defaults(width: F, height: F, arena: ObjectArena<F>) -> Self {
        Self::new(width, height, arena, SimulatorConfig::new())
    }

    pub fn width(&self) -> F { self.width }
    pub fn height(&self) -> F { self.height }
    pub fn config(&self) -> &SimulatorConfig<F> { &self.config }
    pub fn config_mut(&mut self) -> &mut SimulatorConfig<F> { &mut self.config }
    pub fn arena(&self) -> &ObjectArena<F> { &self.arena }

    /// Mutable arena access for building bodies between updates.
    pub fn arena_mut(&mut self) -> &mut ObjectArena<F> { &mut self.arena }

    /// Hand the arena back, ending the simulation.
    pub fn into_arena(self) -> ObjectArena<F> { self.arena }

    /// Largest coordinate a particle may hold on each axis.
    pub fn bounds(&self) -> Vec2<F> {
        Vec2::new(self.width - F::one(), self.height - F::one())
    }

    /// Advance one frame.
    ///
    /// Integrates every particle once, relaxes all constraints `substeps`
    /// times with a coefficient of `1 / substeps`, then clamps every particle
    /// into the world. With `substeps == 0` no relaxation happens.
    pub fn update<O: StepObserver>(&mut self, substeps: usize, observer: &mut O) {
        let bounds = self.bounds();
        let SimulatorConfig { gravity, friction, ground_friction, relax_order } = self.config;

        let particles = self.arena.all_particles_mut();
        for p in particles.iter_mut() {
            p.integrate(gravity, friction, ground_friction, bounds.y);
        }
        observer.on_integrate(particles.len());

        if substeps > 0 {
            let step_coeff = F::one() / F::from_usize(substeps);
            for i in 0..substeps {
                for kind in relax_order {
                    self.arena.relax_kind(kind, step_coeff);
                }
                observer.on_relax_iteration(i);
            }
        }

        for p in self.arena.all_particles_mut() {
            p.clamp_to(bounds);
        }
        observer.on_clamp();

        observer.on_step_complete();
    }
}
