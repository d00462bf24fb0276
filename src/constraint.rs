//! Geometric constraints relaxed toward their invariant: pin, distance, angular.
//!
//! Each constraint refers to particles by [`Slot`] and only ever moves
//! `position`; `last_position` belongs to the integrator.

use crate::float::Float;
use crate::handle::Slot;
use crate::particle::Particle;
use crate::vec::Vec2;

/// The three constraint kinds, also used to configure relaxation order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ConstraintKind {
    Pin,
    Distance,
    Angular,
}

/// A constraint of any kind, dispatched by `match`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Constraint<F: Float> {
    Pin(PinConstraint<F>),
    Distance(DistanceConstraint<F>),
    Angular(AngularConstraint<F>),
}

/// Typed handle to a constraint stored in one of the arena's constraint blocks.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ConstraintRef<F: Float> {
    Pin(Slot<PinConstraint<F>>),
    Distance(Slot<DistanceConstraint<F>>),
    Angular(Slot<AngularConstraint<F>>),
}

/// Hard positional anchor.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PinConstraint<F: Float> {
    pub particle: Slot<Particle<F>>,
    pub position: Vec2<F>,
}

/// Keeps two particles at the distance they had when the constraint was made.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DistanceConstraint<F: Float> {
    particle1: Slot<Particle<F>>,
    particle2: Slot<Particle<F>>,
    stiffness: F,
    rest_distance: F,
}

/// Keeps the signed angle at `vertex` between rays to `particle1` and `particle2`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AngularConstraint<F: Float> {
    particle1: Slot<Particle<F>>,
    vertex: Slot<Particle<F>>,
    particle2: Slot<Particle<F>>,
    stiffness: F,
    rest_angle: F,
}

impl<F: Float> Constraint<F> {
    /// Nudge the referenced particles one step toward the invariant.
    pub fn relax(&self, step_coeff: F, particles: &mut [Particle<F>]) {
        match self {
            Constraint::Pin(c) => c.relax(step_coeff, particles),
            Constraint::Distance(c) => c.relax(step_coeff, particles),
            Constraint::Angular(c) => c.relax(step_coeff, particles),
        }
    }

    pub fn kind(&self) -> ConstraintKind {
        match self {
            Constraint::Pin(_) => ConstraintKind::Pin,
            Constraint::Distance(_) => ConstraintKind::Distance,
            Constraint::Angular(_) => ConstraintKind::Angular,
        }
    }
}

impl<F: Float> ConstraintRef<F> {
    pub fn kind(&self) -> ConstraintKind {
        match self {
            ConstraintRef::Pin(_) => ConstraintKind::Pin,
            ConstraintRef::Distance(_) => ConstraintKind::Distance,
            ConstraintRef::Angular(_) => ConstraintKind::Angular,
        }
    }
}

impl<F: Float> PinConstraint<F> {
    pub fn new(particle: Slot<Particle<F>>, position: Vec2<F>) -> Self {
        PinConstraint { particle, position }
    }

    /// Pin a particle where it currently is.
    pub fn at_current(particle: Slot<Particle<F>>, particles: &[Particle<F>]) -> Self {
        PinConstraint { particle, position: particles[particle.index()].position }
    }

    /// Force the particle onto the target. `step_coeff` is ignored.
    pub fn relax(&self, _step_coeff: F, particles: &mut [Particle<F>]) {
        particles[self.particle.index()].position = self.position;
    }
}

impl<F: Float> DistanceConstraint<F> {
    /// Constraint with an explicit rest distance.
    pub fn new(
        particle1: Slot<Particle<F>>,
        particle2: Slot<Particle<F>>,
        rest_distance: F,
        stiffness: F,
    ) -> Self {
        DistanceConstraint { particle1, particle2, stiffness, rest_distance }
    }

    /// Constraint whose rest distance is the particles' current separation.
    pub fn from_particles(
        particle1: Slot<Particle<F>>,
        particle2: Slot<Particle<F>>,
        particles: &[Particle<F>],
        stiffness: F,
    ) -> Self {
        let rest_distance = particles[particle1.index()]
            .position
            .distance(particles[particle2.index()].position);
        DistanceConstraint { particle1, particle2, stiffness, rest_distance }
    }

    pub fn particle1(&self) -> Slot<Particle<F>> { self.particle1 }
    pub fn particle2(&self) -> Slot<Particle<F>> { self.particle2 }
    pub fn stiffness(&self) -> F { self.stiffness }
    pub fn rest_distance(&self) -> F { self.rest_distance }

    /// Equal and opposite correction along the separation vector.
    ///
    /// Particles linked by a distance constraint must never coincide: the
    /// correction divides by the squared separation. An exactly zero
    /// separation is skipped, which leaves every non-degenerate result as is.
    pub fn relax(&self, step_coeff: F, particles: &mut [Particle<F>]) {
        let (i1, i2) = (self.particle1.index(), self.particle2.index());
        let normal = particles[i1].position - particles[i2].position;
        let length_sq = normal.length_sq();
        if length_sq == F::zero() {
            return;
        }

        let rest_sq = self.rest_distance * self.rest_distance;
        let correction = normal * (((rest_sq - length_sq) / length_sq) * self.stiffness * step_coeff);
        particles[i1].position += correction;
        particles[i2].position -= correction;
    }
}

impl<F: Float> AngularConstraint<F> {
    /// Constraint with an explicit rest angle, in radians.
    pub fn new(
        particle1: Slot<Particle<F>>,
        vertex: Slot<Particle<F>>,
        particle2: Slot<Particle<F>>,
        rest_angle: F,
        stiffness: F,
    ) -> Self {
        AngularConstraint { particle1, vertex, particle2, stiffness, rest_angle }
    }

    /// Constraint whose rest angle is the angle currently measured at `vertex`.
    pub fn from_particles(
        particle1: Slot<Particle<F>>,
        vertex: Slot<Particle<F>>,
        particle2: Slot<Particle<F>>,
        particles: &[Particle<F>],
        stiffness: F,
    ) -> Self {
        let rest_angle = Vec2::angle(
            particles[particle1.index()].position,
            particles[vertex.index()].position,
            particles[particle2.index()].position,
        );
        AngularConstraint { particle1, vertex, particle2, stiffness, rest_angle }
    }

    pub fn particle1(&self) -> Slot<Particle<F>> { self.particle1 }
    pub fn vertex(&self) -> Slot<Particle<F>> { self.vertex }
    pub fn particle2(&self) -> Slot<Particle<F>> { self.particle2 }
    pub fn stiffness(&self) -> F { self.stiffness }
    pub fn rest_angle(&self) -> F { self.rest_angle }

    /// Current angle minus rest angle, wrapped once into `(-π, π]`.
    pub fn angle_error(&self, particles: &[Particle<F>]) -> F {
        let angle = Vec2::angle(
            particles[self.particle1.index()].position,
            particles[self.vertex.index()].position,
            particles[self.particle2.index()].position,
        );
        wrap_once(angle - self.rest_angle)
    }

    /// Rotate both arms about the vertex, then the vertex about the moved arms.
    ///
    /// The vertex is rotated about the already-updated arm positions; the
    /// order of the four rotations changes convergence and must not be merged.
    pub fn relax(&self, step_coeff: F, particles: &mut [Particle<F>]) {
        let diff = self.angle_error(particles) * step_coeff * self.stiffness;
        let (i1, iv, i2) = (self.particle1.index(), self.vertex.index(), self.particle2.index());

        let vertex = particles[iv].position;
        let p1 = particles[i1].position.rotate_about(vertex, diff);
        particles[i1].position = p1;
        let p2 = particles[i2].position.rotate_about(vertex, -diff);
        particles[i2].position = p2;

        let vertex = particles[iv].position.rotate_about(p1, diff);
        particles[iv].position = vertex.rotate_about(p2, -diff);
    }
}

/// Single wraparound: values already differences of two angles in `(-π, π]`
/// never need more than one.
fn wrap_once<F: Float>(diff: F) -> F {
    if diff <= -F::pi() {
        diff + F::tau()
    } else if diff > F::pi() {
        diff - F::tau()
    } else {
        diff
    }
}
