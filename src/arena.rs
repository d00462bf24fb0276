//! Fixed-capacity object arena for particles, constraints and composites.
//!
//! Every block is reserved to its maximum size when the arena is built and
//! never reallocates, so a [`Slot`] handed out once stays valid until the
//! arena is reset or dropped. Allocation is a bump of the block's used count:
//! all-or-nothing per call, with no per-object release.

use core::fmt;

use crate::composite::Composite;
use crate::constraint::{
    AngularConstraint, Constraint, ConstraintKind, ConstraintRef, DistanceConstraint, PinConstraint,
};
use crate::error::PhysicsError;
use crate::float::Float;
use crate::handle::{Slot, SlotRange};
use crate::particle::Particle;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// The five kinds of object the arena stores, one block each.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Particle,
    PinConstraint,
    DistanceConstraint,
    AngularConstraint,
    Composite,
}

impl ObjectKind {
    pub const ALL: [ObjectKind; 5] = [
        ObjectKind::Particle,
        ObjectKind::PinConstraint,
        ObjectKind::DistanceConstraint,
        ObjectKind::AngularConstraint,
        ObjectKind::Composite,
    ];
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ObjectKind::Particle => "particle",
            ObjectKind::PinConstraint => "pin constraint",
            ObjectKind::DistanceConstraint => "distance constraint",
            ObjectKind::AngularConstraint => "angular constraint",
            ObjectKind::Composite => "composite",
        };
        f.write_str(name)
    }
}

/// One count per object kind.
///
/// Used for the arena's maximum sizes, for capacity requests passed to
/// [`ObjectArena::can_allocate`], and for usage reports.
///
/// ```
/// use verlet_arena::ArenaCapacity;
///
/// let rope = ArenaCapacity::new()
///     .with_particles(10)
///     .with_distance_constraints(9)
///     .with_pin_constraints(1)
///     .with_composites(1);
/// assert_eq!(rope.count(verlet_arena::ObjectKind::Particle), 10);
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ArenaCapacity {
    pub particles: usize,
    pub pin_constraints: usize,
    pub distance_constraints: usize,
    pub angular_constraints: usize,
    pub composites: usize,
}

impl ArenaCapacity {
    /// All counts zero.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_particles(mut self, count: usize) -> Self {
        self.particles = count;
        self
    }

    pub fn with_pin_constraints(mut self, count: usize) -> Self {
        self.pin_constraints = count;
        self
    }

    pub fn with_distance_constraints(mut self, count: usize) -> Self {
        self.distance_constraints = count;
        self
    }

    pub fn with_angular_constraints(mut self, count: usize) -> Self {
        self.angular_constraints = count;
        self
    }

    pub fn with_composites(mut self, count: usize) -> Self {
        self.composites = count;
        self
    }

    /// The count recorded for `kind`.
    pub fn count(&self, kind: ObjectKind) -> usize {
        match kind {
            ObjectKind::Particle => self.particles,
            ObjectKind::PinConstraint => self.pin_constraints,
            ObjectKind::DistanceConstraint => self.distance_constraints,
            ObjectKind::AngularConstraint => self.angular_constraints,
            ObjectKind::Composite => self.composites,
        }
    }
}

/// Bump-allocated block of one object kind.
struct Block<T> {
    items: AllocVec<T>,
    capacity: usize,
    kind: ObjectKind,
}

impl<T> Block<T> {
    fn new(kind: ObjectKind, capacity: usize) -> Self {
        Block { items: AllocVec::with_capacity(capacity), capacity, kind }
    }

    fn used(&self) -> usize {
        self.items.len()
    }

    fn remaining(&self) -> usize {
        self.capacity - self.items.len()
    }

    fn fits(&self, count: usize) -> bool {
        count <= self.remaining()
    }

    /// Append the iterator's items as one contiguous run, or nothing at all.
    fn alloc<I>(&mut self, items: I) -> Result<SlotRange<T>, PhysicsError>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let items = items.into_iter();
        let requested = items.len();
        if !self.fits(requested) {
            return Err(PhysicsError::CapacityExceeded {
                kind: self.kind,
                requested,
                available: self.remaining(),
            });
        }

        let start = self.items.len();
        // `take` keeps a misreported length from pushing past capacity.
        self.items.extend(items.take(requested));
        Ok(SlotRange::new(start, self.items.len() - start))
    }
}

/// Pre-sized storage for every object of one simulation.
pub struct ObjectArena<F: Float> {
    particles: Block<Particle<F>>,
    pin_constraints: Block<PinConstraint<F>>,
    distance_constraints: Block<DistanceConstraint<F>>,
    angular_constraints: Block<AngularConstraint<F>>,
    composites: Block<Composite<F>>,
}

impl<F: Float> ObjectArena<F> {
    /// Reserve every block to its maximum size.
    pub fn new(capacity: ArenaCapacity) -> Self {
        ObjectArena {
            particles: Block::new(ObjectKind::Particle, capacity.particles),
            pin_constraints: Block::new(ObjectKind::PinConstraint, capacity.pin_constraints),
            distance_constraints: Block::new(ObjectKind::DistanceConstraint, capacity.distance_constraints),
            angular_constraints: Block::new(ObjectKind::AngularConstraint, capacity.angular_constraints),
            composites: Block::new(ObjectKind::Composite, capacity.composites),
        }
    }

    /// Whether every requested count fits in the remaining room of its kind.
    pub fn can_allocate(&self, request: &ArenaCapacity) -> bool {
        self.ensure_room(request).is_ok()
    }

    /// Like [`can_allocate`](Self::can_allocate), but names the first kind
    /// that does not fit.
    pub fn ensure_room(&self, request: &ArenaCapacity) -> Result<(), PhysicsError> {
        let remaining = self.remaining();
        for kind in ObjectKind::ALL {
            let (requested, available) = (request.count(kind), remaining.count(kind));
            if requested > available {
                return Err(PhysicsError::CapacityExceeded { kind, requested, available });
            }
        }
        Ok(())
    }

    /// Reserve `count` particles at the origin.
    pub fn allocate_particles(&mut self, count: usize) -> Result<SlotRange<Particle<F>>, PhysicsError> {
        self.particles.alloc((0..count).map(|_| Particle::default()))
    }

    /// Reserve one resting particle per position.
    pub fn allocate_particles_at<I>(&mut self, positions: I) -> Result<SlotRange<Particle<F>>, PhysicsError>
    where
        I: IntoIterator<Item = Vec2<F>>,
        I::IntoIter: ExactSizeIterator,
    {
        self.particles.alloc(positions.into_iter().map(Particle::new))
    }

    pub fn allocate_pin_constraints<I>(&mut self, constraints: I) -> Result<SlotRange<PinConstraint<F>>, PhysicsError>
    where
        I: IntoIterator<Item = PinConstraint<F>>,
        I::IntoIter: ExactSizeIterator,
    {
        self.pin_constraints.alloc(constraints)
    }

    pub fn allocate_distance_constraints<I>(
        &mut self,
        constraints: I,
    ) -> Result<SlotRange<DistanceConstraint<F>>, PhysicsError>
    where
        I: IntoIterator<Item = DistanceConstraint<F>>,
        I::IntoIter: ExactSizeIterator,
    {
        self.distance_constraints.alloc(constraints)
    }

    pub fn allocate_angular_constraints<I>(
        &mut self,
        constraints: I,
    ) -> Result<SlotRange<AngularConstraint<F>>, PhysicsError>
    where
        I: IntoIterator<Item = AngularConstraint<F>>,
        I::IntoIter: ExactSizeIterator,
    {
        self.angular_constraints.alloc(constraints)
    }

    pub fn allocate_composites<I>(&mut self, composites: I) -> Result<SlotRange<Composite<F>>, PhysicsError>
    where
        I: IntoIterator<Item = Composite<F>>,
        I::IntoIter: ExactSizeIterator,
    {
        self.composites.alloc(composites)
    }

    /// Register a single composite.
    pub fn allocate_composite(&mut self, composite: Composite<F>) -> Result<Slot<Composite<F>>, PhysicsError> {
        let range = self.composites.alloc(core::iter::once(composite))?;
        Ok(range.first())
    }

    /// Drop every object at once. Capacity is kept; earlier slots are invalid.
    pub fn reset(&mut self) {
        self.particles.items.clear();
        self.pin_constraints.items.clear();
        self.distance_constraints.items.clear();
        self.angular_constraints.items.clear();
        self.composites.items.clear();
    }

    pub fn particles(&self) -> &[Particle<F>] {
        &self.particles.items
    }

    pub fn pin_constraints(&self) -> &[PinConstraint<F>] {
        &self.pin_constraints.items
    }

    pub fn distance_constraints(&self) -> &[DistanceConstraint<F>] {
        &self.distance_constraints.items
    }

    pub fn angular_constraints(&self) -> &[AngularConstraint<F>] {
        &self.angular_constraints.items
    }

    pub fn composites(&self) -> &[Composite<F>] {
        &self.composites.items
    }

    pub fn particle(&self, slot: Slot<Particle<F>>) -> &Particle<F> {
        &self.particles.items[slot.index()]
    }

    /// Direct access for builders placing freshly allocated particles.
    pub fn particle_mut(&mut self, slot: Slot<Particle<F>>) -> &mut Particle<F> {
        &mut self.particles.items[slot.index()]
    }

    pub fn particles_mut(&mut self, range: SlotRange<Particle<F>>) -> &mut [Particle<F>] {
        &mut self.particles.items[range.indices()]
    }

    pub fn composite(&self, slot: Slot<Composite<F>>) -> &Composite<F> {
        &self.composites.items[slot.index()]
    }

    /// Copy of the constraint a composite refers to.
    pub fn constraint(&self, constraint: ConstraintRef<F>) -> Constraint<F> {
        match constraint {
            ConstraintRef::Pin(slot) => Constraint::Pin(self.pin_constraints.items[slot.index()]),
            ConstraintRef::Distance(slot) => Constraint::Distance(self.distance_constraints.items[slot.index()]),
            ConstraintRef::Angular(slot) => Constraint::Angular(self.angular_constraints.items[slot.index()]),
        }
    }

    /// Move a pin's anchor; the particle follows on the next relaxation.
    pub fn move_pin(&mut self, slot: Slot<PinConstraint<F>>, target: Vec2<F>) {
        self.pin_constraints.items[slot.index()].position = target;
    }

    /// Objects handed out so far, per kind.
    pub fn used(&self) -> ArenaCapacity {
        ArenaCapacity {
            particles: self.particles.used(),
            pin_constraints: self.pin_constraints.used(),
            distance_constraints: self.distance_constraints.used(),
            angular_constraints: self.angular_constraints.used(),
            composites: self.composites.used(),
        }
    }

    /// Maximum sizes the arena was built with.
    pub fn capacity(&self) -> ArenaCapacity {
        ArenaCapacity {
            particles: self.particles.capacity,
            pin_constraints: self.pin_constraints.capacity,
            distance_constraints: self.distance_constraints.capacity,
            angular_constraints: self.angular_constraints.capacity,
            composites: self.composites.capacity,
        }
    }

    pub fn remaining(&self) -> ArenaCapacity {
        ArenaCapacity {
            particles: self.particles.remaining(),
            pin_constraints: self.pin_constraints.remaining(),
            distance_constraints: self.distance_constraints.remaining(),
            angular_constraints: self.angular_constraints.remaining(),
            composites: self.composites.remaining(),
        }
    }

    pub(crate) fn all_particles_mut(&mut self) -> &mut [Particle<F>] {
        &mut self.particles.items
    }

    /// Relax every constraint of one kind, in allocation order.
    pub(crate) fn relax_kind(&mut self, kind: ConstraintKind, step_coeff: F) {
        let particles = &mut self.particles.items;
        match kind {
            ConstraintKind::Distance => {
                for c in self.distance_constraints.items.iter() {
                    c.relax(step_coeff, particles);
                }
            }
            ConstraintKind::Angular => {
                for c in self.angular_constraints.items.iter() {
                    c.relax(step_coeff, particles);
                }
            }
            ConstraintKind::Pin => {
                for c in self.pin_constraints.items.iter() {
                    c.relax(step_coeff, particles);
                }
            }
        }
    }
}
