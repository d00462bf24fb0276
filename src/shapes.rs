//! Builders for common bodies: point, rope, polygon, tire, cloth, jointed chain.
//!
//! Every builder checks the arena's remaining room and its own inputs before
//! allocating anything, so a failed build leaves the arena exactly as it was.

use crate::arena::{ArenaCapacity, ObjectArena};
use crate::composite::Composite;
use crate::constraint::{AngularConstraint, ConstraintRef, DistanceConstraint, PinConstraint};
use crate::error::PhysicsError;
use crate::float::Float;
use crate::handle::{Slot, SlotRange};
use crate::particle::Particle;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// Brace links on a tire join each rim particle to the one this many steps ahead.
pub const TIRE_BRACE_STRIDE: usize = 5;

fn check_index(index: usize, count: usize) -> Result<(), PhysicsError> {
    if index < count {
        Ok(())
    } else {
        Err(PhysicsError::ParticleOutOfBounds { index, count })
    }
}

fn add_all<F: Float>(composite: &mut Composite<F>, particles: &[Slot<Particle<F>>]) {
    for &p in particles {
        composite.add_particle(p);
    }
}

fn distance_refs<F: Float>(range: SlotRange<DistanceConstraint<F>>) -> impl Iterator<Item = ConstraintRef<F>> {
    range.indices().map(|i| ConstraintRef::Distance(Slot::from_index(i)))
}

/// A single free particle.
pub fn point<F: Float>(arena: &mut ObjectArena<F>, position: Vec2<F>) -> Result<Slot<Composite<F>>, PhysicsError> {
    arena.ensure_room(&ArenaCapacity::new().with_particles(1).with_composites(1))?;

    let range = arena.allocate_particles_at([position])?;
    let mut composite = Composite::named("point");
    composite.add_particle(range.first());
    arena.allocate_composite(composite)
}

/// A rope through `vertices` (shifted by `offset`), with the particles listed
/// in `pinned` anchored where they start.
pub fn line_segments<F: Float>(
    arena: &mut ObjectArena<F>,
    vertices: &[Vec2<F>],
    pinned: &[usize],
    offset: Vec2<F>,
    stiffness: F,
) -> Result<Slot<Composite<F>>, PhysicsError> {
    let count = vertices.len();
    if count < 2 {
        return Err(PhysicsError::InsufficientSegments { required: 1, actual: count.saturating_sub(1) });
    }
    for &i in pinned {
        check_index(i, count)?;
    }
    arena.ensure_room(
        &ArenaCapacity::new()
            .with_particles(count)
            .with_pin_constraints(pinned.len())
            .with_distance_constraints(count - 1)
            .with_composites(1),
    )?;

    let slots: AllocVec<_> = arena.allocate_particles_at(vertices.iter().map(|&v| v + offset))?.iter().collect();

    let links: AllocVec<_> = slots
        .windows(2)
        .map(|w| DistanceConstraint::from_particles(w[0], w[1], arena.particles(), stiffness))
        .collect();
    let links = arena.allocate_distance_constraints(links)?;

    let pins: AllocVec<_> = pinned.iter().map(|&i| PinConstraint::at_current(slots[i], arena.particles())).collect();
    let pins = arena.allocate_pin_constraints(pins)?;

    let mut composite = Composite::named("line");
    add_all(&mut composite, &slots);
    for c in distance_refs(links) {
        composite.add_constraint(c);
    }
    for pin in pins.iter() {
        composite.add_constraint(ConstraintRef::Pin(pin));
    }
    arena.allocate_composite(composite)
}

/// A closed or open shape whose edges are the listed vertex index pairs.
pub fn polygon<F: Float>(
    arena: &mut ObjectArena<F>,
    vertices: &[Vec2<F>],
    edges: &[(usize, usize)],
    offset: Vec2<F>,
    stiffness: F,
) -> Result<Slot<Composite<F>>, PhysicsError> {
    let count = vertices.len();
    for &(a, b) in edges {
        check_index(a, count)?;
        check_index(b, count)?;
    }
    arena.ensure_room(
        &ArenaCapacity::new()
            .with_particles(count)
            .with_distance_constraints(edges.len())
            .with_composites(1),
    )?;

    let slots: AllocVec<_> = arena.allocate_particles_at(vertices.iter().map(|&v| v + offset))?.iter().collect();

    let links: AllocVec<_> = edges
        .iter()
        .map(|&(a, b)| DistanceConstraint::from_particles(slots[a], slots[b], arena.particles(), stiffness))
        .collect();
    let links = arena.allocate_distance_constraints(links)?;

    let mut composite = Composite::named("polygon");
    add_all(&mut composite, &slots);
    for c in distance_refs(links) {
        composite.add_constraint(c);
    }
    arena.allocate_composite(composite)
}

/// A wheel: `segments` rim particles around a hub particle at `origin`.
///
/// Each rim particle gets a tread link to its neighbour, a spoke to the hub
/// and a brace to the particle [`TIRE_BRACE_STRIDE`] steps ahead. The hub is
/// the last particle of the composite.
pub fn tire<F: Float>(
    arena: &mut ObjectArena<F>,
    origin: Vec2<F>,
    radius: F,
    segments: usize,
    spoke_stiffness: F,
    tread_stiffness: F,
) -> Result<Slot<Composite<F>>, PhysicsError> {
    // Fewer rim particles would let a brace wrap onto its own start.
    let required = TIRE_BRACE_STRIDE + 1;
    if segments < required {
        return Err(PhysicsError::InsufficientSegments { required, actual: segments });
    }
    arena.ensure_room(
        &ArenaCapacity::new()
            .with_particles(segments + 1)
            .with_distance_constraints(segments * 3)
            .with_composites(1),
    )?;

    let stride = F::tau() / F::from_usize(segments);
    let mut positions: AllocVec<_> = (0..segments)
        .map(|i| {
            let theta = F::from_usize(i) * stride;
            Vec2::new(origin.x + theta.cos() * radius, origin.y + theta.sin() * radius)
        })
        .collect();
    positions.push(origin);
    let slots: AllocVec<_> = arena.allocate_particles_at(positions)?.iter().collect();
    let hub = slots[segments];

    let particles = arena.particles();
    let mut links = AllocVec::with_capacity(segments * 3);
    for i in 0..segments {
        let rim_at = |offset: usize| slots[(i + offset) % segments];
        links.push(DistanceConstraint::from_particles(slots[i], rim_at(1), particles, tread_stiffness));
        links.push(DistanceConstraint::from_particles(slots[i], hub, particles, spoke_stiffness));
        links.push(DistanceConstraint::from_particles(slots[i], rim_at(TIRE_BRACE_STRIDE), particles, tread_stiffness));
    }
    let links = arena.allocate_distance_constraints(links)?;

    let mut composite = Composite::named("tire");
    add_all(&mut composite, &slots);
    for c in distance_refs(links) {
        composite.add_constraint(c);
    }
    arena.allocate_composite(composite)
}

/// A `segments × segments` sheet hanging from its top row.
///
/// Top-row particles on every `pin_every`-th column, and the last column,
/// are pinned. Particle `(x, y)` sits at index `y * segments + x`.
pub fn cloth<F: Float>(
    arena: &mut ObjectArena<F>,
    top_left: Vec2<F>,
    width: F,
    height: F,
    segments: usize,
    pin_every: usize,
    stiffness: F,
) -> Result<Slot<Composite<F>>, PhysicsError> {
    if segments < 2 {
        return Err(PhysicsError::InsufficientSegments { required: 2, actual: segments });
    }
    if pin_every == 0 {
        return Err(PhysicsError::InvalidPinSpacing);
    }
    let is_pinned_column = |x: usize| x % pin_every == 0 || x == segments - 1;
    let pin_count = (0..segments).filter(|&x| is_pinned_column(x)).count();
    let link_count = 2 * segments * (segments - 1);
    arena.ensure_room(
        &ArenaCapacity::new()
            .with_particles(segments * segments)
            .with_pin_constraints(pin_count)
            .with_distance_constraints(link_count)
            .with_composites(1),
    )?;

    let x_stride = width / F::from_usize(segments);
    let y_stride = height / F::from_usize(segments);
    let grid = (0..segments * segments).map(|i| {
        let (x, y) = (i % segments, i / segments);
        Vec2::new(top_left.x + F::from_usize(x) * x_stride, top_left.y + F::from_usize(y) * y_stride)
    });
    let slots: AllocVec<_> = arena.allocate_particles_at(grid)?.iter().collect();

    // Composite order interleaves pins and links per particle; the blocks
    // keep each kind in the same relative order.
    let particles = arena.particles();
    let mut pins = AllocVec::with_capacity(pin_count);
    let mut links = AllocVec::with_capacity(link_count);
    let mut order = AllocVec::with_capacity(pin_count + link_count);
    for y in 0..segments {
        for x in 0..segments {
            let index = y * segments + x;
            if y == 0 && is_pinned_column(x) {
                order.push(Order::Pin(pins.len()));
                pins.push(PinConstraint::at_current(slots[index], particles));
            }
            if x > 0 {
                order.push(Order::Link(links.len()));
                links.push(DistanceConstraint::from_particles(slots[index], slots[index - 1], particles, stiffness));
            }
            if y > 0 {
                order.push(Order::Link(links.len()));
                links.push(DistanceConstraint::from_particles(slots[index], slots[index - segments], particles, stiffness));
            }
        }
    }
    let pins = arena.allocate_pin_constraints(pins)?;
    let links = arena.allocate_distance_constraints(links)?;

    let mut composite = Composite::named("cloth");
    add_all(&mut composite, &slots);
    for entry in order {
        let constraint = match entry {
            Order::Pin(k) => ConstraintRef::Pin(Slot::from_index(pins.first().index() + k)),
            Order::Link(k) => ConstraintRef::Distance(Slot::from_index(links.first().index() + k)),
        };
        composite.add_constraint(constraint);
    }
    arena.allocate_composite(composite)
}

enum Order {
    Pin(usize),
    Link(usize),
}

/// A rope that also resists bending: an angular constraint holds the
/// starting angle at every interior vertex.
pub fn angle_chain<F: Float>(
    arena: &mut ObjectArena<F>,
    vertices: &[Vec2<F>],
    pinned: &[usize],
    offset: Vec2<F>,
    stiffness: F,
    angular_stiffness: F,
) -> Result<Slot<Composite<F>>, PhysicsError> {
    let count = vertices.len();
    if count < 3 {
        return Err(PhysicsError::InsufficientSegments { required: 2, actual: count.saturating_sub(1) });
    }
    for &i in pinned {
        check_index(i, count)?;
    }
    arena.ensure_room(
        &ArenaCapacity::new()
            .with_particles(count)
            .with_pin_constraints(pinned.len())
            .with_distance_constraints(count - 1)
            .with_angular_constraints(count - 2)
            .with_composites(1),
    )?;

    let slots: AllocVec<_> = arena.allocate_particles_at(vertices.iter().map(|&v| v + offset))?.iter().collect();

    let particles = arena.particles();
    let links: AllocVec<_> = slots
        .windows(2)
        .map(|w| DistanceConstraint::from_particles(w[0], w[1], particles, stiffness))
        .collect();
    let joints: AllocVec<_> = slots
        .windows(3)
        .map(|w| AngularConstraint::from_particles(w[0], w[1], w[2], particles, angular_stiffness))
        .collect();
    let pins: AllocVec<_> = pinned.iter().map(|&i| PinConstraint::at_current(slots[i], particles)).collect();

    let links = arena.allocate_distance_constraints(links)?;
    let joints = arena.allocate_angular_constraints(joints)?;
    let pins = arena.allocate_pin_constraints(pins)?;

    let mut composite = Composite::named("angle chain");
    add_all(&mut composite, &slots);
    for c in distance_refs(links) {
        composite.add_constraint(c);
    }
    for joint in joints.iter() {
        composite.add_constraint(ConstraintRef::Angular(joint));
    }
    for pin in pins.iter() {
        composite.add_constraint(ConstraintRef::Pin(pin));
    }
    arena.allocate_composite(composite)
}
