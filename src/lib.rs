//! Verlet soft bodies on a fixed-capacity object arena.
//!
//! `verlet_arena` simulates ropes, cloth and deformable polygons as particles
//! joined by geometric constraints. Each frame the [`Simulator`] integrates
//! every particle, relaxes every constraint over a number of sub-steps, and
//! clamps the result into the world.
//!
//! # Features
//!
//! - **Object arena**: pre-sized blocks for particles, constraints and
//!   composites with all-or-nothing allocation and stable slots
//! - **Verlet integration**: implicit velocity, global and floor friction
//! - **Constraint relaxation**: pin, distance and angular constraints visited
//!   in a configurable, deterministic order
//! - **Shape builders**: point, rope, polygon, tire, cloth, jointed chain
//! - **Observable**: monitor solver phases via the `StepObserver` trait
//! - **`no_std` compatible**: needs only `alloc`
//!
//! # Example
//! ```
//! use verlet_arena::{shapes, ArenaCapacity, NoOpStepObserver, ObjectArena, Simulator, Vec2};
//!
//! let mut arena: ObjectArena<f32> = ObjectArena::new(
//!     ArenaCapacity::new()
//!         .with_particles(64)
//!         .with_pin_constraints(8)
//!         .with_distance_constraints(64)
//!         .with_composites(4),
//! );
//! let rope = [Vec2::new(100.0, 50.0), Vec2::new(120.0, 50.0), Vec2::new(140.0, 50.0)];
//! shapes::line_segments(&mut arena, &rope, &[0], Vec2::zero(), 0.5).unwrap();
//!
//! let mut sim = Simulator::with_defaults(800.0, 600.0, arena);
//! for _ in 0..60 {
//!     sim.update(8, &mut NoOpStepObserver);
//! }
//! assert_eq!(sim.arena().particles()[0].position, Vec2::new(100.0, 50.0));
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod handle;
pub mod particle;
pub mod constraint;
pub mod composite;
pub mod arena;
pub mod simulator;
pub mod shapes;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use handle::{Slot, SlotRange};
pub use particle::Particle;
pub use constraint::{AngularConstraint, Constraint, ConstraintKind, ConstraintRef, DistanceConstraint, PinConstraint};
pub use composite::Composite;
pub use arena::{ArenaCapacity, ObjectArena, ObjectKind};
pub use simulator::Simulator;
pub use config::SimulatorConfig;
pub use observer::{NoOpStepObserver, StepObserver};
pub use error::PhysicsError;
