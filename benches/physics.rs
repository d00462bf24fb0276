//! Benchmarks for verlet_arena physics simulation.

use criterion::{criterion_group, criterion_main, Criterion};
use verlet_arena::*;

fn arena() -> ObjectArena<f32> {
    ObjectArena::new(
        ArenaCapacity::new()
            .with_particles(1024)
            .with_pin_constraints(64)
            .with_distance_constraints(2048)
            .with_angular_constraints(64)
            .with_composites(16),
    )
}

fn bench_rope_simulation(c: &mut Criterion) {
    c.bench_function("rope_50_segments_60_updates", |b| {
        b.iter(|| {
            let mut arena = arena();
            let rope: Vec<_> = (0..=50).map(|i| Vec2::new(100.0 + 5.0 * i as f32, 50.0)).collect();
            shapes::line_segments(&mut arena, &rope, &[0], Vec2::zero(), 0.5).unwrap();
            let mut sim = Simulator::with_defaults(800.0, 600.0, arena);
            for _ in 0..60 {
                sim.update(8, &mut NoOpStepObserver);
            }
            sim.arena().particles()[50].position
        });
    });
}

fn bench_cloth_simulation(c: &mut Criterion) {
    c.bench_function("cloth_20x20_60_updates", |b| {
        b.iter(|| {
            let mut arena = arena();
            shapes::cloth(&mut arena, Vec2::new(100.0, 20.0), 300.0, 300.0, 20, 4, 0.8).unwrap();
            let mut sim = Simulator::with_defaults(800.0, 600.0, arena);
            for _ in 0..60 {
                sim.update(8, &mut NoOpStepObserver);
            }
            sim.arena().particles()[399].position
        });
    });
}

fn bench_tire_simulation(c: &mut Criterion) {
    c.bench_function("tire_32_segments_60_updates", |b| {
        b.iter(|| {
            let mut arena = arena();
            shapes::tire(&mut arena, Vec2::new(400.0, 100.0), 60.0, 32, 0.3, 0.9).unwrap();
            let mut sim = Simulator::with_defaults(800.0, 600.0, arena);
            for _ in 0..60 {
                sim.update(8, &mut NoOpStepObserver);
            }
            sim.arena().particles()[32].position
        });
    });
}

fn bench_angle_chain_simulation(c: &mut Criterion) {
    c.bench_function("angle_chain_30_joints_60_updates", |b| {
        b.iter(|| {
            let mut arena = arena();
            let chain: Vec<_> = (0..32)
                .map(|i| Vec2::new(100.0 + 8.0 * i as f32, 50.0 + if i % 2 == 0 { 0.0 } else { 4.0 }))
                .collect();
            shapes::angle_chain(&mut arena, &chain, &[0], Vec2::zero(), 0.9, 0.4).unwrap();
            let mut sim = Simulator::with_defaults(800.0, 600.0, arena);
            for _ in 0..60 {
                sim.update(8, &mut NoOpStepObserver);
            }
            sim.arena().particles()[31].position
        });
    });
}

criterion_group!(
    benches,
    bench_rope_simulation,
    bench_cloth_simulation,
    bench_tire_simulation,
    bench_angle_chain_simulation,
);
criterion_main!(benches);
