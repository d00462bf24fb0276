use verlet_arena::{shapes, ArenaCapacity, NoOpStepObserver, ObjectArena, Simulator, Vec2};

fn rope_arena() -> ObjectArena<f32> {
    ObjectArena::new(
        ArenaCapacity::new()
            .with_particles(11)
            .with_pin_constraints(2)
            .with_distance_constraints(10)
            .with_composites(1),
    )
}

fn straight_rope(segments: usize) -> Vec<Vec2<f32>> {
    (0..=segments).map(|i| Vec2::new(100.0 + 10.0 * i as f32, 100.0)).collect()
}

#[test]
fn rope_correct_particle_count() {
    let mut arena = rope_arena();
    let rope = shapes::line_segments(&mut arena, &straight_rope(10), &[0], Vec2::zero(), 1.0).unwrap();
    assert_eq!(arena.composite(rope).particle_count(), 11); // segments + 1
    assert_eq!(arena.distance_constraints().len(), 10);
}

#[test]
fn rope_swings_under_gravity() {
    let mut arena = rope_arena();
    shapes::line_segments(&mut arena, &straight_rope(10), &[0], Vec2::zero(), 1.0).unwrap();
    let mut sim = Simulator::with_defaults(640.0, 480.0, arena);

    for _ in 0..120 {
        sim.update(8, &mut NoOpStepObserver);
    }

    let particles = sim.arena().particles();
    let start_y = particles[0].position.y;
    let end_y = particles[10].position.y;
    assert!(end_y > start_y, "End should drop below pinned start");
}

#[test]
fn rope_move_pin() {
    let mut arena = rope_arena();
    let rope = shapes::line_segments(&mut arena, &straight_rope(5), &[0], Vec2::zero(), 1.0).unwrap();
    let pin = match arena.composite(rope).constraints().last() {
        Some(verlet_arena::ConstraintRef::Pin(slot)) => *slot,
        other => panic!("expected the pin last, got {:?}", other),
    };
    let mut sim = Simulator::with_defaults(640.0, 480.0, arena);

    sim.arena_mut().move_pin(pin, Vec2::new(103.0, 104.0));
    sim.update(8, &mut NoOpStepObserver);

    let p = sim.arena().particles()[0].position;
    assert!(
        (p.x - 103.0).abs() < 1e-6 && (p.y - 104.0).abs() < 1e-6,
        "Pinned particle 0 should have moved to (103.0, 104.0), got ({}, {})",
        p.x,
        p.y,
    );
}

#[test]
fn rope_total_length_after_settling() {
    let mut arena = rope_arena();
    let vertices = straight_rope(10);
    shapes::line_segments(&mut arena, &vertices, &[0, 10], Vec2::zero(), 1.0).unwrap();

    // Rope starts straight, so total rest length = endpoint distance.
    let expected_total_rest_length: f32 = vertices[0].distance(vertices[10]); // 100.0

    let mut sim = Simulator::with_defaults(640.0, 480.0, arena);
    for _ in 0..300 {
        sim.update(8, &mut NoOpStepObserver);
    }

    let particles = sim.arena().particles();
    let actual_total_length: f32 = particles
        .windows(2)
        .map(|w| w[0].position.distance(w[1].position))
        .sum();

    // Relaxation leaves the links slightly stretched under load.
    let diff = (actual_total_length - expected_total_rest_length).abs();
    assert!(
        diff < 10.0,
        "Total rope length {:.4} should be within 10% of rest length {:.4} (diff = {:.4})",
        actual_total_length,
        expected_total_rest_length,
        diff,
    );
    assert!(particles[5].position.y > 100.0, "Middle should sag");
}
