//! Criterion benchmarks for the seat assignment engine.
//!
//! Uses the default 4×2×7 classroom (56 seats) with a full roster, with
//! and without a layer of relations and one tagged zone.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_seating::assignment::{AssignmentConfig, AssignmentEngine};
use u_seating::classroom::Classroom;
use u_seating::grid::{GridConfig, SeatId};
use u_seating::relation::{RelationKind, RelationStrength};
use u_seating::roster::TagId;

// ===========================================================================
// Fixtures
// ===========================================================================

fn plain_room(students: usize) -> Classroom {
    let mut room = Classroom::new(GridConfig::default()).expect("default grid is valid");
    room.roster.set_count(students);
    room
}

fn constrained_room(students: usize, relations: usize) -> Classroom {
    let mut room = plain_room(students);
    let ids = room.roster.ids();
    let kinds = RelationKind::ALL;
    let strengths = [
        RelationStrength::High,
        RelationStrength::Medium,
        RelationStrength::Low,
    ];
    for i in 0..relations.min(ids.len() / 2) {
        let _ = room.add_relation(
            ids[2 * i],
            ids[2 * i + 1],
            kinds[i % kinds.len()],
            strengths[i % strengths.len()],
            None,
        );
    }

    let tag = TagId(1);
    for &id in ids.iter().step_by(7) {
        if let Some(student) = room.roster.get_mut(id) {
            student.tags.push(tag);
        }
    }
    let zone = room.zones.add();
    room.zones.add_tag(zone, tag);
    for group in 0..4 {
        room.zones.add_seat(zone, SeatId::new(group, 0, 0));
        room.zones.add_seat(zone, SeatId::new(group, 1, 0));
    }
    room
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_assignment");
    group.sample_size(20);

    for &n in &[20, 40, 56] {
        let config = AssignmentConfig::default().with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            let engine = AssignmentEngine::new();
            let mut room = plain_room(n);
            b.iter(|| black_box(engine.run_random(black_box(&mut room), &config)))
        });
    }
    group.finish();
}

fn bench_unconstrained(c: &mut Criterion) {
    let mut group = c.benchmark_group("assignment_no_relations");
    group.sample_size(20);

    for &n in &[20, 40, 56] {
        let config = AssignmentConfig::default().with_relations(false).with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            let engine = AssignmentEngine::new();
            let mut room = plain_room(n);
            b.iter(|| black_box(engine.run(black_box(&mut room), &config)))
        });
    }
    group.finish();
}

fn bench_with_relations(c: &mut Criterion) {
    let mut group = c.benchmark_group("assignment_with_relations");
    group.sample_size(10);

    for &relations in &[4, 12, 24] {
        let config = AssignmentConfig::default().with_seed(42);
        group.bench_with_input(
            BenchmarkId::from_parameter(relations),
            &relations,
            |b, &relations| {
                let engine = AssignmentEngine::new();
                let mut room = constrained_room(56, relations);
                b.iter(|| black_box(engine.run(black_box(&mut room), &config)))
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_random, bench_unconstrained, bench_with_relations);
criterion_main!(benches);
