//! Benchmarks for Hanoi move generation
//!
//! Measures performance of:
//! - Correct and faulty generation at every supported size
//! - Replay planning
//! - Strict replay against a tower

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use hanoi_core::{generate, generate_faulty, DiskCount, PegLabel, ReplayPlan, TowerState};

fn disks(n: u8) -> DiskCount {
    DiskCount::new(n).expect("bench sizes are in range")
}

/// Benchmark both labellers across sizes
fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    for n in 1u8..=8 {
        let count = disks(n);
        group.throughput(Throughput::Elements(count.expected_moves() as u64));
        group.bench_with_input(BenchmarkId::new("correct", n), &count, |b, &count| {
            b.iter(|| generate(black_box(count), PegLabel::A, PegLabel::B, PegLabel::C))
        });
        group.bench_with_input(BenchmarkId::new("faulty", n), &count, |b, &count| {
            b.iter(|| generate_faulty(black_box(count), PegLabel::A, PegLabel::B, PegLabel::C))
        });
    }
    group.finish();
}

/// Benchmark building the timed replay plan
fn bench_plan(c: &mut Criterion) {
    let moves = generate(disks(8), PegLabel::A, PegLabel::B, PegLabel::C);
    c.bench_function("replay_plan_8", |b| {
        b.iter(|| ReplayPlan::new(black_box(&moves)))
    });
}

/// Benchmark strict replay of the largest puzzle
fn bench_replay(c: &mut Criterion) {
    let moves = generate(disks(8), PegLabel::A, PegLabel::B, PegLabel::C);
    c.bench_function("tower_replay_8", |b| {
        b.iter(|| {
            let mut tower = TowerState::new(8);
            for mv in &moves {
                tower.apply(black_box(mv)).expect("generated moves are legal");
            }
            tower
        })
    });
}

criterion_group!(benches, bench_generate, bench_plan, bench_replay);
criterion_main!(benches);
