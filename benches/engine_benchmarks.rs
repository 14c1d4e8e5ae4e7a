use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use disk_dynamics::{Engine, EngineConfig};
use std::hint::black_box;

const DT: f64 = 1.0 / 120.0;

/// Builds an engine filled with `count` seeded disks and one settled tick
fn engine_with_disks(count: usize, seed: u64) -> Engine {
    let config = EngineConfig {
        min_radius: 2.0 / 1080.0,
        max_radius: 6.0 / 1080.0,
        spawn_limit: count,
        gravity: 9.81,
        restitution: 0.8,
        initial_aspect_ratio: 16.0 / 9.0,
        initial_window_height: 1080.0,
        spawn_rate: 0.0,
        correction_iterations: 4,
    };
    let aspect_ratio = config.initial_aspect_ratio;

    let mut engine = Engine::with_seed(config, seed).expect("benchmark config is valid");
    engine.set_world_bounds(aspect_ratio, 1.0);

    // The first tick fills the store and resolves spawn overlaps
    engine.step(DT, DT);
    engine
}

fn bench_step_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("step_scaling");

    for &count in &[1_000usize, 10_000, 50_000] {
        let mut engine = engine_with_disks(count, 42);
        let mut simulation_time = DT;

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("disks", count), &count, |b, _| {
            b.iter(|| {
                simulation_time += DT;
                black_box(engine.step(simulation_time, DT));
            });
        });
    }

    group.finish();
}

fn bench_broad_phase_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("broad_phase_modes");

    for (label, use_grid) in [("grid", true), ("brute_force", false)] {
        let mut engine = engine_with_disks(2_000, 42);
        engine.set_use_spatial_partitioning(use_grid);
        let mut simulation_time = DT;

        group.bench_function(label, |b| {
            b.iter(|| {
                simulation_time += DT;
                black_box(engine.step(simulation_time, DT));
            });
        });
    }

    group.finish();
}

fn bench_threading_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("threading_modes");
    group.sample_size(20);

    // Dense enough that the candidate-pair count clears the parallel cutoff
    for (label, single_threaded) in [("worker_pool", false), ("single_threaded", true)] {
        let mut engine = engine_with_disks(30_000, 42);
        engine.set_single_threaded(single_threaded);
        let mut simulation_time = DT;

        group.bench_function(label, |b| {
            b.iter(|| {
                simulation_time += DT;
                black_box(engine.step(simulation_time, DT));
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_step_scaling,
    bench_broad_phase_modes,
    bench_threading_modes
);
criterion_main!(benches);
