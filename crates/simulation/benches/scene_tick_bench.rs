//! Criterion benchmarks for the digital-twin scene loop.
//!
//! Benchmarks:
//!   - full_tick:      one `FixedUpdate` run with the scene mounted
//!   - vehicle_step:   pure speed + position update for all 21 props
//!   - lamp_levels:    lamp intensity lookup for both axes
//!
//! Run with: cargo bench -p simulation --bench scene_tick_bench

use bevy::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use simulation::config::VEHICLE_Y;
use simulation::layout::VEHICLE_SPAWNS;
use simulation::signal::{Axis, SignalPhase};
use simulation::test_harness::TestScene;
use simulation::vehicles::{advance_position, tick_speed, VehicleProp};

// ---------------------------------------------------------------------------
// Benchmark: full scheduled tick
// ---------------------------------------------------------------------------

fn bench_full_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("scene_full_tick");
    group.sample_size(200);

    let mut scene = TestScene::new().with_live_twin();

    group.bench_function("mounted_scene", |b| {
        b.iter(|| scene.tick(1));
    });

    group.finish();
}

// ---------------------------------------------------------------------------
// Benchmark: vehicle step without the ECS
// ---------------------------------------------------------------------------

fn bench_vehicle_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("scene_vehicle_step");
    group.sample_size(500);

    let mut vehicles: Vec<(VehicleProp, Vec3)> = VEHICLE_SPAWNS
        .iter()
        .map(|s| {
            (
                VehicleProp::new(s.heading, s.speed, s.color),
                Vec3::new(s.x, VEHICLE_Y, s.z),
            )
        })
        .collect();
    let mut phase = SignalPhase::default();

    group.bench_function("all_21_props", |b| {
        b.iter(|| {
            phase.advance();
            for (prop, pos) in &mut vehicles {
                let speed = tick_speed(prop, *pos, &phase);
                advance_position(pos, prop.heading, speed);
            }
            black_box(&vehicles);
        });
    });

    group.finish();
}

// ---------------------------------------------------------------------------
// Benchmark: lamp level lookup
// ---------------------------------------------------------------------------

fn bench_lamp_levels(c: &mut Criterion) {
    let mut group = c.benchmark_group("scene_lamp_levels");
    group.sample_size(500);

    let mut phase = SignalPhase::default();

    group.bench_function("both_axes", |b| {
        b.iter(|| {
            phase.advance();
            black_box(phase.lamp_levels(black_box(Axis::NorthSouth)));
            black_box(phase.lamp_levels(black_box(Axis::EastWest)));
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_full_tick,
    bench_vehicle_step,
    bench_lamp_levels
);
criterion_main!(benches);
