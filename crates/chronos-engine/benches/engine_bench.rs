use std::sync::Arc;

use chrono::{TimeZone, Utc};
use chronos_core::traits::FixedClock;
use chronos_engine::{CausalityEngine, InMemoryEraStates};
use criterion::{criterion_group, criterion_main, Criterion};

fn bench_engine(c: &mut Criterion) {
    let engine = CausalityEngine::builder()
        .clock(Arc::new(FixedClock(Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap())))
        .seed(1)
        .build();
    let world = InMemoryEraStates::seeded();

    c.bench_function("process_command", |b| {
        b.iter(|| engine.process_command("Save Leonardo from the fire", "Renaissance"))
    });

    c.bench_function("run_command_with_world", |b| {
        b.iter(|| engine.run_command("Alter the blueprint", "Renaissance", Some(&world)))
    });

    c.bench_function("check_causality", |b| {
        b.iter(|| engine.check_causality("Dark Ages", "Cyberpunk"))
    });
}

criterion_group!(benches, bench_engine);
criterion_main!(benches);
