use chrono::Utc;
use criterion::{criterion_group, criterion_main, Criterion};

use chronos_causal::{CausalGraphStore, TraversalConfig};
use chronos_core::models::{Anchor, CausalLink, EffectPolarity};

/// 500 anchors in a chain with a skip link every fifth anchor.
fn build_long_timeline() -> CausalGraphStore {
    let now = Utc::now();
    let mut store = CausalGraphStore::new();
    let n = 500;
    for i in 0..n {
        let anchor = Anchor::new(format!("n{i}"), i, format!("Era {i}"), "", "", now);
        store.add_anchor(anchor).unwrap();
    }
    for i in 0..n - 1 {
        let link = CausalLink::new(
            format!("n{i}"),
            format!("n{}", i + 1),
            EffectPolarity::Positive,
            0.6,
            "",
        );
        store.add_link(link).unwrap();
        if i % 5 == 0 && i + 3 < n {
            let skip = CausalLink::new(
                format!("n{i}"),
                format!("n{}", i + 3),
                EffectPolarity::Negative,
                0.3,
                "",
            );
            store.add_link(skip).unwrap();
        }
    }
    store
}

fn bench_find_path(c: &mut Criterion) {
    let store = build_long_timeline();
    c.bench_function("find_path_500_chain", |b| {
        b.iter(|| store.find_path("n0", "n499"))
    });
}

fn bench_reachability(c: &mut Criterion) {
    let store = build_long_timeline();
    let config = TraversalConfig {
        max_depth: 1_000,
        min_magnitude: 0.0,
        max_nodes: 1_000,
    };
    c.bench_function("reachable_500_chain", |b| {
        b.iter(|| store.reachable("n0", &config))
    });
}

criterion_group!(benches, bench_find_path, bench_reachability);
criterion_main!(benches);
