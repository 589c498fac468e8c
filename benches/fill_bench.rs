//! Criterion benchmarks for ring completion and capped fills

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use faction_claims::claims::{Claim, ClaimMap, ClaimStore};
use faction_claims::core::config::FillConfig;
use faction_claims::core::types::FactionId;
use faction_claims::fill::ClaimFiller;
use faction_claims::grid::GridPoint;

const LEVEL: &str = "overworld";

/// Ring of side `size + 1` with every cell claimed except (0, 1)
fn open_ring(size: i32, faction: FactionId) -> ClaimMap {
    let mut map = ClaimMap::new();
    for i in 0..=size {
        map.insert(Claim::new(i, 0, LEVEL, faction));
        map.insert(Claim::new(i, size, LEVEL, faction));
        map.insert(Claim::new(size, i, LEVEL, faction));
        if i != 1 {
            map.insert(Claim::new(0, i, LEVEL, faction));
        }
    }
    map
}

fn fill_bench(c: &mut Criterion) {
    let faction = FactionId::new();
    let filler = ClaimFiller::new(FillConfig::default());
    let last = Claim::at(GridPoint::new(0, 1), LEVEL, faction);

    let mut group = c.benchmark_group("fill");

    group.bench_function("ring_10", |b| {
        b.iter_batched(
            || {
                let mut map = open_ring(10, faction);
                map.insert(last.clone());
                map
            },
            |mut map| black_box(filler.fill(&last, &mut map)),
            BatchSize::SmallInput,
        )
    });

    // Interior far larger than the cap
    group.bench_function("ring_64_capped", |b| {
        b.iter_batched(
            || {
                let mut map = open_ring(64, faction);
                map.insert(last.clone());
                map
            },
            |mut map| black_box(filler.fill(&last, &mut map)),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, fill_bench);
criterion_main!(benches);
