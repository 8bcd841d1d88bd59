//! Scoring throughput benchmarks.
//!
//! Run with `cargo bench --bench score_bench`. The batch case mirrors the
//! hot path in production: one preference payload against a page of
//! candidate pets.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use matchpaw::{score, score_batch, ScoreConfig};
use serde_json::{json, Value};

fn synthetic_pet(i: usize) -> Value {
    let sizes = ["small", "medium", "large"];
    match i % 3 {
        0 => json!({
            "name": format!("pet-{i}"),
            "traits": {
                "energyLevel": (i % 5) as i64 + 1,
                "sociability": (i % 4) as i64 + 1,
                "noiseTolerance": (i % 3) as i64 + 1,
                "kidFriendly": i % 2 == 0,
                "size": sizes[i % 3],
            },
        }),
        1 => json!({
            "name": format!("pet-{i}"),
            "energyLevel": (i % 5) as i64 + 1,
            "vocality": (i % 5) as i64 + 1,
            "goodWithPets": i % 2 == 1,
            "size": sizes[i % 3],
            "description": "Gentle indoor companion looking for a quiet home.",
        }),
        _ => json!({ "name": format!("pet-{i}") }),
    }
}

fn bench_single_score(c: &mut Criterion) {
    let pet = synthetic_pet(0);
    let prefs = json!({
        "energyLevel": 4,
        "sociability": 3,
        "homeType": "apartment",
        "indoorPreferred": true,
        "hasKids": true,
    });

    c.bench_function("score_single", |b| {
        b.iter(|| score(black_box(&pet), black_box(&prefs)))
    });
}

fn bench_batch_score(c: &mut Criterion) {
    let prefs = json!({
        "energyLevel": 2,
        "homeType": "apartment",
        "indoorPreferred": true,
    });
    let cfg = ScoreConfig::default();

    let mut group = c.benchmark_group("score_batch");
    for batch_size in [10usize, 100, 1_000] {
        let pets: Vec<Value> = (0..batch_size).map(synthetic_pet).collect();
        group.bench_with_input(
            BenchmarkId::from_parameter(batch_size),
            &pets,
            |b, pets| b.iter(|| score_batch(black_box(pets), black_box(&prefs), &cfg)),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_single_score, bench_batch_score);
criterion_main!(benches);
