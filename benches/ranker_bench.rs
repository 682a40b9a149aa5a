// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ranker throughput over a synthetic directory.
//!
//! Sized like a real district extract: a few thousand names, short queries.
//! The interesting number is the full-fuzzy path (no containment hit), since
//! that scores every candidate.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use shala::{rank, RankParams, SchoolRecord, Scorer, WeightedRatio};

fn synthetic_records(count: usize) -> Vec<SchoolRecord> {
    let prefixes = ["Govt", "Private", "Aided", "Model", "St"];
    let kinds = ["High School", "Higher Primary School", "Lower Primary School", "Convent"];
    let places = ["Hebbal", "Varuna", "Jayanagar", "Hunsur", "Nanjangud", "Kollegal"];
    (0..count)
        .map(|i| {
            let name = format!(
                "{} {} {} {}",
                prefixes[i % prefixes.len()],
                kinds[(i / prefixes.len()) % kinds.len()],
                places[(i / 20) % places.len()],
                i
            );
            SchoolRecord::new(&name, "Mysuru", "", "", "", "", "", "", "")
        })
        .collect()
}

fn bench_scorer(c: &mut Criterion) {
    c.bench_function("weighted_ratio_single_pair", |b| {
        b.iter(|| {
            WeightedRatio.score(
                black_box("govt higher primery school hebal"),
                black_box("Govt Higher Primary School Hebbal"),
            )
        })
    });
}

fn bench_rank(c: &mut Criterion) {
    let records = synthetic_records(2000);
    let params = RankParams::default();

    c.bench_function("rank_containment_hit_2k", |b| {
        b.iter(|| rank(black_box("high school hebbal"), &records, &params, &WeightedRatio))
    });

    c.bench_function("rank_full_fuzzy_2k", |b| {
        b.iter(|| rank(black_box("hy skool heball"), &records, &params, &WeightedRatio))
    });
}

criterion_group!(benches, bench_scorer, bench_rank);
criterion_main!(benches);
