use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use sirna_core::config::{RulePreset, SymbolPolicy};
use sirna_core::rules::presets;
use sirna_core::scorer::{score, score_parallel};
use sirna_core::sequence::Sequence;

use criterion_config::configure_criterion;

/// Deterministic pseudo-random transcript of `length` bases.
fn synthetic_sequence(length: usize) -> Sequence {
    let mut state: u32 = 0x9E37_79B9;
    let raw: Vec<u8> = (0..length)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            b"ACGT"[(state & 3) as usize]
        })
        .collect();
    Sequence::from_bytes("synthetic", None, &raw, SymbolPolicy::Reject).unwrap()
}

fn benchmark_scoring(c: &mut Criterion) {
    let rules = presets::build(RulePreset::Reynolds);
    let mut group = c.benchmark_group("reynolds_scoring");

    for length in [2_000, 20_000, 200_000] {
        let sequence = synthetic_sequence(length);
        group.throughput(Throughput::Elements(length as u64));

        group.bench_with_input(BenchmarkId::new("sequential", length), &sequence, |b, seq| {
            b.iter(|| score(black_box(seq), 19, &rules).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("parallel", length), &sequence, |b, seq| {
            b.iter(|| score_parallel(black_box(seq), 19, &rules).unwrap());
        });
    }
    group.finish();
}

fn benchmark_presets(c: &mut Criterion) {
    let sequence = synthetic_sequence(20_000);
    let mut group = c.benchmark_group("presets");

    for preset in [RulePreset::Reynolds, RulePreset::GcCount] {
        let rules = presets::build(preset);
        group.bench_function(preset.to_string(), |b| {
            b.iter(|| score(black_box(&sequence), 19, &rules).unwrap());
        });
    }
    group.finish();
}

criterion_group! {
    name = benches;
    config = configure_criterion();
    targets = benchmark_scoring, benchmark_presets
}
criterion_main!(benches);
