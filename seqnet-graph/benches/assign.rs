use criterion::{black_box, criterion_group, criterion_main, Criterion};

use seqnet_core::SeparationBound;
use seqnet_graph::{
    assign_bipartite, assign_unipartite, eligible_pairs, expand_pairs, PairMode, ScoreRelation,
};
use seqnet_io::{parse_score_str, ScoreFormat};
use seqnet_seq::ResidueSeq;

fn random_sequence(n: usize, seed: u64) -> ResidueSeq {
    const AA: &[u8] = b"ACDEFGHIKLMNPQRSTVWY";
    let mut state = seed;
    let bytes: Vec<u8> = (0..n)
        .map(|_| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
            AA[(state >> 33) as usize % AA.len()]
        })
        .collect();
    ResidueSeq::new(bytes).unwrap()
}

fn random_relation(n: usize, seed: u64) -> ScoreRelation {
    let mut state = seed;
    let mut text = String::new();
    for i in 1..=n {
        for j in (i + 1)..=n {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
            let score = (state >> 11) as f64 / (1u64 << 53) as f64;
            text.push_str(&format!("{i} {j} {score}\n"));
        }
    }
    let table = parse_score_str(&text, ScoreFormat::Generic).unwrap();
    ScoreRelation::from_table(&table)
}

fn bench_unipartite(c: &mut Criterion) {
    let mut group = c.benchmark_group("unipartite");

    let seq = random_sequence(150, 42);
    let relation = random_relation(150, 42);
    let pairs = eligible_pairs(&seq, &SeparationBound::unbounded());
    let windows = expand_pairs(&pairs, 3, seq.len());

    group.bench_function("n150_w3", |b| {
        b.iter(|| assign_unipartite(black_box(&pairs), black_box(&windows), &relation))
    });

    group.finish();
}

fn bench_bipartite(c: &mut Criterion) {
    let mut group = c.benchmark_group("bipartite");

    let seq = random_sequence(150, 42);
    let relation = random_relation(150, 42);
    let pairs = eligible_pairs(&seq, &SeparationBound::unbounded());
    let windows = expand_pairs(&pairs, 3, seq.len());
    let offsets = PairMode::Memconp.offsets(0);

    group.bench_function("n150_w3_memconp", |b| {
        b.iter(|| {
            assign_bipartite(
                black_box(&pairs),
                black_box(&windows),
                &offsets,
                seq.len(),
                &relation,
            )
        })
    });

    group.finish();
}

criterion_group!(benches, bench_unipartite, bench_bipartite);
criterion_main!(benches);
