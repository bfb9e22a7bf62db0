use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dnamatch::{needle, search, water, Algorithm, ScoringScheme};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_dna(rng: &mut StdRng, len: usize) -> String {
    (0..len).map(|_| ['A', 'C', 'G', 'T'][rng.gen_range(0..4)]).collect()
}

fn bench_search(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let subject = random_dna(&mut rng, 100_000);
    let mut group = c.benchmark_group("search");

    for &m in &[4usize, 16, 64] {
        let pattern = subject[50_000..50_000 + m].to_string();
        for algorithm in Algorithm::ALL {
            group.bench_with_input(BenchmarkId::new(algorithm.name(), m), &m, |b, _| {
                b.iter(|| search(black_box(&subject), black_box(&pattern), algorithm))
            });
        }
    }
    group.finish();
}

fn bench_align(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(137);
    let scheme = ScoringScheme::default();
    let mut group = c.benchmark_group("pairwise");

    for &len in &[100usize, 1000] {
        let a = random_dna(&mut rng, len);
        let b = random_dna(&mut rng, len);
        group.bench_with_input(BenchmarkId::new("needle", len), &len, |bench, _| {
            bench.iter(|| needle(black_box(&a), black_box(&b), &scheme))
        });
        group.bench_with_input(BenchmarkId::new("water", len), &len, |bench, _| {
            bench.iter(|| water(black_box(&a), black_box(&b), &scheme))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_search, bench_align);
criterion_main!(benches);
