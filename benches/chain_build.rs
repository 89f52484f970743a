use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use linkchain::chain::ChainBuilder;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn chain_build(c: &mut Criterion) {
    let builder = ChainBuilder::new();
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut group = c.benchmark_group("chain_build");

    for (n, k) in [(3usize, 4usize), (10, 200), (200, 10)] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("n={n},k={k}")),
            &(n, k),
            |b, &(n, k)| {
                b.iter(|| builder.build(black_box(n), black_box(k), &mut rng));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, chain_build);
criterion_main!(benches);
