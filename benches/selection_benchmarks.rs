use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use selection::{median_of_medians, quickselect};

fn random_input(len: usize, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_range(-1_000_000..1_000_000)).collect()
}

fn bench_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("median_rank");
    for &len in &[1_000usize, 10_000, 100_000] {
        let data = random_input(len, 42);
        let k = len / 2;
        group.bench_with_input(
            BenchmarkId::new("median_of_medians", len),
            &data,
            |b, data| b.iter(|| median_of_medians(black_box(data), black_box(k)).unwrap()),
        );
        group.bench_with_input(BenchmarkId::new("quickselect", len), &data, |b, data| {
            b.iter(|| quickselect(black_box(data), black_box(k)).unwrap())
        });
        group.bench_with_input(
            BenchmarkId::new("select_nth_unstable", len),
            &data,
            |b, data| {
                b.iter(|| {
                    let mut scratch = data.clone();
                    *scratch.select_nth_unstable(black_box(k)).1
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_selection);
criterion_main!(benches);
