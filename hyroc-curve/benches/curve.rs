use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hyroc_curve::{compute_auc, roc_curve_with, BinaryTruth, RocConfig};

fn random_samples(n: usize, seed: u64) -> (Vec<f64>, Vec<bool>) {
    let mut state = seed;
    let mut next = || {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (state >> 11) as f64 / (1u64 << 53) as f64
    };
    let mut scores = Vec::with_capacity(n);
    let mut labels = Vec::with_capacity(n);
    for i in 0..n {
        let positive = i % 3 == 0;
        // Positives lean high so the curve is not a diagonal.
        let shift = if positive { 0.3 } else { 0.0 };
        scores.push(next() + shift);
        labels.push(positive);
    }
    (scores, labels)
}

fn bench_roc_curve(c: &mut Criterion) {
    let mut group = c.benchmark_group("roc_curve");

    for &n in &[1_000usize, 100_000] {
        let (scores, labels) = random_samples(n, 42);
        let truth = BinaryTruth::from_bools(&labels).unwrap();

        group.bench_with_input(BenchmarkId::new("full", n), &n, |b, _| {
            b.iter(|| roc_curve_with(black_box(&scores), &truth, &RocConfig::default()))
        });

        let trimmed = RocConfig {
            drop_intermediate: true,
        };
        group.bench_with_input(BenchmarkId::new("drop_intermediate", n), &n, |b, _| {
            b.iter(|| roc_curve_with(black_box(&scores), &truth, &trimmed))
        });
    }

    group.finish();
}

fn bench_auc(c: &mut Criterion) {
    let mut group = c.benchmark_group("auc");

    let n = 100_000;
    let fpr: Vec<f64> = (0..=n).map(|i| i as f64 / n as f64).collect();
    let tpr: Vec<f64> = fpr.iter().map(|x| x.sqrt()).collect();

    group.bench_function("trapezoid_100k", |b| {
        b.iter(|| compute_auc(black_box(&fpr), black_box(&tpr)))
    });

    group.finish();
}

criterion_group!(benches, bench_roc_curve, bench_auc);
criterion_main!(benches);
