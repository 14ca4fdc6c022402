use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use enetpath::helpers::test_helpers::generate_random_data;
use enetpath::{DatasetBase, ElasticNetCV, ElasticNetPath, Fit};

fn bench_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("path");
    group.sample_size(10);

    for n_samples in [100, 1000] {
        for n_features in [10, 100] {
            for alpha in [1., 0.5, 0.1] {
                let (x, y) = generate_random_data(n_samples, n_features, 0.5, 42);
                let dataset = DatasetBase::from((x, y));

                let params = ElasticNetPath::params().alpha(alpha);
                let config = (n_samples, n_features, alpha);
                let config_string = format!("{}, {}, {}", n_samples, n_features, alpha);

                group.bench_with_input(
                    BenchmarkId::new("elastic_net_path", config_string),
                    &config,
                    |b, _| b.iter(|| params.fit(&dataset).unwrap()),
                );
            }
        }
    }

    group.finish();
}

fn bench_cross_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("cross_validation");
    group.sample_size(10);

    let (x, y) = generate_random_data(500, 50, 0.5, 42);
    let dataset = DatasetBase::from((x, y));

    for parallel in [false, true] {
        let params = ElasticNetCV::params().alpha(0.5).parallel(parallel);
        group.bench_with_input(
            BenchmarkId::new("elastic_net_cv", parallel),
            &parallel,
            |b, _| b.iter(|| params.fit(&dataset).unwrap()),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_path, bench_cross_validation);
criterion_main!(benches);
