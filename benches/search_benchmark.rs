extern crate grid_astar;
use env_logger::Env;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use grid_astar::{neighbors::Metric, prelude::*, Point};
use log::info;

#[allow(unused)]
// Setup logging output
fn init() {
    let env = Env::default()
        .filter_or("MY_LOG_LEVEL", "info") // Change this to debug or trace to see every search.
        .write_style_or("MY_LOG_STYLE", "always");

    let _ = env_logger::Builder::from_env(env).is_test(true).try_init();
}

fn random_pairs(size: usize, count: usize) -> Vec<(Point, Point)> {
    let mut source = RandomEndpoints::with_seed(4);
    (0..count).map(|_| source.endpoints(size, size)).collect()
}

fn bench_configs(c: &mut Criterion) {
    let mut group = c.benchmark_group("Single search");
    group.sample_size(20);

    init();

    let configs = [
        ("standard", SearchConfig::default()),
        ("legacy", SearchConfig::LEGACY),
        ("optimal", SearchConfig::OPTIMAL),
    ];

    for size in [15, 64, 256] {
        let neighborhood = MooreNeighborhood::new(size, size);
        let corners = ((0, 0), (size - 1, size - 1));
        info!("benchmarking corner to corner on a {}x{} grid", size, size);

        for (name, config) in configs {
            let search = GridSearch::new(neighborhood, config);
            group.bench_with_input(BenchmarkId::new(name, size), &corners, |b, &(start, goal)| {
                b.iter(|| search.run(start, goal))
            });
        }

        let octile = GridSearch::new(
            neighborhood.with_metric(Metric::Octile),
            SearchConfig::OPTIMAL,
        );
        group.bench_with_input(
            BenchmarkId::new("optimal, octile", size),
            &corners,
            |b, &(start, goal)| b.iter(|| octile.run(start, goal)),
        );
    }
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("Batch search");
    group.sample_size(10);

    let size = 64;
    let pairs = random_pairs(size, 256);
    let search = GridSearch::new(MooreNeighborhood::new(size, size), SearchConfig::default());

    #[cfg(feature = "parallel")]
    let id = format!("Random pairs, Parallel, Map Size: ({}, {})", size, size);
    #[cfg(not(feature = "parallel"))]
    let id = format!("Random pairs, Single Threaded, Map Size: ({}, {})", size, size);

    group.bench_function(&id, |b| b.iter(|| search.run_batch(&pairs)));
}

criterion_group!(benches, bench_configs, bench_batch);
criterion_main!(benches);
