use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use queue_sim::engine::run_simulation;
use queue_sim::models::{DistributionConfig, SimulationParams};

fn build_params(arrival: DistributionConfig, servers: usize, priority: bool) -> SimulationParams {
    SimulationParams {
        arrival,
        service: DistributionConfig::Exponential { rate: 0.25 },
        servers,
        priority_enabled: priority,
        priority_levels: 3,
        seed: Some(42),
    }
}

fn bench_engine(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine");
    let cases = [
        ("poisson", DistributionConfig::Poisson { rate: 8.0 }),
        ("exponential", DistributionConfig::Exponential { rate: 5.0 }),
        (
            "normal",
            DistributionConfig::Normal {
                mean: 60.0,
                std_dev: 10.0,
            },
        ),
        ("uniform", DistributionConfig::Uniform { a: 1.0, b: 80.0 }),
    ];

    for (label, arrival) in cases {
        let params = build_params(arrival, 4, false);
        group.bench_with_input(BenchmarkId::new("fifo", label), &params, |b, params| {
            b.iter(|| run_simulation(black_box(params)).expect("simulation should succeed"));
        });

        let params = build_params(arrival, 4, true);
        group.bench_with_input(BenchmarkId::new("priority", label), &params, |b, params| {
            b.iter(|| run_simulation(black_box(params)).expect("simulation should succeed"));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_engine);
criterion_main!(benches);
