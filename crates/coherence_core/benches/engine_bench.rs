use coherence_core::config::{GridConfig, ModelConfig};
use coherence_core::engine::Simulation;
use coherence_core::summary::decade_summary;
use coherence_data::DriverSeries;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_default_run(c: &mut Criterion) {
    c.bench_function("run_default_grid", |b| {
        b.iter(|| {
            let sim =
                Simulation::new(ModelConfig::default(), DriverSeries::baseline()).unwrap();
            black_box(sim.run().unwrap())
        });
    });
}

fn bench_fine_grid_run(c: &mut Criterion) {
    let config = ModelConfig {
        grid: GridConfig {
            steps_per_decade: 10_000,
            ..Default::default()
        },
        ..Default::default()
    };
    c.bench_function("run_fine_grid", |b| {
        b.iter(|| {
            let sim = Simulation::new(config.clone(), DriverSeries::baseline()).unwrap();
            black_box(sim.run().unwrap())
        });
    });
}

fn bench_summary(c: &mut Criterion) {
    let config = ModelConfig::default();
    let drivers = DriverSeries::baseline();
    let trajectory = Simulation::new(config.clone(), drivers.clone())
        .unwrap()
        .run()
        .unwrap();
    c.bench_function("decade_summary", |b| {
        b.iter(|| black_box(decade_summary(&trajectory, &config, &drivers)));
    });
}

criterion_group!(benches, bench_default_run, bench_fine_grid_run, bench_summary);
criterion_main!(benches);
