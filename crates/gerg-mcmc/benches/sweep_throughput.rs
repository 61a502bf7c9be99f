use criterion::{criterion_group, criterion_main, Criterion};
use gerg_core::RngHandle;
use gerg_mcmc::{propose_sweep, run, ChainInputs, RunConfig};
use gerg_stats::{Model, Network};

fn sample_network(nodes: usize) -> Network {
    let mut net = Network::zeros(nodes);
    for (i, j) in net.off_diagonal_cells().collect::<Vec<_>>() {
        net.set(i, j, ((i * 7 + j * 13) % 89) as f64 / 100.0 + 0.05);
    }
    net
}

fn bench_sweep(c: &mut Criterion) {
    let mut config = RunConfig::default();
    config.iterations = 5;
    config.snapshot_interval = 5;
    config.model = Model::from_slots(
        &[true; 6],
        &[0.1, 0.1, -0.2, 0.3, -0.1, -0.5],
        &[1.0; 6],
        true,
    )
    .unwrap();
    let inputs = ChainInputs::complete(sample_network(12));

    c.bench_function("mcmc_sweep_n12", |b| {
        b.iter(|| run(&config, &inputs).unwrap())
    });

    let net = sample_network(30);
    c.bench_function("propose_sweep_n30", |b| {
        let mut rng = RngHandle::from_seed(7);
        b.iter(|| propose_sweep(&net, 0.1, 1_000_000, &mut rng).unwrap())
    });
}

criterion_group!(benches, bench_sweep);
criterion_main!(benches);
