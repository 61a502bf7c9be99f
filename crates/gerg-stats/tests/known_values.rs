use gerg_stats::{
    closed_triads, edge_density, in_two_star, out_two_star, reciprocity, transitive_triads,
    CombineMode, IndexSets, Model, Network, PairSet, PerStatistic, Statistic, TripleSet,
};

fn all_ones(nodes: usize) -> Network {
    Network::uniform(nodes, 1.0)
}

fn dyad(weight: f64) -> Network {
    let mut net = Network::zeros(2);
    net.set(0, 1, weight);
    net.set(1, 0, weight);
    net
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-12,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn triads_on_complete_unit_triple() {
    let net = all_ones(3);
    let triples = TripleSet::new(vec![[0, 1, 2]]);
    assert_close(transitive_triads(&net, &triples, 1.0, CombineMode::Together), 6.0);
    assert_close(closed_triads(&net, &triples, 1.0, CombineMode::Together), 2.0);
    assert_close(out_two_star(&net, &triples, 1.0, CombineMode::Together), 3.0);
    assert_close(in_two_star(&net, &triples, 1.0, CombineMode::Together), 3.0);
}

#[test]
fn dyadic_statistics_on_symmetric_pair() {
    let net = dyad(0.4);
    let pairs = PairSet::new(vec![[0, 1]]);
    assert_close(reciprocity(&net, &pairs, 2.0, CombineMode::Together), 0.16 * 0.16);
    assert_close(reciprocity(&net, &pairs, 1.0, CombineMode::PerTerm), 0.16);
    assert_close(edge_density(&net, &pairs, 1.0, CombineMode::Together), 0.8);
    assert_close(edge_density(&net, &pairs, 2.0, CombineMode::PerTerm), 0.32);
}

#[test]
fn reciprocity_ignores_combine_mode() {
    let mut net = dyad(0.4);
    net.set(1, 0, 0.5);
    let pairs = PairSet::new(vec![[0, 1]]);
    let together = reciprocity(&net, &pairs, 2.0, CombineMode::Together);
    let per_term = reciprocity(&net, &pairs, 2.0, CombineMode::PerTerm);
    assert_close(together, per_term);
    assert_close(together, 0.04);
}

#[test]
fn per_term_mode_raises_each_orientation() {
    let mut net = Network::zeros(3);
    net.set(0, 1, 0.5);
    net.set(1, 2, 0.5);
    net.set(2, 0, 0.5);
    let triples = TripleSet::new(vec![[0, 1, 2]]);
    // Only the forward cycle is present: 0.125 for one orientation, 0 for the other.
    assert_close(closed_triads(&net, &triples, 2.0, CombineMode::PerTerm), 0.125 * 0.125);
    assert_close(closed_triads(&net, &triples, 2.0, CombineMode::Together), 0.125 * 0.125);
    assert_close(closed_triads(&net, &triples, 1.0, CombineMode::Together), 0.125);
}

#[test]
fn out_and_in_stars_mirror_under_transpose() {
    let mut net = Network::zeros(3);
    let weights = [(0, 1, 0.2), (0, 2, 0.7), (1, 0, 0.4), (1, 2, 0.9), (2, 0, 0.3), (2, 1, 0.6)];
    let mut transposed = Network::zeros(3);
    for &(i, j, w) in &weights {
        net.set(i, j, w);
        transposed.set(j, i, w);
    }
    let triples = TripleSet::new(vec![[0, 1, 2]]);
    assert_close(
        out_two_star(&net, &triples, 1.5, CombineMode::Together),
        in_two_star(&transposed, &triples, 1.5, CombineMode::Together),
    );
}

#[test]
fn energy_sums_only_active_terms() {
    let net = all_ones(3);
    let sets = IndexSets::new(TripleSet::new(vec![[0, 1, 2]]), PairSet::all(3));
    let model = Model::from_slots(
        &[false, false, true, false, true, false],
        &[10.0, 10.0, 0.5, 10.0, -1.0, 10.0],
        &[1.0; 6],
        true,
    )
    .unwrap();
    // 0.5 * ctriads(2) - 1.0 * ttriads(6)
    assert_close(model.energy(&net, &sets), -5.0);
}

#[test]
fn snapshot_statistics_ignore_selector() {
    let net = all_ones(3);
    let sets = IndexSets::complete(3);
    let mut selector = PerStatistic::splat(false);
    selector[Statistic::Reciprocity] = true;
    let model = Model::new(
        selector,
        PerStatistic::splat(1.0),
        PerStatistic::splat(1.0),
        CombineMode::Together,
    );
    let stats = model.snapshot_statistics(&net, &sets);
    assert_eq!(stats.values(), [3.0, 3.0, 2.0, 3.0, 6.0, 6.0]);
    assert_close(model.energy(&net, &sets), 3.0);
}

#[test]
fn slot_vectors_must_cover_every_statistic() {
    let err = Model::from_slots(&[true; 6], &[1.0; 5], &[1.0; 6], true).unwrap_err();
    assert_eq!(err.info().code, "slot-length");
    assert_eq!(err.info().context.get("name").map(String::as_str), Some("thetas"));
}
