use gerg_core::GergError;
use gerg_stats::{IndexSets, Network, PairSet, TripleSet};

#[test]
fn complete_sets_enumerate_combinations() {
    let sets = IndexSets::complete(5);
    assert_eq!(sets.triples.len(), 10);
    assert_eq!(sets.pairs.len(), 10);
    assert_eq!(sets.triples.iter().next(), Some(&[0, 1, 2]));
    assert_eq!(sets.pairs.iter().last(), Some(&[3, 4]));
    assert!(sets.validate(5).is_ok());
}

#[test]
fn small_networks_have_no_triples() {
    assert!(TripleSet::all(2).is_empty());
    assert_eq!(PairSet::all(2).len(), 1);
}

#[test]
fn out_of_range_index_is_rejected() {
    let sets = IndexSets::new(TripleSet::new(vec![[0, 1, 2], [0, 1, 3]]), PairSet::all(3));
    match sets.validate(3) {
        Err(GergError::InvalidArgument(info)) => {
            assert_eq!(info.code, "index-out-of-range");
            assert_eq!(info.context["row"], "1");
            assert_eq!(info.context["column"], "2");
            assert_eq!(info.context["index"], "3");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn pair_indices_are_checked() {
    let pairs = PairSet::new(vec![[4, 0]]);
    assert!(matches!(pairs.validate(4), Err(GergError::InvalidArgument(_))));
}

#[test]
fn network_rows_must_be_square() {
    let err = Network::from_rows(vec![vec![0.0, 0.5], vec![0.5]]).unwrap_err();
    assert_eq!(err.info().code, "network-not-square");
}

#[test]
fn mean_off_diagonal_skips_diagonal() {
    let mut net = Network::from_rows(vec![vec![9.0, 0.2], vec![0.4, 9.0]]).unwrap();
    assert!((net.mean_off_diagonal() - 0.3).abs() < 1e-12);
    net.set(0, 0, -1.0);
    assert!((net.mean_off_diagonal() - 0.3).abs() < 1e-12);
    let cells: Vec<_> = net.off_diagonal_cells().collect();
    assert_eq!(cells, vec![(0, 1), (1, 0)]);
}
