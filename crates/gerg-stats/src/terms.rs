//! Structural statistics over triple and pair index sets.
//!
//! Every statistic accumulates one running sum per sub-term (motif
//! orientation) across the index set and hands the sums to
//! [`CombineMode`] together with the exponent.

use crate::index::{IndexSets, PairSet, TripleSet};
use crate::network::Network;
use crate::statistic::{CombineMode, PerStatistic, Statistic};

type Evaluator = fn(&Network, &IndexSets, f64, CombineMode) -> f64;

const EVALUATORS: [(Statistic, Evaluator); 6] = [
    (Statistic::Out2Star, eval_out_two_star),
    (Statistic::In2Star, eval_in_two_star),
    (Statistic::ClosedTriads, eval_closed_triads),
    (Statistic::Reciprocity, eval_reciprocity),
    (Statistic::TransitiveTriads, eval_transitive_triads),
    (Statistic::EdgeDensity, eval_edge_density),
];

fn eval_out_two_star(net: &Network, sets: &IndexSets, alpha: f64, mode: CombineMode) -> f64 {
    out_two_star(net, &sets.triples, alpha, mode)
}

fn eval_in_two_star(net: &Network, sets: &IndexSets, alpha: f64, mode: CombineMode) -> f64 {
    in_two_star(net, &sets.triples, alpha, mode)
}

fn eval_closed_triads(net: &Network, sets: &IndexSets, alpha: f64, mode: CombineMode) -> f64 {
    closed_triads(net, &sets.triples, alpha, mode)
}

fn eval_reciprocity(net: &Network, sets: &IndexSets, alpha: f64, mode: CombineMode) -> f64 {
    reciprocity(net, &sets.pairs, alpha, mode)
}

fn eval_transitive_triads(net: &Network, sets: &IndexSets, alpha: f64, mode: CombineMode) -> f64 {
    transitive_triads(net, &sets.triples, alpha, mode)
}

fn eval_edge_density(net: &Network, sets: &IndexSets, alpha: f64, mode: CombineMode) -> f64 {
    edge_density(net, &sets.pairs, alpha, mode)
}

/// Each node's product of its two outgoing weights to the other triple members.
pub fn out_two_star(net: &Network, triples: &TripleSet, alpha: f64, mode: CombineMode) -> f64 {
    let mut sums = [0.0; 3];
    for &[a, b, c] in triples.iter() {
        sums[0] += net.get(a, b) * net.get(a, c);
        sums[1] += net.get(b, a) * net.get(b, c);
        sums[2] += net.get(c, a) * net.get(c, b);
    }
    mode.combine(&sums, alpha)
}

/// Each node's product of its two incoming weights from the other triple members.
pub fn in_two_star(net: &Network, triples: &TripleSet, alpha: f64, mode: CombineMode) -> f64 {
    let mut sums = [0.0; 3];
    for &[a, b, c] in triples.iter() {
        sums[0] += net.get(c, a) * net.get(b, a);
        sums[1] += net.get(c, b) * net.get(a, b);
        sums[2] += net.get(a, c) * net.get(b, c);
    }
    mode.combine(&sums, alpha)
}

/// Transitive triads: the six orientations of a triple forming a transitive closure.
pub fn transitive_triads(net: &Network, triples: &TripleSet, alpha: f64, mode: CombineMode) -> f64 {
    let mut sums = [0.0; 6];
    for &[a, b, c] in triples.iter() {
        sums[0] += net.get(a, b) * net.get(b, c) * net.get(a, c);
        sums[1] += net.get(a, b) * net.get(c, b) * net.get(c, a);
        sums[2] += net.get(a, b) * net.get(c, b) * net.get(a, c);
        sums[3] += net.get(b, a) * net.get(b, c) * net.get(c, a);
        sums[4] += net.get(b, a) * net.get(b, c) * net.get(a, c);
        sums[5] += net.get(b, a) * net.get(c, b) * net.get(c, a);
    }
    mode.combine(&sums, alpha)
}

/// Cyclic triads: `a -> b -> c -> a` and its reverse.
pub fn closed_triads(net: &Network, triples: &TripleSet, alpha: f64, mode: CombineMode) -> f64 {
    let mut sums = [0.0; 2];
    for &[a, b, c] in triples.iter() {
        sums[0] += net.get(a, b) * net.get(b, c) * net.get(c, a);
        sums[1] += net.get(b, a) * net.get(c, b) * net.get(a, c);
    }
    mode.combine(&sums, alpha)
}

/// Reciprocated weight `w(a,b) w(b,a)` summed over pairs.
///
/// There is a single sub-term, so the total is always raised to `alpha`.
pub fn reciprocity(net: &Network, pairs: &PairSet, alpha: f64, _mode: CombineMode) -> f64 {
    pairs
        .iter()
        .map(|&[a, b]| net.get(a, b) * net.get(b, a))
        .sum::<f64>()
        .powf(alpha)
}

/// Edge weight over pairs in both directions.
///
/// `Together` raises the grand total to `alpha`; `PerTerm` raises every
/// directed weight to `alpha` before summing.
pub fn edge_density(net: &Network, pairs: &PairSet, alpha: f64, mode: CombineMode) -> f64 {
    match mode {
        CombineMode::Together => pairs
            .iter()
            .map(|&[a, b]| net.get(a, b) + net.get(b, a))
            .sum::<f64>()
            .powf(alpha),
        CombineMode::PerTerm => pairs
            .iter()
            .map(|&[a, b]| net.get(a, b).powf(alpha) + net.get(b, a).powf(alpha))
            .sum(),
    }
}

/// Evaluates one statistic through the slot lookup table.
pub fn evaluate(
    stat: Statistic,
    net: &Network,
    sets: &IndexSets,
    alpha: f64,
    mode: CombineMode,
) -> f64 {
    let (_, evaluator) = EVALUATORS[stat.slot()];
    evaluator(net, sets, alpha, mode)
}

/// Evaluates all six statistics, regardless of which are active in a model.
pub fn evaluate_all(
    net: &Network,
    sets: &IndexSets,
    alphas: &PerStatistic<f64>,
    mode: CombineMode,
) -> PerStatistic<f64> {
    let mut values = PerStatistic::splat(0.0);
    for (stat, evaluator) in EVALUATORS {
        values[stat] = evaluator(net, sets, alphas[stat], mode);
    }
    values
}
