use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use gerg_stats::{evaluate_all, CombineMode, PerStatistic, Statistic};
use serde_json::{json, Map, Value};

use super::state::load_inputs;

#[derive(Args, Debug)]
pub struct StatsArgs {
    /// JSON state file holding the network and optional index sets.
    #[arg(long = "in")]
    pub input: PathBuf,
    /// Exponent applied to every statistic.
    #[arg(long, default_value_t = 1.0)]
    pub alpha: f64,
    /// Raise each motif sub-sum to `alpha` instead of the total.
    #[arg(long)]
    pub per_term: bool,
}

pub fn run(args: &StatsArgs) -> Result<(), Box<dyn Error>> {
    let inputs = load_inputs(&args.input)?;
    inputs.sets.validate(inputs.network.nodes())?;
    let mode = CombineMode::from_together(!args.per_term);
    let values = evaluate_all(
        &inputs.network,
        &inputs.sets,
        &PerStatistic::splat(args.alpha),
        mode,
    );

    let mut statistics = Map::new();
    for (stat, value) in values.iter() {
        statistics.insert(stat.as_str().to_string(), json!(value));
    }
    let report = json!({
        "nodes": inputs.network.nodes(),
        "mean_weight": inputs.network.mean_off_diagonal(),
        "statistics": Value::Object(statistics),
        "order": Statistic::ALL.iter().map(Statistic::as_str).collect::<Vec<_>>(),
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
