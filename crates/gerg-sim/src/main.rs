use std::error::Error;

use clap::{Parser, Subcommand};
use commands::{
    sample::{self, SampleArgs},
    stats::{self, StatsArgs},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser, Debug)]
#[command(name = "gerg-sim", about = "Weighted network MH sampler CLI")]
struct Cli {
    /// Log filter used when `RUST_LOG` is unset.
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the sampler from a configuration and an initial state file.
    Sample(SampleArgs),
    /// Print the six statistics of a state file as JSON.
    Stats(StatsArgs),
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);
    match cli.command {
        Command::Sample(args) => sample::run(&args),
        Command::Stats(args) => stats::run(&args),
    }
}
