use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use hotspot_synth_core::{RunStats, SimulationConfig, Simulator, SynthResult, TableWriter};
use tracing_subscriber::EnvFilter;

/// Synthetic hot-spot observation generator.
///
/// Every default reproduces the reference dataset; run with no arguments
/// to regenerate it byte for byte.
#[derive(Parser, Debug)]
#[command(name = "hotspot-synth")]
#[command(about = "Synthesize satellite thermal-anomaly detection records", long_about = None)]
struct Args {
    /// Seed for the deterministic random stream
    #[arg(short, long, default_value_t = 123)]
    seed: u64,

    /// Output table path
    #[arg(short, long, default_value = "file1.txt")]
    output: PathBuf,

    /// Simulation start as a Unix timestamp in seconds
    #[arg(long, default_value_t = 49 * 365 * 24 * 60 * 60)]
    start_time: i64,

    /// Simulated duration in seconds
    #[arg(long, default_value_t = 5 * 365 * 24 * 60 * 60)]
    duration: i64,

    /// Log each scheduled event, not just the run summary
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(&args) {
        Ok(stats) => {
            println!(
                "Wrote {} observation rows from {} events to {}",
                stats.rows_written,
                stats.events_recorded,
                args.output.display()
            );
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("hotspot-synth: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> SynthResult<RunStats> {
    let config = SimulationConfig {
        seed: args.seed,
        start_time: args.start_time,
        total_time: args.duration,
        ..SimulationConfig::default()
    };

    let file = File::create(&args.output)?;
    let mut table = TableWriter::new(BufWriter::new(file))?;

    let mut simulator = Simulator::with_reference_models(config);
    let stats = simulator.run(&mut table)?;

    // Flush before reporting success so a full disk surfaces as an error.
    table.finish()?;
    Ok(stats)
}
