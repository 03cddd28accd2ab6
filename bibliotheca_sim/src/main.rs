//! Bibliotheca Simulator CLI
//!
//! Run a seeded library simulation and print one entry per step.

use bibliotheca_sim::{RunExport, SimConfig, SimulationRun};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Bibliotheca library simulation CLI
#[derive(Parser, Debug)]
#[command(name = "bibliotheca-sim")]
#[command(about = "Run a seeded library simulation", long_about = None)]
struct Args {
    /// Number of steps to run (steps 1..=N; zero or negative runs nothing)
    #[arg(short = 'n', long, default_value = "20", allow_negative_numbers = true)]
    steps: i64,

    /// Master seed for determinism, any integer (0 = random from time)
    #[arg(short, long, default_value = "42", allow_negative_numbers = true)]
    seed: i64,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// JSON output instead of text
    #[arg(long)]
    json: bool,

    /// Export the run to a JSON file
    #[arg(long)]
    export: Option<String>,
}

/// Maps a CLI seed onto the run seed.
///
/// Negative seeds keep their two's-complement bits; `0` draws a seed from
/// the wall clock.
fn resolve_seed(seed: i64) -> u64 {
    if seed == 0 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default()
    } else {
        seed as u64
    }
}

fn main() {
    let args = Args::parse();

    // Logs go to stderr; stdout carries the step output. RUST_LOG wins over --verbose.
    let default_level = if args.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    let seed = resolve_seed(args.seed);

    let config = SimConfig::default().with_steps(args.steps).with_seed(seed);
    let outcome = SimulationRun::from_config(&config).execute();
    let export = RunExport::from_outcome(&outcome);

    if args.json {
        match export.to_json_pretty() {
            Ok(json) => println!("{}", json),
            Err(e) => {
                error!("Failed to serialize run: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        for record in &outcome.records {
            println!();
            println!("{}", record.description);
            println!("{}", record.message);
        }
    }

    if let Some(path) = &args.export {
        if let Err(e) = export.write_to_file(path) {
            error!("Failed to write export to {}: {}", path, e);
            std::process::exit(1);
        }
        info!("Exported {} steps to {}", export.records.len(), path);
    }
}
