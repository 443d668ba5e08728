//! rlcsim command-line interface.
//!
//! Collects circuit parameters, runs a frequency sweep or a transient
//! analysis and prints the result as a table, CSV or JSON.

mod analysis;
mod output;
mod params;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use rlcsim_solver::{DampingClassifier, SweepParams, TimeSpan, default_span};
use tracing_subscriber::filter::LevelFilter;

use analysis::{TransientConfig, run_sweep, run_transient};
use params::CircuitArgs;

#[derive(Debug, Parser)]
#[command(name = "rlcsim")]
#[command(about = "Frequency and time response of series R, RC, RL and RLC circuits")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Steady-state AC sweep of current amplitude versus frequency
    Sweep {
        #[command(flatten)]
        circuit: CircuitArgs,

        /// Start frequency (Hz)
        #[arg(long, default_value_t = 100.0)]
        fstart: f64,

        /// Stop frequency (Hz)
        #[arg(long, default_value_t = 50_000.0)]
        fstop: f64,

        /// Number of logarithmically spaced points
        #[arg(short = 'n', long, default_value_t = 500)]
        points: usize,

        /// Also write the samples to a CSV file
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Output results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Step response: RC charge/discharge, RL growth/decay or RLC damping
    Transient {
        #[command(flatten)]
        circuit: CircuitArgs,

        /// Stop time (s); defaults to 5 tau for RC/RL and 10 ms for RLC
        #[arg(long)]
        tstop: Option<f64>,

        /// Number of samples; defaults to 500 for RC/RL and 1000 for RLC
        #[arg(short = 'n', long)]
        points: Option<usize>,

        /// Relative tolerance for detecting critical damping (0 = exact)
        #[arg(long, default_value_t = 0.0)]
        critical_tol: f64,

        /// Also write the samples to a CSV file
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Output results as JSON
        #[arg(long)]
        json: bool,
    },
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        LevelFilter::ERROR
    } else {
        match verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Resolve the transient window. A partial override keeps the topology
/// default for the half that was not given.
fn transient_span(
    circuit: &rlcsim_core::ParameterSet,
    tstop: Option<f64>,
    points: Option<usize>,
) -> anyhow::Result<Option<TimeSpan>> {
    if tstop.is_none() && points.is_none() {
        return Ok(None);
    }
    let default = default_span(circuit)?;
    Ok(Some(TimeSpan::new(
        tstop.unwrap_or(default.tstop),
        points.unwrap_or(default.num_points),
    )))
}

fn run(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Sweep {
            circuit,
            fstart,
            fstop,
            points,
            csv,
            json,
        } => {
            let params = circuit.to_parameter_set()?;
            let sweep_params = SweepParams::new(fstart, fstop, points);
            run_sweep(&params, &sweep_params, csv.as_deref(), json)
        }
        Commands::Transient {
            circuit,
            tstop,
            points,
            critical_tol,
            csv,
            json,
        } => {
            let params = circuit.to_parameter_set()?;
            let config = TransientConfig {
                span: transient_span(&params, tstop, points)?,
                classifier: DampingClassifier::with_tolerance(critical_tol),
            };
            run_transient(&params, &config, csv.as_deref(), json)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
