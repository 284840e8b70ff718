//! Command-line driver: reads initial conditions, integrates to the stop time and prints energy diagnostics.
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;
use log::{error, info};

use rs_nbody::bodies::{parse_bodies, read_bodies_from_path, write_bodies};
use rs_nbody::integrator::{Driver, ForceMode};
use rs_nbody::reporting::TextReporter;
use rs_nbody::utils::{NBodyError, SimulationConfig};

#[derive(Parser, Debug)]
#[command(name = "rs_nbody", version, about = "Direct-summation leapfrog N-body integrator")]
struct Cli {
    /// Simulated time to integrate to (defaults to 10 when missing or unusable)
    #[arg(value_name = "STOP_TIME", allow_negative_numbers = true)]
    stop_time: Option<String>,

    /// Read initial conditions from a file instead of standard input
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Evaluate forces on the rayon pool with this many shards (0 = one per thread)
    #[arg(long, value_name = "N")]
    shards: Option<usize>,

    /// Write the final bodies to a file in the input format
    #[arg(long, value_name = "FILE")]
    dump: Option<PathBuf>,
}

fn run(cli: Cli) -> Result<(), NBodyError> {
    let stop_time = SimulationConfig::parse_stop_time(cli.stop_time.as_deref());
    let force_mode = match cli.shards {
        Some(shards) => ForceMode::Sharded { shards },
        None => ForceMode::Serial,
    };
    let config = SimulationConfig::default()
        .with_stop_time(stop_time)
        .with_force_mode(force_mode);

    let bodies = match &cli.input {
        Some(path) => read_bodies_from_path(path)?,
        None => parse_bodies(io::stdin().lock())?,
    };

    let mut driver = Driver::new(config)?;
    driver.load(bodies)?;
    let mut reporter = TextReporter::new(io::stdout().lock());
    let summary = driver.run(&mut reporter)?;
    info!("Integrated to t = {} in {} steps", summary.elapsed_time, summary.steps);

    if let Some(path) = &cli.dump {
        if let Some(cluster) = driver.cluster() {
            let mut out = BufWriter::new(File::create(path)?);
            write_bodies(&mut out, cluster)?;
            info!("Wrote final state of {} bodies to {}", cluster.len(), path.display());
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
