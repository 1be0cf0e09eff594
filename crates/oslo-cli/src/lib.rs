//! Command-line front end for the Oslo ricepile model.
//!
//! Builds a seeded pile, runs it, saves the avalanche-size sequence as
//! plain text (one decimal size per line) and reports steady-state onset.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use oslo_core::PileError;
use oslo_engine::{PileConfig, RicePile};
use thiserror::Error;
use tracing::info;

/// Errors surfaced by the front end.
#[derive(Debug, Error)]
pub enum CliError {
    /// The pile rejected its inputs.
    #[error(transparent)]
    Pile(#[from] PileError),
    /// Writing the results failed.
    #[error("failed to write {path}: {source}")]
    Write {
        /// Destination that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}

/// Run the Oslo ricepile model and save the avalanche sizes.
#[derive(Debug, Parser)]
#[command(name = "oslo")]
#[command(about = "Simulate the Oslo ricepile model and save avalanche sizes")]
#[command(version)]
pub struct Cli {
    /// Size of the rice pile
    #[arg(short = 'L', long, default_value_t = 4)]
    pub size: usize,

    /// Number of simulation steps
    #[arg(short = 'N', long, default_value_t = 1000, allow_negative_numbers = true)]
    pub steps: i64,

    /// Seed for threshold draws (random if omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output file name (default: avalanches_L{size}_N{steps}.txt)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Only save avalanches recorded after steady state was reached
    #[arg(long)]
    pub steady_only: bool,
}

impl Cli {
    /// Output path, falling back to the size/steps-derived default.
    pub fn output_path(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| {
            PathBuf::from(format!("avalanches_L{}_N{}.txt", self.size, self.steps))
        })
    }
}

/// What a run produced, for printing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    /// Where the sizes were written.
    pub output: PathBuf,
    /// Seed actually used.
    pub seed: u64,
    /// Number of sizes written.
    pub written: usize,
    /// Steady-state step, if reached.
    pub steady_state_time: Option<usize>,
}

impl Report {
    /// Print the report the way the front end presents it.
    pub fn print(&self) {
        println!("Saved results to {}", self.output.display());
        println!("Seed: {}", self.seed);
        println!("Reached steady state: {}", self.steady_state_time.is_some());
        if let Some(t) = self.steady_state_time {
            println!("Steady state reached at step: {t}");
        }
    }
}

/// Write one avalanche size per line.
pub fn write_sizes<W: Write>(mut out: W, sizes: &[u64]) -> io::Result<()> {
    for size in sizes {
        writeln!(out, "{size}")?;
    }
    out.flush()
}

/// Execute the command described by `cli`.
pub fn execute(cli: &Cli) -> Result<Report, CliError> {
    let seed = cli.seed.unwrap_or_else(rand::random);
    let mut rice = RicePile::new(PileConfig {
        size: cli.size,
        seed,
    })?;
    rice.run(cli.steps)?;

    let sizes = match rice.last_result() {
        Some(result) if cli.steady_only => result.steady_state_avalanches(),
        Some(result) => result.avalanche_sizes.as_slice(),
        None => &[],
    };

    let output = cli.output_path();
    save(&output, sizes)?;
    info!(path = %output.display(), count = sizes.len(), "saved avalanche sizes");

    Ok(Report {
        output,
        seed,
        written: sizes.len(),
        steady_state_time: rice.last_result().and_then(|r| r.steady_state_time),
    })
}

fn save(path: &Path, sizes: &[u64]) -> Result<(), CliError> {
    let wrap = |source| CliError::Write {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(wrap)?;
    write_sizes(BufWriter::new(file), sizes).map_err(wrap)
}
