//! Command-line arguments of the driver and the job they resolve into.

use clap::Parser;
use std::num::NonZeroUsize;
use std::thread;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Total number of random samples to draw
    #[arg(value_parser = clap::value_parser!(u64).range(1..), default_value_t = 1_000_000)]
    pub samples: u64,

    /// Execution backend to run the pipeline on
    #[arg(short, long, default_value = "sequential")]
    pub engine: String,

    /// Worker threads for the threaded backend [default: available parallelism]
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// Fix the random seed for a reproducible run
    #[arg(short, long)]
    pub seed: Option<u64>,
}

/// A fully resolved run description.
#[derive(Debug, Clone)]
pub struct Job {
    pub samples: u64,
    pub engine: String,
    pub workers: usize,
    pub seed: Option<u64>,
}

impl Args {
    /// Resolves the parsed arguments into a [`Job`].
    pub fn into_job(self) -> Job {
        let workers = self.workers.unwrap_or_else(default_workers).max(1);
        Job {
            samples: self.samples,
            engine: self.engine,
            workers,
            seed: self.seed,
        }
    }
}

fn default_workers() -> usize {
    thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
}
