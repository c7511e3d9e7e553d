//! Single-threaded reference backend.

use anyhow::Result;
use log::debug;
use rand::RngCore;

use super::{stream_rng, Engine};
use crate::cmd::Job;
use crate::Workload;

/// Folds the whole sequence on the calling thread over one random stream.
pub struct Sequential;

impl Engine for Sequential {
    fn run(&self, job: &Job, workload: &Workload) -> Result<u64> {
        let mut rng = stream_rng(job.seed, 0);
        fold(job.samples, workload, &mut rng)
    }
}

/// Maps every element of `1..=samples` and folds the outcomes.
///
/// The random source is an explicit parameter so callers can substitute
/// a deterministic one.
pub fn fold(samples: u64, workload: &Workload, rng: &mut dyn RngCore) -> Result<u64> {
    let mut aggregate = 0;
    for elem in 1..=samples {
        aggregate = (workload.reduce_fn)(aggregate, (workload.map_fn)(elem, rng)?);
    }
    debug!("folded {} samples, aggregate {}", samples, aggregate);
    Ok(aggregate)
}
