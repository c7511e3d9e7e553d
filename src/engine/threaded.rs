//! Thread-per-chunk backend with partitioned random streams.

use anyhow::{anyhow, Result};
use dashmap::DashMap;
use itertools::Itertools;
use log::debug;
use std::thread;

use super::{stream_rng, Engine};
use crate::cmd::Job;
use crate::utils::partition;
use crate::Workload;

// partial aggregates, keyed by worker index
type WorkerIndex = usize;
type Partials = DashMap<WorkerIndex, u64>;

/// One OS thread per contiguous chunk of the sequence.
///
/// Each worker folds its chunk over a private random stream and posts
/// the partial aggregate; the partials are then combined with the
/// workload's reduce function. The reduce function is associative and
/// commutative, so neither the chunking nor the completion order shows
/// up in the result.
pub struct Threaded;

impl Engine for Threaded {
    fn run(&self, job: &Job, workload: &Workload) -> Result<u64> {
        let chunks = partition(job.samples, job.workers);
        debug!(
            "dispatching {} samples over {} workers",
            job.samples,
            chunks.len()
        );

        let partials = Partials::new();
        thread::scope(|scope| -> Result<()> {
            let handles = chunks
                .iter()
                .enumerate()
                .map(|(worker, &(lo, hi))| {
                    let partials = &partials;
                    scope.spawn(move || -> Result<()> {
                        let mut rng = stream_rng(job.seed, worker as u64);
                        let mut aggregate = 0;
                        for elem in lo..=hi {
                            aggregate = (workload.reduce_fn)(
                                aggregate,
                                (workload.map_fn)(elem, &mut rng)?,
                            );
                        }
                        partials.insert(worker, aggregate);
                        Ok(())
                    })
                })
                .collect::<Vec<_>>();

            for handle in handles {
                handle
                    .join()
                    .map_err(|_| anyhow!("worker thread panicked"))??;
            }
            Ok(())
        })?;

        Ok(partials
            .into_iter()
            .map(|(_, partial)| partial)
            .tree_reduce(workload.reduce_fn)
            .unwrap_or(0))
    }
}
