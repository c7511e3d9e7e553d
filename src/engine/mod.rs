//! Pluggable execution backends for the map/reduce pipeline.
//!
//! An engine supplies the four capabilities the driver expects from its
//! execution substrate: generate the sequence `1..=samples`, apply the
//! workload's map function to every element, combine all outcomes with
//! the reduce function, and hand the single aggregate back. How the
//! work is scheduled is entirely the backend's business.

use anyhow::{bail, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::cmd::Job;
use crate::Workload;

pub mod sequential;
pub mod threaded;

/// An execution backend.
pub trait Engine {
    /// Runs `workload` over the sequence `1..=job.samples` and returns
    /// the collected aggregate.
    fn run(&self, job: &Job, workload: &Workload) -> Result<u64>;
}

/// Gets the engine named `name`.
///
/// Returns [`None`] if no backend with the given name was found.
pub fn try_named(name: &str) -> Option<Box<dyn Engine>> {
    match name {
        "sequential" => Some(Box::new(sequential::Sequential)),
        "threaded" => Some(Box::new(threaded::Threaded)),
        _ => None,
    }
}

/// Gets the engine named `name`.
///
/// Returns an [`anyhow::Error`] if no backend with the given name was found.
pub fn named(name: &str) -> Result<Box<dyn Engine>> {
    match try_named(name) {
        Some(engine) => Ok(engine),
        None => bail!("No engine named `{}` found.", name),
    }
}

/// Builds the random source for one worker stream.
///
/// A seeded job derives stream `i` from `seed + i`, giving every worker
/// an independent deterministic sequence; an unseeded job pulls fresh
/// OS entropy per stream.
pub fn stream_rng(seed: Option<u64>, stream: u64) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(stream)),
        None => StdRng::from_os_rng(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_both_backends() {
        assert!(try_named("sequential").is_some());
        assert!(try_named("threaded").is_some());
    }

    #[test]
    fn unknown_backend_is_an_error() {
        assert!(try_named("cluster").is_none());
        assert!(named("cluster").is_err());
    }

    #[test]
    fn seeded_streams_are_independent_but_reproducible() {
        use rand::RngCore;
        let a = stream_rng(Some(1), 0).next_u64();
        let b = stream_rng(Some(1), 1).next_u64();
        assert_ne!(a, b);
        assert_eq!(a, stream_rng(Some(1), 0).next_u64());
    }
}
