//! Monte Carlo estimation of Pi as a MapReduce (lite) batch job.
//!
//! The driver expands a sample count into the sequence `1..=n`, applies a
//! sampling map function to every element, and folds all trial outcomes
//! into a single aggregate with an associative, commutative reduce
//! function. Execution is handled by a pluggable [`engine::Engine`]
//! backend; the pipeline reads the same whether it runs on one thread
//! or many.

use anyhow::Result;
use rand::RngCore;

pub mod cmd;
pub mod engine;
pub mod utils;
pub mod workload;

/////////////////////////////////////////////////////////////////////////////
// MapReduce application types
/////////////////////////////////////////////////////////////////////////////

/// A map function turns one element of the generated sequence into a
/// partial result.
///
/// The element value carries no meaning beyond driving one independent
/// trial; the interesting input is `rng`, the random source injected by
/// the engine. Engines hand every map invocation a source that is private
/// to the calling worker, so a map function never synchronizes on shared
/// state.
pub type MapFn = fn(elem: u64, rng: &mut dyn RngCore) -> Result<u64>;

/// A reduce function combines two partial aggregates into one.
///
/// It must be associative and commutative: engines fold sequentially, in
/// a parallel tree, or in whatever order partial results arrive, and the
/// aggregate must not depend on that order.
pub type ReduceFn = fn(a: u64, b: u64) -> u64;

/// A map reduce application.
#[derive(Copy, Clone)]
pub struct Workload {
    pub map_fn: MapFn,
    pub reduce_fn: ReduceFn,
}
