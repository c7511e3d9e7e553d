//! Converts MapReduce application names to actual application code.
//!
//! # Example
//!
//! To get the Pi estimation application:
//! ```
//! # use anyhow::Result;
//! // This is the correct import to use if you are outside the crate:
//! use mrpi::workload;
//! // Since you will be working within the `mrpi` crate,
//! // you should write `use crate::workload;` instead.
//! # fn main() -> Result<()> {
//! let pi = workload::named("pi")?;
//! # Ok(())
//! # }
//! ```

use crate::Workload;
use anyhow::{bail, Result};

pub mod pi;

/// Gets the [`Workload`] named `name`.
///
/// Returns [`None`] if no application with the given name was found.
pub fn try_named(name: &str) -> Option<Workload> {
    match name {
        "pi" => Some(Workload {
            map_fn: pi::map,
            reduce_fn: pi::reduce,
        }),
        _ => None,
    }
}

/// Gets the [`Workload`] named `name`.
///
/// Returns an [`anyhow::Error`] if no application with the given name was found.
pub fn named(name: &str) -> Result<Workload> {
    match try_named(name) {
        Some(app) => Ok(app),
        None => bail!("No app named `{}` found.", name),
    }
}
