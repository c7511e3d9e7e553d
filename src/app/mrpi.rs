use anyhow::Result;
use clap::Parser;
use log::info;

use mrpi::cmd::{Args, Job};
use mrpi::engine::Engine;
use mrpi::{engine, workload};

fn parse_args() -> Job {
    Args::parse().into_job()
}

fn run_batch_job(job: &Job) -> Result<f64> {
    let workload = workload::named("pi")?;
    let engine = engine::named(&job.engine)?;
    info!(
        "estimating Pi from {} samples on the `{}` engine ({} workers)",
        job.samples, job.engine, job.workers
    );
    // Count how many of the samples would randomly fall into
    // the unit circle.
    let aggregate = engine.run(job, &workload)?;
    info!("collected aggregate: {} of {} samples in the circle", aggregate, job.samples);
    Ok(workload::pi::estimate(aggregate, job.samples))
}

fn main() -> Result<()> {
    env_logger::init();
    let job = parse_args();
    let estimate = run_batch_job(&job)?;
    println!("We estimate Pi to be: {}", estimate);
    Ok(())
}
