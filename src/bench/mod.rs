//! Timing harness around chain construction.
//!
//! Only the `build` call sits inside the timed region; each chain is
//! dropped after its elapsed time has been captured.

pub mod report;
pub mod stats;

pub use report::{BenchReport, ScenarioReport};
pub use stats::TimingStats;

use crate::chain::{ChainBuilder, ChainShape, Clock, PayloadSource};
use crate::config::BenchConfig;
use crate::core::{Error, Result};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Time a single `build(n, k)` call.
pub fn measure<C, P>(builder: &ChainBuilder<C>, n: usize, k: usize, source: &mut P) -> Result<Duration>
where
    C: Clock,
    P: PayloadSource + ?Sized,
{
    let start = Instant::now();
    let chain = builder.build(n, k, source)?;
    let elapsed = start.elapsed();
    drop(chain);
    Ok(elapsed)
}

/// Build `shape` `runs` times and summarize the timings.
pub fn run_scenario<C, P>(
    builder: &ChainBuilder<C>,
    shape: ChainShape,
    runs: u32,
    source: &mut P,
) -> Result<ScenarioReport>
where
    C: Clock,
    P: PayloadSource + ?Sized,
{
    if runs == 0 {
        return Err(Error::InvalidArgument("runs must be at least 1".into()));
    }

    let mut stats = TimingStats::new();
    for run in 0..runs {
        let elapsed = measure(builder, shape.records, shape.width, source)?;
        debug!(%shape, run, elapsed_us = elapsed.as_micros() as u64, "run complete");
        stats.observe(elapsed);
    }

    let report = ScenarioReport::from_stats(shape, &stats);
    info!(%shape, mean_ms = report.mean_ms, runs, "scenario complete");
    Ok(report)
}

/// Run every configured scenario in order.
///
/// Configuration is validated up front so a bad entry fails before any
/// timing starts.
pub fn run_all<C, P>(builder: &ChainBuilder<C>, config: &BenchConfig, source: &mut P) -> Result<BenchReport>
where
    C: Clock,
    P: PayloadSource + ?Sized,
{
    let shapes = config.shapes()?;
    if config.runs == 0 {
        return Err(Error::InvalidArgument("runs must be at least 1".into()));
    }

    let mut report = BenchReport::default();
    for shape in shapes {
        report
            .scenarios
            .push(run_scenario(builder, shape, config.runs, source)?);
    }
    Ok(report)
}
