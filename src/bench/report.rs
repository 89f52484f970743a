//! Benchmark reports in text and JSON form.

use crate::bench::stats::TimingStats;
use crate::chain::ChainShape;
use crate::config::ReportFormat;
use crate::core::Result;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// Timing summary for one scenario.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScenarioReport {
    /// Records per chain
    pub n: usize,
    /// Payload width
    pub k: usize,
    /// Builds measured
    pub runs: u64,
    /// Average build time (ms)
    pub mean_ms: f64,
    /// Fastest build (ms)
    pub min_ms: f64,
    /// Slowest build (ms)
    pub max_ms: f64,
}

impl ScenarioReport {
    /// Summarize collected timings.
    pub fn from_stats(shape: ChainShape, stats: &TimingStats) -> Self {
        Self {
            n: shape.records,
            k: shape.width,
            runs: stats.count(),
            mean_ms: stats.mean_ms(),
            min_ms: stats.min_ms(),
            max_ms: stats.max_ms(),
        }
    }

    /// Scenario label, `n=3, k=4`.
    pub fn label(&self) -> String {
        format!("n={}, k={}", self.n, self.k)
    }

    /// One-line summary.
    pub fn to_text(&self) -> String {
        format!("{}: {:.4} ms", self.label(), self.mean_ms)
    }
}

/// Results for a whole benchmark run.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BenchReport {
    /// Scenario results, in run order
    pub scenarios: Vec<ScenarioReport>,
}

impl BenchReport {
    /// Render as text: per-scenario blocks followed by a results table.
    pub fn to_text(&self) -> String {
        let mut out = String::from("--- Running scenarios ---\n");
        for scenario in &self.scenarios {
            let _ = write!(
                out,
                "\nScenario: {}\nAverage time: {:.4} ms (min {:.4}, max {:.4}, runs {})\n",
                scenario.label(),
                scenario.mean_ms,
                scenario.min_ms,
                scenario.max_ms,
                scenario.runs
            );
        }
        out.push_str("\n--- Results ---\n");
        for scenario in &self.scenarios {
            out.push_str(&scenario.to_text());
            out.push('\n');
        }
        out
    }

    /// Render as pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.scenarios)?)
    }

    /// Render in the requested format.
    pub fn render(&self, format: ReportFormat) -> Result<String> {
        match format {
            ReportFormat::Text => Ok(self.to_text()),
            ReportFormat::Json => self.to_json(),
        }
    }
}
