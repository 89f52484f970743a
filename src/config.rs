//! Chain and benchmark configuration.
//!
//! Defaults reproduce the stock scenario table; a JSON file or CLI flags
//! can override them.

use crate::chain::ChainShape;
use crate::core::{now, Error, Result, Timestamp};
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::ops::RangeInclusive;
use std::path::Path;

/// Lowest payload value.
pub const PAYLOAD_MIN: u32 = 1;
/// Highest payload value.
pub const PAYLOAD_MAX: u32 = 100_000;
/// Format of the genesis timestamp text, e.g. `18/10/2026 09:05:03`.
pub const GENESIS_TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// Constants of the construction rule.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainConfig {
    /// Inclusive lower bound of payload values
    pub payload_min: u32,
    /// Inclusive upper bound of payload values
    pub payload_max: u32,
    /// strftime pattern for the genesis timestamp
    pub timestamp_format: String,
}

impl ChainConfig {
    /// Payload value range.
    pub fn payload_range(&self) -> RangeInclusive<u32> {
        self.payload_min..=self.payload_max
    }

    /// Render `stamp` with the timestamp pattern.
    ///
    /// Patterns that need an offset (`%z`, `%Z`) parse but cannot render a
    /// local naive time; those surface here as `InvalidArgument`.
    pub fn format_timestamp(&self, stamp: &Timestamp) -> Result<String> {
        let mut text = String::new();
        write!(text, "{}", stamp.format(&self.timestamp_format)).map_err(|_| {
            Error::InvalidArgument(format!(
                "timestamp format {:?} cannot render a local time",
                self.timestamp_format
            ))
        })?;
        Ok(text)
    }

    /// Reject empty ranges and timestamp patterns that cannot render.
    pub fn validate(&self) -> Result<()> {
        if self.payload_min > self.payload_max {
            return Err(Error::InvalidArgument(format!(
                "payload range is empty: {}..={}",
                self.payload_min, self.payload_max
            )));
        }
        if self.timestamp_format.is_empty()
            || StrftimeItems::new(&self.timestamp_format).any(|item| matches!(item, Item::Error))
        {
            return Err(Error::InvalidArgument(format!(
                "invalid timestamp format: {:?}",
                self.timestamp_format
            )));
        }
        self.format_timestamp(&now())?;
        Ok(())
    }
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            payload_min: PAYLOAD_MIN,
            payload_max: PAYLOAD_MAX,
            timestamp_format: GENESIS_TIMESTAMP_FORMAT.to_string(),
        }
    }
}

/// One benchmark scenario as written in configuration.
///
/// Signed so that negative counts from a config file are reported rather
/// than rejected by the deserializer with a less useful message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    /// Number of records
    pub n: i64,
    /// Payload width
    pub k: i64,
}

impl ScenarioConfig {
    /// Create a scenario entry.
    pub fn new(n: i64, k: i64) -> Self {
        Self { n, k }
    }

    /// Validate into a chain shape.
    pub fn shape(&self) -> Result<ChainShape> {
        ChainShape::new(self.n, self.k)
    }
}

impl std::str::FromStr for ScenarioConfig {
    type Err = Error;

    /// Parse `NxK`, e.g. `200x10`.
    fn from_str(s: &str) -> Result<Self> {
        let (n, k) = s
            .split_once(['x', 'X'])
            .ok_or_else(|| Error::Config(format!("scenario must look like NxK, got {s:?}")))?;
        let parse = |part: &str| {
            part.trim()
                .parse::<i64>()
                .map_err(|e| Error::Config(format!("scenario {s:?}: {e}")))
        };
        Ok(Self::new(parse(n)?, parse(k)?))
    }
}

/// Report output format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Plain text
    #[default]
    Text,
    /// JSON
    Json,
}

/// Benchmark run configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    /// Scenarios, run in order
    pub scenarios: Vec<ScenarioConfig>,
    /// Builds averaged per scenario
    pub runs: u32,
    /// Output format
    pub format: ReportFormat,
    /// Construction constants
    pub chain: ChainConfig,
}

impl BenchConfig {
    /// Parse from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Validate every scenario and the chain constants.
    pub fn shapes(&self) -> Result<Vec<ChainShape>> {
        self.chain.validate()?;
        self.scenarios.iter().map(ScenarioConfig::shape).collect()
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            scenarios: vec![
                ScenarioConfig::new(3, 4),
                ScenarioConfig::new(10, 200),
                ScenarioConfig::new(200, 10),
            ],
            runs: 5,
            format: ReportFormat::Text,
            chain: ChainConfig::default(),
        }
    }
}
