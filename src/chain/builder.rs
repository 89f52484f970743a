//! Sequential chain construction.
//!
//! Record `i` is linked to the signature of record `i - 1`, so the loop
//! below carries exactly one value between iterations: the previous
//! signature.

use crate::chain::record::Record;
use crate::chain::source::{Clock, PayloadSource, SystemClock};
use crate::chain::Chain;
use crate::config::ChainConfig;
use crate::core::{Error, Hash256, Result};
use crate::crypto::sha256_str;
use tracing::debug;

/// Validated `(n, k)` pair: record count and payload width.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChainShape {
    /// Number of records
    pub records: usize,
    /// Integers per payload
    pub width: usize,
}

impl ChainShape {
    /// Validate signed inputs, failing fast on negatives.
    pub fn new(n: i64, k: i64) -> Result<Self> {
        let records = usize::try_from(n)
            .map_err(|_| Error::InvalidArgument(format!("n must not be negative, got {n}")))?;
        let width = usize::try_from(k)
            .map_err(|_| Error::InvalidArgument(format!("k must not be negative, got {k}")))?;
        Ok(Self { records, width })
    }
}

impl std::fmt::Display for ChainShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "n={}, k={}", self.records, self.width)
    }
}

/// Builds hash-linked chains.
#[derive(Clone, Debug)]
pub struct ChainBuilder<C = SystemClock> {
    config: ChainConfig,
    clock: C,
}

impl ChainBuilder<SystemClock> {
    /// Builder reading the local system clock.
    pub fn new() -> Self {
        Self {
            config: ChainConfig::default(),
            clock: SystemClock,
        }
    }
}

impl Default for ChainBuilder<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> ChainBuilder<C> {
    /// Builder with default constants and the given clock.
    pub fn with_clock(clock: C) -> Self {
        Self {
            config: ChainConfig::default(),
            clock,
        }
    }

    /// Builder with custom constants.
    pub fn with_config(config: ChainConfig, clock: C) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, clock })
    }

    /// Construction constants in use.
    pub fn config(&self) -> &ChainConfig {
        &self.config
    }

    /// Build a chain of `n` records, each carrying `k` payload integers.
    ///
    /// `n == 0` returns an empty chain without reading the clock. Any clock
    /// failure aborts the build; no partial chain is returned.
    pub fn build<P>(&self, n: usize, k: usize, source: &mut P) -> Result<Chain>
    where
        P: PayloadSource + ?Sized,
    {
        debug!(n, k, "building chain");

        let range = self.config.payload_range();
        let mut head: Option<Box<Record>> = None;
        let mut tail = &mut head;
        let mut previous: Option<Hash256> = None;

        for _ in 0..n {
            let mut payload = Vec::with_capacity(k);
            for _ in 0..k {
                payload.push(source.next_value(&range));
            }

            let linkage = match previous {
                Some(signature) => signature,
                None => self.genesis_linkage()?,
            };

            let record = Record::new(linkage, payload);
            previous = Some(*record.signature());
            tail = &mut tail.insert(Box::new(record)).next;
        }

        debug!(records = n, "chain built");
        Ok(Chain::from_parts(head, n))
    }

    /// Build from a validated shape.
    pub fn build_shape<P>(&self, shape: ChainShape, source: &mut P) -> Result<Chain>
    where
        P: PayloadSource + ?Sized,
    {
        self.build(shape.records, shape.width, source)
    }

    /// SHA-256 of the current timestamp rendered with the configured format.
    fn genesis_linkage(&self) -> Result<Hash256> {
        let stamp = self.clock.now()?;
        let text = self.config.format_timestamp(&stamp)?;
        Ok(sha256_str(&text))
    }
}

/// Build with the system clock and the thread-local RNG.
pub fn build(n: usize, k: usize) -> Result<Chain> {
    ChainBuilder::new().build(n, k, &mut rand::thread_rng())
}
