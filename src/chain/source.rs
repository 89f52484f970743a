//! Injectable inputs consumed by the builder: payload randomness and the clock.

use crate::core::{now, Result, Timestamp};
use rand::Rng;
use std::ops::RangeInclusive;

/// Wall-clock provider for the genesis linkage.
pub trait Clock {
    /// Current local date-time.
    fn now(&self) -> Result<Timestamp>;
}

/// Reads the local system clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Result<Timestamp> {
        Ok(now())
    }
}

/// Always reports the same instant.
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub Timestamp);

impl Clock for FixedClock {
    fn now(&self) -> Result<Timestamp> {
        Ok(self.0)
    }
}

/// Source of payload integers.
pub trait PayloadSource {
    /// Draw one value from `range`.
    fn next_value(&mut self, range: &RangeInclusive<u32>) -> u32;
}

impl<R: Rng + ?Sized> PayloadSource for R {
    fn next_value(&mut self, range: &RangeInclusive<u32>) -> u32 {
        self.gen_range(range.clone())
    }
}

/// Replays a fixed sequence of values, cycling when exhausted.
///
/// Values are clamped into the requested range, so payloads stay within
/// bounds whatever the sequence holds.
#[derive(Clone, Debug)]
pub struct SequenceSource {
    values: Vec<u32>,
    cursor: usize,
}

impl SequenceSource {
    /// Create a source over `values`. An empty sequence yields the range start.
    pub fn new(values: Vec<u32>) -> Self {
        Self { values, cursor: 0 }
    }
}

impl PayloadSource for SequenceSource {
    fn next_value(&mut self, range: &RangeInclusive<u32>) -> u32 {
        let (low, high) = (*range.start(), *range.end());
        if self.values.is_empty() {
            return low;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value.clamp(low, high)
    }
}
