//! Running timing statistics.

use std::time::Duration;

/// Accumulates build durations for one scenario.
#[derive(Clone, Debug, Default)]
pub struct TimingStats {
    count: u64,
    sum_ms: f64,
    min_ms: Option<f64>,
    max_ms: Option<f64>,
}

impl TimingStats {
    /// Create empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one observation.
    pub fn observe(&mut self, elapsed: Duration) {
        let ms = elapsed.as_secs_f64() * 1000.0;
        self.count += 1;
        self.sum_ms += ms;
        self.min_ms = Some(self.min_ms.map_or(ms, |m| m.min(ms)));
        self.max_ms = Some(self.max_ms.map_or(ms, |m| m.max(ms)));
    }

    /// Number of observations.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Mean in milliseconds, 0 when empty.
    pub fn mean_ms(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.sum_ms / self.count as f64
        }
    }

    /// Fastest observation in milliseconds.
    pub fn min_ms(&self) -> f64 {
        self.min_ms.unwrap_or(0.0)
    }

    /// Slowest observation in milliseconds.
    pub fn max_ms(&self) -> f64 {
        self.max_ms.unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_stats() {
        let stats = TimingStats::new();
        assert_eq!(stats.count(), 0);
        assert_eq!(stats.mean_ms(), 0.0);
        assert_eq!(stats.min_ms(), 0.0);
        assert_eq!(stats.max_ms(), 0.0);
    }

    #[test]
    fn test_observe() {
        let mut stats = TimingStats::new();
        stats.observe(Duration::from_millis(2));
        stats.observe(Duration::from_millis(4));
        stats.observe(Duration::from_millis(6));

        assert_eq!(stats.count(), 3);
        assert!((stats.mean_ms() - 4.0).abs() < 1e-9);
        assert!((stats.min_ms() - 2.0).abs() < 1e-9);
        assert!((stats.max_ms() - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_sub_millisecond() {
        let mut stats = TimingStats::new();
        stats.observe(Duration::from_micros(250));
        assert!((stats.mean_ms() - 0.25).abs() < 1e-9);
    }
}
