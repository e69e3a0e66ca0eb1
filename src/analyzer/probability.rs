//! Unboxing probability math.
//!
//! Geometric-series model for repeated independent trials with a fixed
//! per-trial success probability.

use crate::types::AnalyzerError;

/// Fixed per-trial drop model.
///
/// Holds the probability `p` in (0, 1) that a single randomized trial
/// yields the target outcome. Trials are independent.
#[derive(Debug, Clone, Copy)]
pub struct DropModel {
    rate: f64,
}

impl DropModel {
    pub fn new(rate: f64) -> Self {
        Self { rate }
    }

    /// Per-trial drop rate as a fraction.
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Per-trial drop rate as a percentage.
    pub fn rate_pct(&self) -> f64 {
        self.rate * 100.0
    }

    /// Probability of at least one success in `trials` trials, as a
    /// percentage: `(1 - (1 - p)^trials) * 100`.
    ///
    /// Exactly 0.0 at zero trials and non-decreasing in `trials`. The
    /// true value stays below 100 for any finite trial count, but once
    /// `(1 - p)^trials` underflows below f64 epsilon (around 14,000
    /// trials at the default rate) the result saturates at exactly
    /// 100.0. Callers must not rely on strict-below-100 at large
    /// trial counts.
    pub fn at_least_one_pct(&self, trials: u64) -> f64 {
        (1.0 - (1.0 - self.rate).powf(trials as f64)) * 100.0
    }

    /// Smallest number of trials whose cumulative probability reaches
    /// `target_pct`.
    ///
    /// `target_pct` must lie strictly inside (0, 100): 0 is rejected by
    /// contract, and 100 is unreachable in finite trials so it is
    /// rejected rather than searched for. The linear search terminates
    /// for every valid target because the curve increases toward 100
    /// (and saturates there once rounding exhausts the gap).
    pub fn trials_for_pct(&self, target_pct: f64) -> Result<u64, AnalyzerError> {
        if !(target_pct > 0.0 && target_pct < 100.0) {
            return Err(AnalyzerError::InvalidArgument(format!(
                "Target probability must be between 0 and 100 (exclusive), got {target_pct}"
            )));
        }

        let mut trials = 0u64;
        loop {
            if self.at_least_one_pct(trials) >= target_pct {
                return Ok(trials);
            }
            trials += 1;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
