// File: crates/qae-utils/src/smoothing.rs
// Summary: Exponential moving average used to smooth optimisation traces.

use crate::error::{Result, UtilsError};

/// One-pole recursive low-pass filter. The first sample passes through
/// unchanged; afterwards `out = weight * previous_out + (1 - weight) * sample`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExponentialSmoother {
    weight: f64,
    last: Option<f64>,
}

impl ExponentialSmoother {
    /// `weight` is the retention of the previous output and must lie in `[0, 1]`.
    pub fn new(weight: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&weight) {
            return Err(UtilsError::InvalidWeight(weight));
        }
        Ok(Self { weight, last: None })
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Last smoothed value, `None` before the first sample.
    pub fn last(&self) -> Option<f64> {
        self.last
    }

    pub fn push(&mut self, sample: f64) -> f64 {
        let out = match self.last {
            // zero weight keeps no history, so a non-finite sample never leaks forward
            Some(prev) if self.weight > 0.0 => self.weight * prev + (1.0 - self.weight) * sample,
            _ => sample,
        };
        self.last = Some(out);
        out
    }

    pub fn reset(&mut self) {
        self.last = None;
    }
}

/// Smoothed copy of `sequence`, same length.
pub fn smooth(sequence: &[f64], weight: f64) -> Result<Vec<f64>> {
    if sequence.is_empty() {
        return Err(UtilsError::EmptyInput("sequence to smooth"));
    }
    let mut filter = ExponentialSmoother::new(weight)?;
    Ok(sequence.iter().map(|&x| filter.push(x)).collect())
}
