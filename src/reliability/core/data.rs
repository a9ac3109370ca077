//! core::data — validated failure-time samples.
//!
//! Purpose
//! -------
//! Provide the immutable input type for every fit and analysis: an ordered
//! sequence of cumulative failure arrival times in hours since a baseline.
//! Validation happens once at construction; everything downstream can then
//! assume finite, non-negative, non-decreasing times.
//!
//! Key behaviors
//! -------------
//! - Reject NaN/infinite times, negative times, and ordering violations at
//!   construction ([`SampleError`]). Ordering is owned by upstream
//!   ingestion; this layer refuses to silently re-sort.
//! - Expose the observation horizon `T` (the last time, `0.0` when empty).
//! - Allow empty samples to exist; the analysis pipeline rejects them at
//!   its own boundary, and fitting separately requires `n ≥ 3`.
//!
//! Conventions
//! -----------
//! - Times are `f64` hours relative to an upstream-chosen baseline.
//! - The inner array is never exposed mutably; a sample is frozen for the
//!   lifetime of an analysis run.
use crate::reliability::errors::{SampleError, SampleResult};
use ndarray::Array1;

/// Ordered cumulative failure arrival times (hours since baseline).
///
/// Invariants, enforced at construction:
/// - every time is finite and `>= 0`,
/// - the sequence is non-decreasing.
#[derive(Debug, Clone, PartialEq)]
pub struct FailureSample {
    times: Array1<f64>,
}

impl FailureSample {
    /// Validate and freeze a sequence of failure times.
    ///
    /// # Errors
    /// - [`SampleError::NonFiniteTime`] for NaN or infinite entries.
    /// - [`SampleError::NegativeTime`] for entries below zero.
    /// - [`SampleError::UnsortedTimes`] at the first ordering violation.
    pub fn new(times: Array1<f64>) -> SampleResult<Self> {
        let mut previous = 0.0_f64;
        for (index, &value) in times.iter().enumerate() {
            if !value.is_finite() {
                return Err(SampleError::NonFiniteTime { index, value });
            }
            if value < 0.0 {
                return Err(SampleError::NegativeTime { index, value });
            }
            if index > 0 && value < previous {
                return Err(SampleError::UnsortedTimes { index, previous, value });
            }
            previous = value;
        }
        Ok(Self { times })
    }

    /// Convenience constructor from a plain `Vec<f64>`.
    pub fn from_vec(times: Vec<f64>) -> SampleResult<Self> {
        Self::new(Array1::from_vec(times))
    }

    /// The validated failure times, in order.
    pub fn times(&self) -> &Array1<f64> {
        &self.times
    }

    /// Number of observed failures `n`.
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// `true` when no failures were observed.
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Observation horizon `T`: the last (largest) time, `0.0` when empty.
    pub fn horizon(&self) -> f64 {
        match self.times.last() {
            Some(&t) => t,
            None => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Construction validation (finiteness, sign, ordering).
    // - Horizon and length accessors, including the empty sample.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // A well-formed sample constructs and reports its horizon and length.
    //
    // Given
    // -----
    // - times = [1, 2, 2, 5] (duplicates are legal: simultaneous failures).
    //
    // Expect
    // ------
    // - `Ok(sample)` with len 4 and horizon 5.
    fn valid_sample_constructs() {
        let sample = FailureSample::new(array![1.0, 2.0, 2.0, 5.0]).expect("valid sample");
        assert_eq!(sample.len(), 4);
        assert_eq!(sample.horizon(), 5.0);
        assert!(!sample.is_empty());
    }

    #[test]
    // Purpose
    // -------
    // The empty sample is constructible and reports a zero horizon.
    //
    // Given
    // -----
    // - An empty time vector.
    //
    // Expect
    // ------
    // - `Ok(sample)` with len 0, `is_empty()`, and horizon 0.
    fn empty_sample_is_legal_with_zero_horizon() {
        let sample = FailureSample::from_vec(vec![]).expect("empty sample is legal");
        assert!(sample.is_empty());
        assert_eq!(sample.horizon(), 0.0);
    }

    #[test]
    // Purpose
    // -------
    // Validation rejects NaN, negative, and out-of-order times with the
    // matching error variants.
    //
    // Given
    // -----
    // - Three malformed vectors, one per failure mode.
    //
    // Expect
    // ------
    // - `NonFiniteTime`, `NegativeTime`, and `UnsortedTimes` respectively,
    //   each carrying the offending index.
    fn malformed_samples_are_rejected() {
        match FailureSample::from_vec(vec![1.0, f64::NAN]).expect_err("NaN rejected") {
            SampleError::NonFiniteTime { index, .. } => assert_eq!(index, 1),
            other => panic!("Expected NonFiniteTime, got {other:?}"),
        }
        match FailureSample::from_vec(vec![-0.5, 1.0]).expect_err("negative rejected") {
            SampleError::NegativeTime { index, value } => {
                assert_eq!(index, 0);
                assert_eq!(value, -0.5);
            }
            other => panic!("Expected NegativeTime, got {other:?}"),
        }
        match FailureSample::from_vec(vec![2.0, 1.0]).expect_err("unsorted rejected") {
            SampleError::UnsortedTimes { index, previous, value } => {
                assert_eq!(index, 1);
                assert_eq!(previous, 2.0);
                assert_eq!(value, 1.0);
            }
            other => panic!("Expected UnsortedTimes, got {other:?}"),
        }
    }
}
