//! # Linear Schedule
//!
//! The control parameter (called temperature for scalar problems and
//! probability for route problems) starts at `start` and decays linearly
//! towards `end` over `max_iterations` steps.

use crate::error::{AnnealingError, Result};

/// A validated linear decay from `start` to `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearSchedule {
    start: f64,
    end: f64,
    max_iterations: usize,
}

impl LinearSchedule {
    /// Creates a new schedule.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if:
    /// - `max_iterations` is 0
    /// - `start` or `end` is not a finite, strictly positive number
    /// - `start` is lower than `end`
    pub fn new(start: f64, end: f64, max_iterations: usize) -> Result<Self> {
        if max_iterations == 0 {
            return Err(AnnealingError::Configuration(
                "Maximum iterations must be greater than 0".to_string(),
            ));
        }
        if !start.is_finite() || start <= 0.0 {
            return Err(AnnealingError::Configuration(format!(
                "Start parameter must be finite and positive, got {}",
                start
            )));
        }
        if !end.is_finite() || end <= 0.0 {
            return Err(AnnealingError::Configuration(format!(
                "End parameter must be finite and positive, got {}",
                end
            )));
        }
        if start < end {
            return Err(AnnealingError::Configuration(format!(
                "Start parameter ({}) must not be lower than end parameter ({})",
                start, end
            )));
        }
        Ok(Self {
            start,
            end,
            max_iterations,
        })
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// Control value at `iteration`: `start - (start - end) * iteration / max_iterations`.
    pub fn value(&self, iteration: usize) -> f64 {
        self.start - (self.start - self.end) * iteration as f64 / self.max_iterations as f64
    }

    /// True once `value` has dropped strictly below the end parameter.
    pub fn is_exhausted(&self, value: f64) -> bool {
        value < self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_decay() {
        let schedule = LinearSchedule::new(1000.0, 0.01, 10_000).unwrap();
        assert_eq!(schedule.value(0), 1000.0);
        assert!((schedule.value(5_000) - 500.005).abs() < 1e-9);
        assert!((schedule.value(10_000) - 0.01).abs() < 1e-9);
    }

    #[test]
    fn test_values_stay_above_end_within_run() {
        let schedule = LinearSchedule::new(1.0, 0.001, 100).unwrap();
        for i in 0..100 {
            let value = schedule.value(i);
            assert!(value > 0.0);
            assert!(!schedule.is_exhausted(value), "exhausted at {}", i);
        }
    }

    #[test]
    fn test_equal_start_and_end_is_flat() {
        let schedule = LinearSchedule::new(0.01, 0.01, 50).unwrap();
        assert_eq!(schedule.value(0), 0.01);
        assert_eq!(schedule.value(49), 0.01);
        assert!(!schedule.is_exhausted(schedule.value(49)));
    }

    #[test]
    fn test_exhaustion_is_strict() {
        let schedule = LinearSchedule::new(2.0, 1.0, 10).unwrap();
        assert!(!schedule.is_exhausted(1.0));
        assert!(schedule.is_exhausted(0.999));
    }

    #[test]
    fn test_rejects_zero_iterations() {
        match LinearSchedule::new(1.0, 0.1, 0) {
            Err(AnnealingError::Configuration(msg)) => {
                assert!(msg.contains("Maximum iterations"))
            }
            other => panic!("Expected Configuration error, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_non_positive_or_non_finite_parameters() {
        assert!(LinearSchedule::new(0.0, 0.0, 10).is_err());
        assert!(LinearSchedule::new(1.0, 0.0, 10).is_err());
        assert!(LinearSchedule::new(-1.0, 0.5, 10).is_err());
        assert!(LinearSchedule::new(f64::NAN, 0.5, 10).is_err());
        assert!(LinearSchedule::new(f64::INFINITY, 0.5, 10).is_err());
        assert!(LinearSchedule::new(1.0, f64::NAN, 10).is_err());
    }

    #[test]
    fn test_rejects_inverted_schedule() {
        match LinearSchedule::new(0.01, 1000.0, 10) {
            Err(AnnealingError::Configuration(msg)) => {
                assert!(msg.contains("must not be lower"))
            }
            other => panic!("Expected Configuration error, got {:?}", other),
        }
    }
}
