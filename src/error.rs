//! # Error Types
//!
//! This module defines the error type returned by every fallible operation in
//! the crate. Failures are narrow: either the run was configured badly, or the
//! objective produced a value the annealing loop cannot work with.
//!
//! ## Example
//!
//! ```rust
//! use annealing::error::{AnnealingError, Result};
//! use annealing::scalar::ScalarAnnealer;
//!
//! fn build(max_iterations: usize) -> Result<ScalarAnnealer> {
//!     ScalarAnnealer::new(1000.0, 0.01, max_iterations)
//! }
//!
//! match build(0) {
//!     Err(AnnealingError::Configuration(msg)) => println!("rejected: {}", msg),
//!     _ => unreachable!(),
//! }
//! ```

use thiserror::Error;

/// Represents errors that can occur while configuring or running an annealer.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnnealingError {
    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when an objective value is NaN or negative infinity, or
    /// when a control value is not finite and positive.
    #[error("Invalid numeric value: {0}")]
    InvalidNumericValue(String),
}

/// A specialized Result type for annealing operations.
pub type Result<T> = std::result::Result<T, AnnealingError>;
