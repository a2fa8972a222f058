//! # AnnealingOptions
//!
//! The `AnnealingOptions` struct represents the configuration of a single
//! annealing run: the control-parameter schedule, the iteration budget and
//! how much the run should log.
//!
//! ## Example
//!
//! ```rust
//! use annealing::engine::options::{AnnealingOptions, LogLevel};
//!
//! // Create a new AnnealingOptions instance with custom parameters
//! let custom_options = AnnealingOptions::new(1000.0, 0.01, 10_000);
//!
//! // Or use the builder
//! let built = AnnealingOptions::builder()
//!     .start_parameter(1.0)
//!     .end_parameter(0.001)
//!     .max_iterations(5_000)
//!     .log_level(LogLevel::Minimal)
//!     .build();
//!
//! assert!(custom_options.validate().is_ok());
//! assert!(built.validate().is_ok());
//! ```
//!
//! ## Structs
//!
//! ### `AnnealingOptions`
//!
//! #### Fields
//!
//! - `start_parameter`: Initial control value (temperature or probability).
//! - `end_parameter`: Control value below which the run stops.
//! - `max_iterations`: Upper bound on the number of iterations.
//! - `log_level`: How much the run reports through `tracing`.
//! - `record_history`: Whether the best objective is recorded after every iteration.
//!
//! ### `LogLevel`
//!
//! #### Variants
//!
//! - `Verbose`: Logs run boundaries, every new best solution and the early exit.
//! - `Minimal`: Logs the start and the end of the run.
//! - `None`: Disables logging.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::schedule::LinearSchedule;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LogLevel {
    Verbose,
    Minimal,
    None,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnnealingOptions {
    start_parameter: f64,
    end_parameter: f64,
    max_iterations: usize,
    log_level: LogLevel,
    /// Record the best objective value after every iteration
    record_history: bool,
}

impl AnnealingOptions {
    pub fn new(start_parameter: f64, end_parameter: f64, max_iterations: usize) -> Self {
        Self {
            start_parameter,
            end_parameter,
            max_iterations,
            log_level: LogLevel::None,
            record_history: false,
        }
    }

    pub fn get_start_parameter(&self) -> f64 {
        self.start_parameter
    }

    pub fn get_end_parameter(&self) -> f64 {
        self.end_parameter
    }

    pub fn get_max_iterations(&self) -> usize {
        self.max_iterations
    }

    pub fn get_log_level(&self) -> LogLevel {
        self.log_level
    }

    pub fn get_record_history(&self) -> bool {
        self.record_history
    }

    pub fn set_start_parameter(&mut self, value: f64) {
        self.start_parameter = value;
    }

    pub fn set_end_parameter(&mut self, value: f64) {
        self.end_parameter = value;
    }

    pub fn set_max_iterations(&mut self, value: usize) {
        self.max_iterations = value;
    }

    pub fn set_log_level(&mut self, log_level: LogLevel) {
        self.log_level = log_level;
    }

    pub fn set_record_history(&mut self, record: bool) {
        self.record_history = record;
    }

    /// Builds the validated control-parameter schedule for these options.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error under the same conditions as
    /// [`LinearSchedule::new`].
    pub fn schedule(&self) -> Result<LinearSchedule> {
        LinearSchedule::new(
            self.start_parameter,
            self.end_parameter,
            self.max_iterations,
        )
    }

    /// Checks the options without running anything.
    pub fn validate(&self) -> Result<()> {
        self.schedule().map(|_| ())
    }

    /// Returns a builder for creating an `AnnealingOptions` instance.
    pub fn builder() -> AnnealingOptionsBuilder {
        AnnealingOptionsBuilder::default()
    }
}

impl Default for AnnealingOptions {
    fn default() -> Self {
        Self {
            start_parameter: 1000.0,
            end_parameter: 0.01,
            max_iterations: 10_000,
            log_level: LogLevel::None,
            record_history: false,
        }
    }
}

/// Builder for `AnnealingOptions`.
///
/// Unset fields fall back to `AnnealingOptions::default()`.
#[derive(Debug, Clone, Default)]
pub struct AnnealingOptionsBuilder {
    start_parameter: Option<f64>,
    end_parameter: Option<f64>,
    max_iterations: Option<usize>,
    log_level: Option<LogLevel>,
    record_history: Option<bool>,
}

impl AnnealingOptionsBuilder {
    pub fn start_parameter(mut self, value: f64) -> Self {
        self.start_parameter = Some(value);
        self
    }

    pub fn end_parameter(mut self, value: f64) -> Self {
        self.end_parameter = Some(value);
        self
    }

    pub fn max_iterations(mut self, value: usize) -> Self {
        self.max_iterations = Some(value);
        self
    }

    pub fn log_level(mut self, value: LogLevel) -> Self {
        self.log_level = Some(value);
        self
    }

    pub fn record_history(mut self, value: bool) -> Self {
        self.record_history = Some(value);
        self
    }

    pub fn build(self) -> AnnealingOptions {
        let default = AnnealingOptions::default();
        AnnealingOptions {
            start_parameter: self.start_parameter.unwrap_or(default.start_parameter),
            end_parameter: self.end_parameter.unwrap_or(default.end_parameter),
            max_iterations: self.max_iterations.unwrap_or(default.max_iterations),
            log_level: self.log_level.unwrap_or(default.log_level),
            record_history: self.record_history.unwrap_or(default.record_history),
        }
    }
}
