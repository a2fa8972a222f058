//! # Scalar Annealing
//!
//! Annealing over a single real number. A neighbor of `x` is `x + offset` with
//! `offset` drawn uniformly from `[-1, 1)`. The search space is unbounded; an
//! objective that only makes sense on an interval has to handle values outside
//! it itself.
//!
//! ## Example
//!
//! ```rust
//! use annealing::rng::RandomNumberGenerator;
//! use annealing::scalar::ScalarAnnealer;
//!
//! let annealer = ScalarAnnealer::new(1000.0, 0.01, 100_000).unwrap();
//! let mut rng = RandomNumberGenerator::from_seed(42);
//!
//! let x = annealer.solve(|x: &f64| x * x, 20.0, &mut rng).unwrap();
//! assert!(x * x < 1.0);
//! ```

use crate::{
    engine::{Annealer, AnnealingOptions, AnnealingResult, LogLevel},
    error::Result,
    objective::Objective,
    rng::RandomNumberGenerator,
    schedule::LinearSchedule,
    solution::Solution,
};

impl Solution for f64 {
    fn neighbor(&self, rng: &mut RandomNumberGenerator) -> Self {
        self + rng.uniform(-1.0, 1.0)
    }
}

/// Simulated annealing over `f64`, driven by a linearly decaying temperature.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarAnnealer {
    start_temperature: f64,
    end_temperature: f64,
    max_iterations: usize,
    log_level: LogLevel,
}

impl ScalarAnnealer {
    /// Creates a new scalar annealer.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if:
    /// - `max_iterations` is 0
    /// - either temperature is not finite and positive
    /// - `start_temperature` is lower than `end_temperature`
    pub fn new(
        start_temperature: f64,
        end_temperature: f64,
        max_iterations: usize,
    ) -> Result<Self> {
        LinearSchedule::new(start_temperature, end_temperature, max_iterations)?;
        Ok(Self {
            start_temperature,
            end_temperature,
            max_iterations,
            log_level: LogLevel::None,
        })
    }

    pub fn with_log_level(mut self, log_level: LogLevel) -> Self {
        self.log_level = log_level;
        self
    }

    pub fn start_temperature(&self) -> f64 {
        self.start_temperature
    }

    pub fn end_temperature(&self) -> f64 {
        self.end_temperature
    }

    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    pub fn options(&self) -> AnnealingOptions {
        AnnealingOptions::builder()
            .start_parameter(self.start_temperature)
            .end_parameter(self.end_temperature)
            .max_iterations(self.max_iterations)
            .log_level(self.log_level)
            .build()
    }

    /// Runs the annealer and returns the full run result.
    pub fn anneal<O>(
        &self,
        objective: O,
        start: f64,
        rng: &mut RandomNumberGenerator,
    ) -> Result<AnnealingResult<f64>>
    where
        O: Objective<f64>,
    {
        Annealer::new(self.options(), objective)?.solve(start, rng)
    }

    /// Runs the annealer and returns the best value found.
    pub fn solve<O>(&self, objective: O, start: f64, rng: &mut RandomNumberGenerator) -> Result<f64>
    where
        O: Objective<f64>,
    {
        self.anneal(objective, start, rng).map(|result| result.solution)
    }
}
