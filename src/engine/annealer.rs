use std::marker::PhantomData;

use tracing::{debug, info};

use super::options::{AnnealingOptions, LogLevel};
use crate::{
    acceptance,
    error::{AnnealingError, Result},
    objective::Objective,
    rng::RandomNumberGenerator,
    solution::Solution,
};

/// Represents the outcome of an annealing run.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnealingResult<S: Solution> {
    /// The best solution found.
    pub solution: S,
    /// The objective value of `solution`.
    pub objective: f64,
    /// Number of iterations performed, including the one that triggered an early exit.
    pub iterations: usize,
    /// Number of candidates that became the current solution.
    pub accepted_moves: usize,
    /// Number of accepted candidates that strictly improved on the current solution.
    pub improving_moves: usize,
    /// Control value used in the last iteration.
    pub final_control: f64,
    /// Best objective after each iteration; empty unless history recording is enabled.
    pub best_history: Vec<f64>,
}

/// Runs simulated annealing over any [`Solution`] type.
///
/// Each iteration draws a neighbor of the current solution, evaluates both
/// the neighbor and the current solution, and moves to the neighbor according
/// to the Metropolis rule at the current control value. The best solution seen
/// is tracked separately and never regresses.
#[derive(Debug, Clone)]
pub struct Annealer<S, O>
where
    S: Solution,
    O: Objective<S>,
{
    options: AnnealingOptions,
    objective: O,
    _marker: PhantomData<S>,
}

impl<S, O> Annealer<S, O>
where
    S: Solution,
    O: Objective<S>,
{
    /// Creates a new `Annealer` minimizing `objective` with the given options.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if the options are invalid (see
    /// [`AnnealingOptions::validate`]).
    pub fn new(options: AnnealingOptions, objective: O) -> Result<Self> {
        options.validate()?;
        Ok(Self {
            options,
            objective,
            _marker: PhantomData,
        })
    }

    pub fn options(&self) -> &AnnealingOptions {
        &self.options
    }

    pub fn objective(&self) -> &O {
        &self.objective
    }

    /// Anneals from `start` and returns the best solution found.
    ///
    /// # Arguments
    ///
    /// * `start` - The initial solution. It is also the initial best solution,
    ///   so the returned objective never exceeds the objective of `start`.
    /// * `rng` - The random source for neighbor generation and acceptance draws.
    ///
    /// # Errors
    ///
    /// This method will return an error if:
    /// - The options are invalid
    /// - The objective returns NaN or `-inf`
    ///
    /// A candidate scored `+inf` is never accepted, so an objective can mark
    /// points outside its domain that way.
    ///
    /// # Objective calls
    ///
    /// The current solution is re-evaluated every iteration rather than cached,
    /// so a run of `n` iterations calls the objective `1 + 2 * n` times.
    pub fn solve(&self, start: S, rng: &mut RandomNumberGenerator) -> Result<AnnealingResult<S>> {
        let schedule = self.options.schedule()?;
        let log_level = self.options.get_log_level();
        let record_history = self.options.get_record_history();

        let mut current = start;
        let mut best = current.clone();
        let mut best_objective = self.score(&best)?;

        let mut iterations = 0;
        let mut accepted_moves = 0;
        let mut improving_moves = 0;
        let mut final_control = schedule.start();
        let mut best_history = Vec::new();
        if record_history {
            best_history.reserve(schedule.max_iterations());
        }

        if log_level != LogLevel::None {
            info!(
                start = schedule.start(),
                end = schedule.end(),
                max_iterations = schedule.max_iterations(),
                initial_objective = best_objective,
                "starting annealing run"
            );
        }

        for iteration in 0..schedule.max_iterations() {
            let control = schedule.value(iteration);
            final_control = control;
            iterations += 1;

            let candidate = current.neighbor(rng);
            let candidate_objective = self.score(&candidate)?;
            let current_objective = self.score(&current)?;

            if acceptance::accept(current_objective, candidate_objective, control, rng)? {
                accepted_moves += 1;
                if candidate_objective < current_objective {
                    improving_moves += 1;
                }

                if candidate_objective < best_objective {
                    best = candidate.clone();
                    best_objective = candidate_objective;
                    if log_level == LogLevel::Verbose {
                        debug!(iteration, control, best_objective, "new best solution");
                    }
                }

                current = candidate;
            }

            if record_history {
                best_history.push(best_objective);
            }

            if schedule.is_exhausted(control) {
                if log_level == LogLevel::Verbose {
                    debug!(iteration, control, "control parameter below end, stopping");
                }
                break;
            }
        }

        if log_level != LogLevel::None {
            info!(
                iterations = iterations,
                accepted = accepted_moves,
                improving = improving_moves,
                best_objective = best_objective,
                "annealing run finished"
            );
        }

        Ok(AnnealingResult {
            solution: best,
            objective: best_objective,
            iterations,
            accepted_moves,
            improving_moves,
            final_control,
            best_history,
        })
    }

    /// Evaluates `solution`. `+inf` marks an infeasible solution and is kept;
    /// NaN and `-inf` fail the run.
    fn score(&self, solution: &S) -> Result<f64> {
        let value = self.objective.evaluate(solution);
        if value.is_nan() || value == f64::NEG_INFINITY {
            return Err(AnnealingError::InvalidNumericValue(format!(
                "Objective value must not be NaN or -inf, got {}",
                value
            )));
        }
        Ok(value)
    }
}
