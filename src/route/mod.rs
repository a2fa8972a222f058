//! # Route Annealing
//!
//! Annealing over orderings of stops, the traveling salesman case. A neighbor
//! of a route is the same route with two stops swapped. The first stop is the
//! fixed starting point and never moves.
//!
//! ## Example
//!
//! ```rust
//! use annealing::rng::RandomNumberGenerator;
//! use annealing::route::{route_length, RouteAnnealer, Waypoint};
//!
//! let stops = vec![
//!     Waypoint::new(1, 0.0, 0.0),
//!     Waypoint::new(2, 6.0, 1.0),
//!     Waypoint::new(3, 1.0, 4.0),
//!     Waypoint::new(4, 4.0, 2.0),
//!     Waypoint::new(5, 3.0, 4.0),
//! ];
//! let initial = route_length(&stops);
//!
//! let annealer = RouteAnnealer::new(1.0, 0.001, 10_000).unwrap();
//! let mut rng = RandomNumberGenerator::from_seed(1);
//! let best = annealer.solve(route_length, stops, &mut rng).unwrap();
//!
//! assert_eq!(best[0].id, 1);
//! assert!(route_length(&best) <= initial);
//! ```

pub mod waypoint;

use std::fmt::Debug;

use crate::{
    engine::{Annealer, AnnealingOptions, AnnealingResult, LogLevel},
    error::Result,
    objective::Objective,
    rng::RandomNumberGenerator,
    schedule::LinearSchedule,
    solution::Solution,
};

pub use waypoint::{route_length, Waypoint};

/// An ordering of stops whose first element is pinned.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Route<T> {
    stops: Vec<T>,
}

impl<T> Route<T> {
    pub fn new(stops: Vec<T>) -> Self {
        Self { stops }
    }

    pub fn stops(&self) -> &[T] {
        &self.stops
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn into_stops(self) -> Vec<T> {
        self.stops
    }
}

impl<T> From<Vec<T>> for Route<T> {
    fn from(stops: Vec<T>) -> Self {
        Self::new(stops)
    }
}

impl<T> AsRef<[T]> for Route<T> {
    fn as_ref(&self) -> &[T] {
        &self.stops
    }
}

impl<T> Solution for Route<T>
where
    T: Clone + Debug + Send + Sync,
{
    /// Swaps two distinct stops drawn uniformly from positions `1..len`.
    ///
    /// Routes shorter than three stops have no such pair and are returned
    /// unchanged without consuming any randomness.
    fn neighbor(&self, rng: &mut RandomNumberGenerator) -> Self {
        let mut next = self.clone();
        let len = next.stops.len();
        if len < 3 {
            return next;
        }

        let first = rng.index(1, len);
        let mut second = rng.index(1, len);
        while second == first {
            second = rng.index(1, len);
        }

        next.stops.swap(first, second);
        next
    }
}

/// Adapts an objective over stop slices to one over [`Route`].
#[derive(Debug, Clone)]
struct RouteObjective<O>(O);

impl<T, O> Objective<Route<T>> for RouteObjective<O>
where
    O: Objective<[T]>,
{
    fn evaluate(&self, route: &Route<T>) -> f64 {
        self.0.evaluate(route.stops())
    }
}

/// Simulated annealing over stop orderings, driven by a linearly decaying
/// acceptance probability parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteAnnealer {
    start_probability: f64,
    end_probability: f64,
    max_iterations: usize,
    log_level: LogLevel,
}

impl RouteAnnealer {
    /// Creates a new route annealer.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if:
    /// - `max_iterations` is 0
    /// - either probability parameter is not finite and positive
    /// - `start_probability` is lower than `end_probability`
    pub fn new(
        start_probability: f64,
        end_probability: f64,
        max_iterations: usize,
    ) -> Result<Self> {
        LinearSchedule::new(start_probability, end_probability, max_iterations)?;
        Ok(Self {
            start_probability,
            end_probability,
            max_iterations,
            log_level: LogLevel::None,
        })
    }

    pub fn with_log_level(mut self, log_level: LogLevel) -> Self {
        self.log_level = log_level;
        self
    }

    pub fn start_probability(&self) -> f64 {
        self.start_probability
    }

    pub fn end_probability(&self) -> f64 {
        self.end_probability
    }

    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    pub fn options(&self) -> AnnealingOptions {
        AnnealingOptions::builder()
            .start_parameter(self.start_probability)
            .end_parameter(self.end_probability)
            .max_iterations(self.max_iterations)
            .log_level(self.log_level)
            .build()
    }

    /// Runs the annealer and returns the full run result.
    ///
    /// `objective` scores a route given as a slice of stops in visiting order.
    pub fn anneal<T, O>(
        &self,
        objective: O,
        start: Vec<T>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<AnnealingResult<Route<T>>>
    where
        T: Clone + Debug + Send + Sync,
        O: Objective<[T]>,
    {
        let annealer = Annealer::new(self.options(), RouteObjective(objective))?;
        annealer.solve(Route::new(start), rng)
    }

    /// Runs the annealer and returns the best ordering found.
    pub fn solve<T, O>(
        &self,
        objective: O,
        start: Vec<T>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<T>>
    where
        T: Clone + Debug + Send + Sync,
        O: Objective<[T]>,
    {
        self.anneal(objective, start, rng)
            .map(|result| result.solution.into_stops())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnnealingError;

    fn sorted(mut values: Vec<u32>) -> Vec<u32> {
        values.sort_unstable();
        values
    }

    #[test]
    fn test_neighbor_swaps_exactly_two_non_first_positions() {
        let route = Route::new(vec![10, 11, 12, 13, 14, 15]);
        let mut rng = RandomNumberGenerator::from_seed(21);

        for _ in 0..500 {
            let next = route.neighbor(&mut rng);
            assert_eq!(next.stops()[0], 10);
            let moved = route
                .stops()
                .iter()
                .zip(next.stops())
                .filter(|(a, b)| a != b)
                .count();
            assert_eq!(moved, 2);
            assert_eq!(sorted(next.clone().into_stops()), route.stops().to_vec());
        }
    }

    #[test]
    fn test_neighbor_leaves_original_untouched() {
        let route = Route::new(vec![1, 2, 3, 4]);
        let mut rng = RandomNumberGenerator::from_seed(3);
        let _ = route.neighbor(&mut rng);
        assert_eq!(route.stops(), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_three_stops_always_swaps_the_tail() {
        let route = Route::new(vec![1, 2, 3]);
        let mut rng = RandomNumberGenerator::from_seed(5);
        for _ in 0..50 {
            assert_eq!(route.neighbor(&mut rng).stops(), &[1, 3, 2]);
        }
    }

    #[test]
    fn test_short_routes_are_returned_unchanged() {
        let mut rng = RandomNumberGenerator::from_seed(6);
        let mut untouched = rng.clone();

        let two = Route::new(vec![1, 2]);
        assert_eq!(two.neighbor(&mut rng), two);
        let one = Route::new(vec![1]);
        assert_eq!(one.neighbor(&mut rng), one);
        let empty: Route<u32> = Route::default();
        assert_eq!(empty.neighbor(&mut rng), empty);

        assert_eq!(rng.unit(), untouched.unit());
    }

    #[test]
    fn test_new_validates() {
        assert!(matches!(
            RouteAnnealer::new(1.0, 0.001, 0),
            Err(AnnealingError::Configuration(_))
        ));
        assert!(RouteAnnealer::new(1.0, -0.1, 10).is_err());
        assert!(RouteAnnealer::new(0.001, 1.0, 10).is_err());
    }

    #[test]
    fn test_route_objective_sees_stops_in_order() {
        let objective = RouteObjective(|stops: &[u32]| stops[1] as f64);
        assert_eq!(objective.evaluate(&Route::new(vec![0, 7, 3])), 7.0);
    }

    #[test]
    fn test_sorts_numbers_by_adjacent_gaps() {
        let gaps = |stops: &[i32]| {
            stops
                .windows(2)
                .map(|w| (w[1] - w[0]).abs() as f64)
                .sum::<f64>()
        };
        let annealer = RouteAnnealer::new(1.0, 0.001, 10_000).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(44);

        let result = annealer.anneal(gaps, vec![0, 4, 2, 5, 1, 3], &mut rng).unwrap();

        assert_eq!(result.solution.stops(), &[0, 1, 2, 3, 4, 5]);
        assert_eq!(result.objective, 5.0);
    }
}
