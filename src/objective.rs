//! # Objective
//!
//! The cost function the annealer minimizes. Any `Fn(&S) -> f64` closure is an
//! objective, so most callers never name this trait.

use std::cell::Cell;

/// A pure function from a candidate solution to a real-valued cost.
///
/// Lower is better. The engine assumes that evaluating the same input twice
/// yields the same value and has no side effects.
pub trait Objective<S: ?Sized> {
    fn evaluate(&self, solution: &S) -> f64;
}

impl<S, F> Objective<S> for F
where
    S: ?Sized,
    F: Fn(&S) -> f64,
{
    fn evaluate(&self, solution: &S) -> f64 {
        self(solution)
    }
}

/// Wraps an objective and counts how many times it has been evaluated.
///
/// ```rust
/// use annealing::objective::{CountingObjective, Objective};
///
/// let square = CountingObjective::new(|x: &f64| x * x);
/// assert_eq!(square.evaluate(&3.0), 9.0);
/// assert_eq!(square.calls(), 1);
/// ```
#[derive(Debug)]
pub struct CountingObjective<O> {
    inner: O,
    calls: Cell<usize>,
}

impl<O> CountingObjective<O> {
    pub fn new(inner: O) -> Self {
        Self {
            inner,
            calls: Cell::new(0),
        }
    }

    /// Number of evaluations performed so far.
    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    pub fn into_inner(self) -> O {
        self.inner
    }
}

impl<S, O> Objective<S> for CountingObjective<O>
where
    S: ?Sized,
    O: Objective<S>,
{
    fn evaluate(&self, solution: &S) -> f64 {
        self.calls.set(self.calls.get() + 1);
        self.inner.evaluate(solution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Distance {
        target: f64,
    }

    impl Objective<f64> for Distance {
        fn evaluate(&self, x: &f64) -> f64 {
            (x - self.target).abs()
        }
    }

    #[test]
    fn test_closure_is_objective() {
        let f = |x: &f64| x * 2.0;
        assert_eq!(f.evaluate(&4.0), 8.0);
    }

    #[test]
    fn test_slice_objective() {
        let sum = |xs: &[i32]| xs.iter().sum::<i32>() as f64;
        assert_eq!(sum.evaluate(&[1, 2, 3][..]), 6.0);
    }

    #[test]
    fn test_counting_objective_counts_every_call() {
        let counted = CountingObjective::new(Distance { target: 2.0 });
        assert_eq!(counted.calls(), 0);
        assert_eq!(counted.evaluate(&5.0), 3.0);
        assert_eq!(counted.evaluate(&1.0), 1.0);
        assert_eq!(counted.calls(), 2);
        assert_eq!(counted.into_inner().target, 2.0);
    }
}
