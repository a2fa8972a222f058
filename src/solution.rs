//! # Solution Trait
//!
//! The `Solution` trait defines the interface for types the annealing engine
//! can search over. A solution only has to know how to produce a neighbor of
//! itself; the engine takes care of the schedule, acceptance and best-found
//! tracking.
//!
//! ## Implementing the Trait
//!
//! ```rust
//! use annealing::rng::RandomNumberGenerator;
//! use annealing::solution::Solution;
//!
//! #[derive(Clone, Debug)]
//! struct Bits(Vec<bool>);
//!
//! impl Solution for Bits {
//!     fn neighbor(&self, rng: &mut RandomNumberGenerator) -> Self {
//!         let mut next = self.clone();
//!         if !next.0.is_empty() {
//!             let i = rng.index(0, next.0.len());
//!             next.0[i] = !next.0[i];
//!         }
//!         next
//!     }
//! }
//! ```
//!
//! Implementations for `f64` and [`Route`](crate::route::Route) ship with the crate.

use std::fmt::Debug;

use crate::rng::RandomNumberGenerator;

/// Trait for candidate solutions explored by the annealing engine.
///
/// `Clone` is the copy operation: the engine keeps the current and the best
/// solution in separate slots and moves values between them by cloning, so
/// mutating one never affects the other.
pub trait Solution: Clone + Debug + Send + Sync {
    /// Returns a new candidate derived from `self` by a small random perturbation.
    ///
    /// `self` is left untouched.
    fn neighbor(&self, rng: &mut RandomNumberGenerator) -> Self;
}
