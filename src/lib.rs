pub mod acceptance;
pub mod engine;
pub mod error;
pub mod objective;
pub mod rng;
pub mod route;
pub mod scalar;
pub mod schedule;
pub mod solution;

// Re-export commonly used types for convenience
pub use engine::{Annealer, AnnealingOptions, AnnealingResult, LogLevel};
pub use error::{AnnealingError, Result};
pub use objective::Objective;
pub use rng::RandomNumberGenerator;
pub use route::{route_length, Route, RouteAnnealer, Waypoint};
pub use scalar::ScalarAnnealer;
pub use solution::Solution;
