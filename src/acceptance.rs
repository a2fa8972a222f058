//! # Acceptance Rule
//!
//! Metropolis criterion: a strictly better candidate is always accepted, a
//! worse or equal one is accepted with probability
//! `exp((current - candidate) / control)`. A candidate scored `+inf` is
//! infeasible and never accepted.

use crate::error::{AnnealingError, Result};
use crate::rng::RandomNumberGenerator;

/// Decides whether the search moves from a solution scoring `current` to one
/// scoring `candidate` at control value `control`.
///
/// No random number is drawn when the candidate is a strict improvement or
/// scores `+inf`.
///
/// # Errors
///
/// Returns `InvalidNumericValue` if `control` is not finite and strictly positive,
/// since it is the divisor of the exponent.
pub fn accept(
    current: f64,
    candidate: f64,
    control: f64,
    rng: &mut RandomNumberGenerator,
) -> Result<bool> {
    if !control.is_finite() || control <= 0.0 {
        return Err(AnnealingError::InvalidNumericValue(format!(
            "Control parameter must be finite and positive, got {}",
            control
        )));
    }

    if candidate < current {
        return Ok(true);
    }
    if candidate == f64::INFINITY {
        return Ok(false);
    }

    let probability = ((current - candidate) / control).exp();
    Ok(rng.unit() < probability)
}
