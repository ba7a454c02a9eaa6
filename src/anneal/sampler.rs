//! Rejection sampling on the feasible region.
//!
//! Both the initial draw and the per-iteration proposal sample the part
//! of the simplex with expected value at or above 4 by drawing,
//! projecting, and retrying infeasible results. Rejection here is part of
//! the algorithm (sampling a constrained region), not error recovery; the
//! retry cap only turns a pathological parameter choice into a reportable
//! error instead of a hang.

use crate::error::AnnealError;
use crate::simplex::{Distribution, OUTCOMES};
use rand::Rng;

/// Draws a feasible starting distribution: six independent uniforms in
/// [0, 1), projected onto the simplex, redrawn wholesale until feasible.
pub fn initial<R: Rng>(rng: &mut R, max_rejections: usize) -> Result<Distribution, AnnealError> {
    for _ in 0..max_rejections {
        let v: [f64; OUTCOMES] = std::array::from_fn(|_| rng.random_range(0.0..1.0));
        let d = Distribution::project(v)?;
        if d.is_feasible() {
            return Ok(d);
        }
    }
    Err(AnnealError::RetryExhausted {
        attempts: max_rejections,
    })
}

/// Proposes a feasible neighbor of `current`: every component displaced
/// by an independent uniform draw in [-scale, scale), projected back onto
/// the simplex, retried until the feasibility constraint holds.
///
/// A degenerate projection (possible when `scale` dwarfs the components)
/// propagates as fatal rather than counting as one more rejection.
pub fn displace<R: Rng>(
    current: &Distribution,
    scale: f64,
    rng: &mut R,
    max_rejections: usize,
) -> Result<Distribution, AnnealError> {
    for _ in 0..max_rejections {
        let v: [f64; OUTCOMES] =
            std::array::from_fn(|i| current.components()[i] + rng.random_range(-scale..scale));
        let d = Distribution::project(v)?;
        if d.is_feasible() {
            return Ok(d);
        }
    }
    Err(AnnealError::RetryExhausted {
        attempts: max_rejections,
    })
}
