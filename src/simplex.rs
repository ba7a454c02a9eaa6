//! The 6-outcome probability simplex.
//!
//! A [`Distribution`] assigns a probability to each face of a die
//! (outcomes 1..=6). Arbitrary 6-vectors enter the simplex through
//! [`Distribution::project`]; the feasibility predicate expresses the
//! search constraint "biased toward the high faces".

use crate::error::AnnealError;

/// Number of outcomes (die faces). Fixed by design.
pub const OUTCOMES: usize = 6;

/// Feasibility threshold on the expected value, on the 1..=6 outcome
/// scale. Fixed by design, not configurable.
pub const MIN_EXPECTED_VALUE: f64 = 4.0;

/// A probability distribution over the six die faces.
///
/// Components are non-negative and sum to 1 within floating tolerance.
/// The type is a plain value: an accepted candidate replaces the current
/// state wholesale, nothing is ever mutated in place.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Distribution([f64; OUTCOMES]);

impl Distribution {
    /// The uniform distribution, 1/6 per face.
    pub fn uniform() -> Self {
        Self([1.0 / OUTCOMES as f64; OUTCOMES])
    }

    /// Projects an arbitrary 6-vector onto the simplex: negative
    /// components are clamped to zero, the remainder renormalized to
    /// sum 1.
    ///
    /// # Errors
    ///
    /// [`AnnealError::DegenerateProjection`] when no component is
    /// positive, or the input carries NaN/infinity — normalization has no
    /// meaningful result in either case, and letting the NaNs flow into
    /// the objective would poison the rest of the run.
    pub fn project(v: [f64; OUTCOMES]) -> Result<Self, AnnealError> {
        let mut p = v;
        for x in &mut p {
            if *x < 0.0 {
                *x = 0.0;
            }
        }
        let norm: f64 = p.iter().sum();
        if !norm.is_finite() || norm <= 0.0 {
            return Err(AnnealError::DegenerateProjection);
        }
        for x in &mut p {
            *x /= norm;
        }
        Ok(Self(p))
    }

    /// Expected value with face `i` carrying probability `self[i]` of
    /// outcome `i + 1`.
    pub fn expected_value(&self) -> f64 {
        self.0
            .iter()
            .enumerate()
            .map(|(i, p)| (i + 1) as f64 * p)
            .sum()
    }

    /// Whether the expected value meets [`MIN_EXPECTED_VALUE`].
    pub fn is_feasible(&self) -> bool {
        self.expected_value() >= MIN_EXPECTED_VALUE
    }

    /// Component view, face order.
    pub fn components(&self) -> &[f64; OUTCOMES] {
        &self.0
    }
}
