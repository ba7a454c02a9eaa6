//! Error types for the annealer.

use thiserror::Error;

/// Failure kinds for projection, sampling, and the annealing loop.
///
/// Every variant is fatal to the run that raised it: the engine never
/// continues with corrupted numeric state and never emits a partial result.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnnealError {
    /// The projector received a vector with no positive mass; normalizing
    /// it would divide by zero.
    #[error("degenerate projection: input vector has no positive component")]
    DegenerateProjection,

    /// A rejection-sampling loop hit its retry cap without producing a
    /// feasible distribution.
    #[error("rejection sampling exhausted after {attempts} attempts")]
    RetryExhausted {
        /// The cap that was reached.
        attempts: usize,
    },

    /// A NaN or infinity escaped the objective or the acceptance
    /// probability.
    #[error("numeric domain error: {0}")]
    NumericDomain(String),

    /// Configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
