//! Annealing execution loop.

use super::config::AnnealConfig;
use super::sampler;
use crate::error::AnnealError;
use crate::objective::divergence;
use crate::random::create_rng;
use crate::simplex::Distribution;
use rand::Rng;

/// Result of a completed annealing run.
///
/// Built once, when the iteration budget runs out; a run that fails
/// produces an error instead, never a partial result.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealResult {
    /// The distribution held when the budget ran out.
    pub distribution: Distribution,

    /// Expected value of the final distribution.
    pub expected_value: f64,

    /// Divergence of the final distribution from uniform.
    pub divergence: f64,

    /// Total iterations executed.
    pub iterations: usize,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of improving moves.
    pub improving_moves: usize,

    /// Temperature when the run stopped.
    pub final_temperature: f64,
}

impl AnnealResult {
    /// Fraction of iterations whose candidate was accepted.
    pub fn acceptance_rate(&self) -> f64 {
        self.accepted_moves as f64 / self.iterations as f64
    }
}

/// Executes the annealing search.
pub struct AnnealRunner;

impl AnnealRunner {
    /// Runs the search with a generator built from `config.seed`, or from
    /// OS entropy when no seed is set.
    pub fn run(config: &AnnealConfig) -> Result<AnnealResult, AnnealError> {
        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };
        Self::run_with_rng(config, &mut rng)
    }

    /// Runs the search against a caller-owned generator.
    pub fn run_with_rng<R: Rng>(
        config: &AnnealConfig,
        rng: &mut R,
    ) -> Result<AnnealResult, AnnealError> {
        config.validate().map_err(AnnealError::InvalidConfig)?;

        let mut current = sampler::initial(rng, config.max_rejections)?;
        let mut current_div = divergence(&current);
        let mut temperature = config.initial_temperature;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;

        for _ in 0..config.iterations {
            // Cool before proposing; the displacement shrinks with the
            // square root of the temperature.
            temperature *= config.decay;

            let step = config.displacement_scale * temperature.sqrt();
            if step <= 0.0 {
                // Temperature underflow would empty the proposal range.
                return Err(AnnealError::NumericDomain(format!(
                    "displacement step collapsed to {step} at temperature {temperature}"
                )));
            }

            let candidate = sampler::displace(&current, step, rng, config.max_rejections)?;
            let candidate_div = divergence(&candidate);

            let delta = candidate_div - current_div;
            if !delta.is_finite() {
                return Err(AnnealError::NumericDomain(format!(
                    "objective delta is {delta}"
                )));
            }

            let probability = acceptance_probability(delta, temperature);
            if probability.is_nan() {
                return Err(AnnealError::NumericDomain(format!(
                    "acceptance probability is NaN for delta {delta} at temperature {temperature}"
                )));
            }

            if rng.random_range(0.0..1.0) < probability {
                if delta < 0.0 {
                    improving_moves += 1;
                }
                current = candidate;
                current_div = candidate_div;
                accepted_moves += 1;
            }
        }

        Ok(AnnealResult {
            distribution: current,
            expected_value: current.expected_value(),
            divergence: current_div,
            iterations: config.iterations,
            accepted_moves,
            improving_moves,
            final_temperature: temperature,
        })
    }
}

/// Metropolis acceptance probability for a move costing `delta` at the
/// given temperature. Exceeds 1 (or is +inf) for improving moves; the
/// caller compares a half-open uniform draw against it, which turns that
/// into a deterministic accept without a clamp.
fn acceptance_probability(delta: f64, temperature: f64) -> f64 {
    (-delta / temperature).exp()
}
