//! The divergence objective.

use crate::simplex::{Distribution, OUTCOMES};

/// Kullback-Leibler divergence of `d` from the uniform distribution over
/// six outcomes: `sum(d_i * ln(6 * d_i))` over the nonzero components.
///
/// Zero components contribute zero (the `x ln x -> 0` limit) and are
/// skipped outright rather than evaluated as `0 * ln(0)`, which would be
/// NaN. The uniform distribution scores exactly 0; every other point on
/// the simplex scores positive, so minimizing this finds the most uniform
/// distribution the feasibility constraint allows.
pub fn divergence(d: &Distribution) -> f64 {
    d.components()
        .iter()
        .filter(|&&p| p != 0.0)
        .map(|&p| p * (OUTCOMES as f64 * p).ln())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_uniform_scores_zero() {
        assert!(divergence(&Distribution::uniform()).abs() < 1e-12);
    }

    #[test]
    fn test_point_mass_scores_ln_six() {
        let top = Distribution::project([0.0, 0.0, 0.0, 0.0, 0.0, 1.0]).unwrap();
        assert!((divergence(&top) - 6.0f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn test_zero_components_are_skipped() {
        // Half the mass on each of the two high faces; the four zero
        // components must not poison the sum with NaN.
        let d = Distribution::project([0.0, 0.0, 0.0, 0.0, 1.0, 1.0]).unwrap();
        let value = divergence(&d);
        assert!(value.is_finite());
        assert!((value - 3.0f64.ln()).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn prop_divergence_non_negative(
            v in proptest::array::uniform6(0.0f64..1.0)
                .prop_filter("needs positive mass", |v| v.iter().any(|x| *x > 0.0))
        ) {
            let d = Distribution::project(v).unwrap();
            prop_assert!(divergence(&d) >= -1e-9);
        }
    }
}
