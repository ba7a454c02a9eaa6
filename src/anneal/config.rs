//! Annealing configuration.

/// Iteration budget of the full-length run. Long enough for the geometric
/// decay to bring the temperature to ~1e-13 by the last iteration.
pub const DEFAULT_ITERATIONS: usize = 30_000_000;

/// Geometric decay applied to the temperature once per iteration.
pub const DEFAULT_DECAY: f64 = 0.999999;

/// Base displacement magnitude; each proposal scales it by the square
/// root of the current temperature.
pub const DEFAULT_DISPLACEMENT_SCALE: f64 = 0.01;

/// Starting temperature.
pub const DEFAULT_INITIAL_TEMPERATURE: f64 = 1.0;

/// Cap on consecutive rejection-sampling attempts. Far above anything the
/// default parameters reach; exists so a pathological displacement scale
/// surfaces as an error instead of a hang.
pub const DEFAULT_MAX_REJECTIONS: usize = 100_000;

/// Configuration for the annealing search.
///
/// The defaults are the algorithm's tuning, not placeholders: the
/// full-length production run uses them unchanged, and the fixed-seed
/// regression tests only shorten the iteration budget.
///
/// # Examples
///
/// ```
/// use dice_anneal::anneal::AnnealConfig;
///
/// let config = AnnealConfig::default()
///     .with_iterations(10_000)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct AnnealConfig {
    /// Starting temperature.
    pub initial_temperature: f64,

    /// Multiplicative temperature decay, applied every iteration. Must be
    /// in (0, 1).
    pub decay: f64,

    /// Total number of Metropolis iterations.
    pub iterations: usize,

    /// Base magnitude of the per-component displacement noise.
    pub displacement_scale: f64,

    /// Retry cap for the rejection-sampling loops.
    pub max_rejections: usize,

    /// Random seed for reproducibility. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            initial_temperature: DEFAULT_INITIAL_TEMPERATURE,
            decay: DEFAULT_DECAY,
            iterations: DEFAULT_ITERATIONS,
            displacement_scale: DEFAULT_DISPLACEMENT_SCALE,
            max_rejections: DEFAULT_MAX_REJECTIONS,
            seed: None,
        }
    }
}

impl AnnealConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_decay(mut self, decay: f64) -> Self {
        self.decay = decay;
        self
    }

    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    pub fn with_displacement_scale(mut self, scale: f64) -> Self {
        self.displacement_scale = scale;
        self
    }

    pub fn with_max_rejections(mut self, n: usize) -> Self {
        self.max_rejections = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !self.initial_temperature.is_finite() || self.initial_temperature <= 0.0 {
            return Err("initial_temperature must be positive".into());
        }
        if !(self.decay > 0.0 && self.decay < 1.0) {
            return Err(format!("decay must be in (0, 1), got {}", self.decay));
        }
        if self.iterations == 0 {
            return Err("iterations must be at least 1".into());
        }
        if !self.displacement_scale.is_finite() || self.displacement_scale <= 0.0 {
            return Err("displacement_scale must be positive".into());
        }
        if self.max_rejections == 0 {
            return Err("max_rejections must be at least 1".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AnnealConfig::default();
        assert!((config.initial_temperature - 1.0).abs() < 1e-12);
        assert!((config.decay - 0.999999).abs() < 1e-12);
        assert_eq!(config.iterations, 30_000_000);
        assert!((config.displacement_scale - 0.01).abs() < 1e-12);
    }

    #[test]
    fn test_validate_ok() {
        assert!(AnnealConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_bad_temperature() {
        let config = AnnealConfig::default().with_initial_temperature(-1.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_bad_decay() {
        assert!(AnnealConfig::default().with_decay(0.0).validate().is_err());
        assert!(AnnealConfig::default().with_decay(1.0).validate().is_err());
        assert!(AnnealConfig::default().with_decay(1.5).validate().is_err());
    }

    #[test]
    fn test_validate_zero_iterations() {
        let config = AnnealConfig::default().with_iterations(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_bad_scale() {
        let config = AnnealConfig::default().with_displacement_scale(0.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_rejection_cap() {
        let config = AnnealConfig::default().with_max_rejections(0);
        assert!(config.validate().is_err());
    }
}
