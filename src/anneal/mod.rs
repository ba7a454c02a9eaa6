//! Simulated annealing over the constrained simplex.
//!
//! A single-solution trajectory search: the temperature decays
//! geometrically every iteration, proposals are drawn by rejection
//! sampling from the feasible region (expected value at or above 4),
//! and moves are accepted by the Metropolis criterion. Worsening moves
//! pass early, when the temperature is high; by the end of the budget
//! only improvements survive.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast
//!   Computing Machines"

mod config;
mod runner;
mod sampler;

pub use config::{
    AnnealConfig, DEFAULT_DECAY, DEFAULT_DISPLACEMENT_SCALE, DEFAULT_INITIAL_TEMPERATURE,
    DEFAULT_ITERATIONS, DEFAULT_MAX_REJECTIONS,
};
pub use runner::{AnnealResult, AnnealRunner};
pub use sampler::{displace, initial};
