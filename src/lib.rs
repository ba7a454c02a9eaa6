//! Constrained dice-distribution annealer.
//!
//! Searches for the probability distribution over the six faces of a die
//! that stays as close to uniform as possible (Kullback-Leibler divergence)
//! while keeping its expected value at or above 4, using simulated
//! annealing with Metropolis Monte Carlo acceptance.
//!
//! - **Annealing engine** ([`anneal`]): configuration, rejection-sampled
//!   proposals, and the temperature-decay Metropolis loop.
//! - **Simplex** ([`simplex`]): the `Distribution` value type, projection
//!   of arbitrary 6-vectors onto the simplex, and the expected-value
//!   feasibility constraint.
//! - **Objective** ([`objective`]): divergence from the uniform
//!   distribution, the quantity being minimized.
//! - **Randomness** ([`random`]): seeded generator construction for
//!   reproducible runs.
//! - **Errors** ([`error`]): structured failure kinds; every error is
//!   fatal to the run that raised it.
//!
//! # Architecture
//!
//! The library is fully deterministic given a seed: every stochastic
//! function takes `&mut R where R: rand::Rng`, and a run owns exactly one
//! generator. There is no global state and no concurrency; the `dice-anneal`
//! binary seeds from OS entropy, runs the fixed-budget search once, and
//! prints a single report at termination.

pub mod anneal;
pub mod error;
pub mod objective;
pub mod random;
pub mod simplex;
