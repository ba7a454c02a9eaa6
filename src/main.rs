//! dice-anneal binary.
//!
//! Runs the full-length annealing search once and prints the optimized
//! distribution at termination. No arguments; `RUST_LOG` controls the
//! diagnostic log level.

use dice_anneal::anneal::{AnnealConfig, AnnealResult, AnnealRunner};
use dice_anneal::error::AnnealError;
use log::info;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .format_module_path(false)
        .init();

    let seed: u64 = rand::random();
    let config = AnnealConfig::default().with_seed(seed);
    info!(
        "annealing for {} iterations (decay {}, seed {seed})",
        config.iterations, config.decay
    );

    match AnnealRunner::run(&config) {
        Ok(result) => {
            info!(
                "done at temperature {:.3e}, {} improving moves",
                result.final_temperature, result.improving_moves
            );
            print_report(&result);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("dice-anneal: {err}");
            ExitCode::from(exit_code(&err))
        }
    }
}

fn print_report(result: &AnnealResult) {
    println!("Optimal probability distribution is");
    let line: String = result
        .distribution
        .components()
        .iter()
        .map(|p| format!("{p:.5}\t"))
        .collect();
    println!("{line}");
    println!();
    println!(
        "Acceptance rate: {:.6} ({})",
        result.acceptance_rate(),
        result.accepted_moves
    );
    println!(
        "Expected value: {:.6}, Kullback-Leibler divergence: {:.6}",
        result.expected_value, result.divergence
    );
}

fn exit_code(err: &AnnealError) -> u8 {
    match err {
        AnnealError::DegenerateProjection => 2,
        AnnealError::RetryExhausted { .. } => 3,
        AnnealError::NumericDomain(_) => 4,
        AnnealError::InvalidConfig(_) => 5,
    }
}
