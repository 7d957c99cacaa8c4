//! Simulation command
//!
//! Plays many seeded rounds with a letter strategy and collects statistics.

use crate::core::{
    EmptyPoolError, GameState, Outcome, Status, WordPool, render_mask, start_round, submit_letter,
};
use crate::solver::Strategy;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};
use tracing::info;

/// Simulation parameters
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub rounds: usize,
    /// Round `i` is seeded with `seed + i`, both for the word and the strategy
    pub seed: u64,
    pub show_progress: bool,
}

impl SimulationConfig {
    #[must_use]
    pub const fn new(rounds: usize, seed: u64) -> Self {
        Self {
            rounds,
            seed,
            show_progress: true,
        }
    }
}

/// Result from a single simulated round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    pub word: String,
    pub status: Status,
    pub guesses: usize,
    pub failed_attempts: u8,
}

/// Aggregated simulation statistics
#[derive(Debug)]
pub struct SimulationResult {
    pub total_rounds: usize,
    pub won: usize,
    pub lost: usize,
    pub average_guesses: f64,
    /// Failed attempts among won rounds
    pub failed_distribution: BTreeMap<u8, usize>,
    /// Distinct words that beat the strategy, sorted
    pub lost_words: Vec<String>,
    pub duration: Duration,
    pub rounds_per_second: f64,
}

impl SimulationResult {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_rounds == 0 {
            0.0
        } else {
            self.won as f64 / self.total_rounds as f64 * 100.0
        }
    }
}

/// Play one round to the end, letting `strategy` choose every letter
pub fn play_round<S: Strategy + ?Sized>(
    strategy: &S,
    mut state: GameState,
    pool: &WordPool,
    rng: &mut dyn RngCore,
) -> RoundResult {
    let mut guesses = 0;
    let mut revealed = None;

    while let Some(letter) = strategy.select_letter(&state, pool, rng) {
        let (next, outcome) = submit_letter(&state, &letter.to_string());
        state = next;
        guesses += 1;

        if let Outcome::OutOfAttempts { secret, .. } = outcome {
            revealed = Some(secret);
        }
    }

    RoundResult {
        word: revealed.unwrap_or_else(|| render_mask(&state).chars().collect()),
        status: state.status(),
        guesses,
        failed_attempts: state.failed_attempts(),
    }
}

/// Run `config.rounds` rounds in parallel
///
/// # Errors
///
/// Returns [`EmptyPoolError`] if the pool has no words.
pub fn run_simulation<S: Strategy + Sync + ?Sized>(
    strategy: &S,
    pool: &WordPool,
    config: &SimulationConfig,
) -> Result<SimulationResult, EmptyPoolError> {
    if pool.is_empty() {
        return Err(EmptyPoolError);
    }

    let pb = if config.show_progress {
        let pb = ProgressBar::new(config.rounds as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .map_or_else(
                    |_| ProgressStyle::default_bar(),
                    |style| style.progress_chars("█▓▒░"),
                ),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();

    let results: Vec<RoundResult> = (0..config.rounds)
        .into_par_iter()
        .map(|i| {
            let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(i as u64));
            let state = start_round(pool, &mut rng)?;
            let result = play_round(strategy, state, pool, &mut rng);
            pb.inc(1);
            Ok::<_, EmptyPoolError>(result)
        })
        .collect::<Result<_, EmptyPoolError>>()?;

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    let summary = summarize(&results, duration);
    info!(
        rounds = summary.total_rounds,
        won = summary.won,
        lost = summary.lost,
        "simulation finished"
    );
    Ok(summary)
}

fn summarize(results: &[RoundResult], duration: Duration) -> SimulationResult {
    let total_rounds = results.len();
    let won = results.iter().filter(|r| r.status == Status::Won).count();
    let lost = results.iter().filter(|r| r.status == Status::Lost).count();

    let total_guesses: usize = results.iter().map(|r| r.guesses).sum();
    let average_guesses = if total_rounds > 0 {
        total_guesses as f64 / total_rounds as f64
    } else {
        0.0
    };

    let mut failed_distribution = BTreeMap::new();
    for r in results.iter().filter(|r| r.status == Status::Won) {
        *failed_distribution.entry(r.failed_attempts).or_insert(0) += 1;
    }

    let mut lost_words: Vec<String> = results
        .iter()
        .filter(|r| r.status == Status::Lost)
        .map(|r| r.word.clone())
        .collect();
    lost_words.sort_unstable();
    lost_words.dedup();

    let secs = duration.as_secs_f64();

    SimulationResult {
        total_rounds,
        won,
        lost,
        average_guesses,
        failed_distribution,
        lost_words,
        duration,
        rounds_per_second: if secs > 0.0 {
            total_rounds as f64 / secs
        } else {
            0.0
        },
    }
}
