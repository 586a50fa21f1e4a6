//! Parallel aggregation of independent batches.
//!
//! The requested simulation count is split as evenly as possible across a
//! fixed number of workers. Each worker owns its own seeded [`Deck`] and
//! [`BatchStats`]; the only synchronisation point is collecting every
//! worker's stats before they are summed. Any failed worker fails the whole
//! run.

use std::time::{Duration, Instant};

use rayon::prelude::*;
use serde::Serialize;
use tracing::info;

use crate::batch::BatchRunner;
use crate::deck::Deck;
use crate::errors::EngineError;
use crate::policy::{DealerPolicy, Policy};
use crate::round::{Round, RoundReport, DEFAULT_WAGER};
use crate::stats::BatchStats;

pub const MAX_DECKS: u8 = 8;
pub const MIN_SHUFFLE_THRESHOLD: f64 = 0.5;
pub const MAX_SHUFFLE_THRESHOLD: f64 = 0.95;

/// Odd multiplier spreading worker seeds derived from one base seed.
const SEED_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimConfig {
    pub simulations: u64,
    pub num_decks: u8,
    /// Replace the deck before a round once less than this fraction remains
    pub shuffle_threshold: f64,
    pub wager: f64,
    /// Defaults to the available hardware parallelism
    pub workers: Option<usize>,
    /// Base seed; each worker derives its own. OS entropy when unset.
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            simulations: 10_000,
            num_decks: 1,
            shuffle_threshold: 0.75,
            wager: DEFAULT_WAGER,
            workers: None,
            seed: None,
        }
    }
}

impl SimConfig {
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.simulations < 1 {
            return Err(EngineError::InvalidConfiguration(
                "simulations must be >= 1".into(),
            ));
        }
        if !(1..=MAX_DECKS).contains(&self.num_decks) {
            return Err(EngineError::InvalidConfiguration(format!(
                "deck count must be between 1 and {}, got {}",
                MAX_DECKS, self.num_decks
            )));
        }
        if !(MIN_SHUFFLE_THRESHOLD..=MAX_SHUFFLE_THRESHOLD).contains(&self.shuffle_threshold) {
            return Err(EngineError::InvalidConfiguration(format!(
                "shuffle threshold must be between {} and {}, got {}",
                MIN_SHUFFLE_THRESHOLD, MAX_SHUFFLE_THRESHOLD, self.shuffle_threshold
            )));
        }
        if !self.wager.is_finite() || self.wager <= 0.0 {
            return Err(EngineError::InvalidConfiguration(format!(
                "wager must be a positive amount, got {}",
                self.wager
            )));
        }
        if self.workers == Some(0) {
            return Err(EngineError::InvalidConfiguration(
                "workers must be >= 1".into(),
            ));
        }
        Ok(())
    }

    pub fn worker_count(&self) -> usize {
        self.workers.unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1)
        })
    }

    fn worker_seed(&self, index: usize) -> u64 {
        match self.seed {
            Some(base) => base.wrapping_add((index as u64).wrapping_mul(SEED_STRIDE)),
            None => rand::random(),
        }
    }

    /// Freshly shuffled and cut deck for worker `index`.
    pub fn new_deck(&self, index: usize) -> Deck {
        let mut deck = Deck::new_with_seed(self.num_decks, self.worker_seed(index));
        deck.shuffle();
        deck.cut();
        deck
    }
}

/// Splits `total` into `workers` parts differing by at most one.
pub fn partition(total: u64, workers: usize) -> Vec<u64> {
    let workers = workers.max(1) as u64;
    let base = total / workers;
    let extra = total % workers;
    (0..workers).map(|i| base + u64::from(i < extra)).collect()
}

/// Final aggregate of a parallel run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimReport {
    pub simulations: u64,
    pub workers: usize,
    pub stats: BatchStats,
    pub elapsed: Duration,
}

impl SimReport {
    pub fn simulations_per_sec(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.simulations as f64 / secs
        } else {
            0.0
        }
    }

    pub fn earnings_per_simulation(&self) -> f64 {
        if self.simulations == 0 {
            0.0
        } else {
            self.stats.earnings / self.simulations as f64
        }
    }

    pub fn earnings_per_hand(&self) -> f64 {
        self.stats.earnings_per_hand()
    }
}

/// Plays one round from a fresh deck.
pub fn play_single(config: &SimConfig, player: &dyn Policy) -> Result<RoundReport, EngineError> {
    config.validate()?;
    let mut deck = config.new_deck(0);
    Round::new(&mut deck, player, &DealerPolicy, config.wager).play()
}

/// Runs `config.simulations` rounds across parallel workers and sums the
/// per-worker stats.
pub fn simulate(config: &SimConfig, player: &dyn Policy) -> Result<SimReport, EngineError> {
    config.validate()?;
    let workers = config.worker_count();
    let shares = partition(config.simulations, workers);
    let start = Instant::now();

    let partials: Vec<BatchStats> = shares
        .par_iter()
        .enumerate()
        .map(|(index, &rounds)| {
            let dealer = DealerPolicy::new();
            let mut runner = BatchRunner::new(
                config.new_deck(index),
                player,
                &dealer,
                config.shuffle_threshold,
                config.wager,
            );
            let stats = runner
                .run(rounds)
                .map_err(|e| EngineError::WorkerFailed(format!("worker {}: {}", index, e)))?;
            info!(
                worker = index,
                rounds,
                hands = stats.hands_played,
                wins = stats.wins,
                "worker finished"
            );
            Ok(stats)
        })
        .collect::<Result<Vec<_>, EngineError>>()?;

    Ok(SimReport {
        simulations: config.simulations,
        workers,
        stats: partials.into_iter().sum(),
        elapsed: start.elapsed(),
    })
}
