//! # bjsim-engine: Blackjack Simulation Core
//!
//! Plays many independent blackjack rounds under a pluggable decision
//! policy and aggregates win/tie/loss counts and earnings. Rounds are
//! reproducible from a seed, and batches fan out across worker threads.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and blackjack scoring
//! - [`deck`] - Multi-deck shoe with shuffle, cut and refill on a ChaCha20 RNG
//! - [`hand`] - Hand of cards with its wager and ace-flex scoring
//! - [`policy`] - The [`policy::Policy`] decision seam and the dealer house rule
//! - [`round`] - One round of play: deal, naturals, policies, splits, settlement
//! - [`rules`] - Outcome comparison and payout rules
//! - [`stats`] - Mergeable per-batch counters
//! - [`batch`] - Runs many rounds from one deck with threshold reshuffling
//! - [`sim`] - Simulation config and the parallel aggregator
//! - [`errors`] - Error types for engine operations
//!
//! ## Quick Start
//!
//! ```rust
//! use bjsim_engine::deck::Deck;
//! use bjsim_engine::policy::DealerPolicy;
//! use bjsim_engine::round::Round;
//!
//! let mut deck = Deck::new_with_seed(1, 42);
//! deck.shuffle();
//!
//! // Dealer rules in both seats
//! let report = Round::new(&mut deck, &DealerPolicy, &DealerPolicy, 5.0)
//!     .play()
//!     .expect("a fresh deck cannot run out in one round");
//! assert_eq!(report.outcomes.len(), 1);
//! ```
//!
//! ## Parallel Simulation
//!
//! ```rust
//! use bjsim_engine::policy::DealerPolicy;
//! use bjsim_engine::sim::{simulate, SimConfig};
//!
//! let config = SimConfig {
//!     simulations: 1_000,
//!     workers: Some(2),
//!     seed: Some(7),
//!     ..SimConfig::default()
//! };
//! let report = simulate(&config, &DealerPolicy).unwrap();
//! assert_eq!(report.stats.hands_played, 1_000);
//! ```

pub mod batch;
pub mod cards;
pub mod deck;
pub mod errors;
pub mod hand;
pub mod policy;
pub mod round;
pub mod rules;
pub mod sim;
pub mod stats;
