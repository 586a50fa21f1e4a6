//! # bjsim-ai: Player Policies for Blackjack Simulation
//!
//! Provides the player-side decision policies consumed by the
//! `bjsim-engine` round driver. Every policy implements
//! [`bjsim_engine::policy::Policy`] and only chooses actions; the engine
//! deals the cards and enforces the rules.
//!
//! ## Core Components
//!
//! - [`basic`] - Table-driven policy built on a [`StrategyTable`]
//! - [`simple`] - Threshold baseline that hits below 12
//! - [`table`] - Strategy table model, TOML loader and completeness check
//! - [`create_policy`] - Factory building a policy by strategy name
//!
//! ## Quick Start
//!
//! ```rust
//! use bjsim_ai::create_policy;
//! use bjsim_engine::sim::{simulate, SimConfig};
//!
//! let policy = create_policy("basic", None).unwrap();
//! let config = SimConfig {
//!     simulations: 500,
//!     workers: Some(2),
//!     seed: Some(1),
//!     ..SimConfig::default()
//! };
//! let report = simulate(&config, policy.as_ref()).unwrap();
//! assert!(report.stats.hands_played >= 500);
//! ```
//!
//! ## Strategies
//!
//! - `"basic"` - built-in basic strategy table
//! - `"basic-alt"` - built-in variant that never doubles
//! - `"simple"` - [`ThresholdPolicy`] with its default threshold

use std::path::Path;
use std::sync::Arc;

use bjsim_engine::policy::Policy;

pub mod basic;
pub mod error;
pub mod simple;
pub mod table;

pub use basic::TablePolicy;
pub use error::TableError;
pub use simple::ThresholdPolicy;
pub use table::{Category, StrategyTable};

/// Names accepted by [`create_policy`].
pub const STRATEGIES: [&str; 3] = ["basic", "basic-alt", "simple"];

/// Loads a table from `path`, or the named built-in, and checks that every
/// reachable decision has an entry.
pub fn load_table(strategy: &str, path: Option<&Path>) -> Result<StrategyTable, TableError> {
    let table = match path {
        Some(path) => StrategyTable::load(path)?,
        None => StrategyTable::builtin(strategy)?,
    };
    table.check_complete()?;
    Ok(table)
}

/// Factory function to create a player policy by strategy name.
///
/// A `table` path replaces the built-in table of a table-driven strategy.
/// It is ignored for `"simple"`.
///
/// # Example
///
/// ```rust
/// use bjsim_ai::create_policy;
///
/// assert_eq!(create_policy("simple", None).unwrap().name(), "simple");
/// assert!(create_policy("martingale", None).is_err());
/// ```
pub fn create_policy(strategy: &str, table: Option<&Path>) -> Result<Box<dyn Policy>, TableError> {
    match strategy {
        "simple" => Ok(Box::new(ThresholdPolicy::default())),
        "basic" | "basic-alt" => {
            let table = load_table(strategy, table)?;
            Ok(Box::new(TablePolicy::named(Arc::new(table), strategy)))
        }
        other => Err(TableError::UnknownStrategy(other.to_string())),
    }
}
