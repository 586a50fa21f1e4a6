//! Configuration command handler.
//!
//! Prints the resolved settings with their sources (default, file, or env)
//! as pretty JSON.
//!
//! # Example Output
//!
//! ```json
//! {
//!   "decks": {
//!     "value": 1,
//!     "source": "default"
//!   },
//!   "seed": {
//!     "value": 42,
//!     "source": "env"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use std::io::Write;

/// Handle the cfg command.
///
/// # Errors
///
/// Returns `CliError::Config` if the config file or an environment value is
/// unreadable or out of range, and `CliError::Io` if writing fails.
pub fn handle_cfg_command(out: &mut dyn Write, _err: &mut dyn Write) -> Result<(), CliError> {
    let config::ConfigResolved { config, sources } = config::load_with_sources()?;
    let display = serde_json::json!({
        "decks": {
            "value": config.decks,
            "source": sources.decks,
        },
        "shuffle": {
            "value": config.shuffle,
            "source": sources.shuffle,
        },
        "strategy": {
            "value": config.strategy,
            "source": sources.strategy,
        },
        "table": {
            "value": config.table,
            "source": sources.table,
        },
        "wager": {
            "value": config.wager,
            "source": sources.wager,
        },
        "workers": {
            "value": config.workers,
            "source": sources.workers,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
