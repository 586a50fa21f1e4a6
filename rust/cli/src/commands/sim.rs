//! Simulation command handler.
//!
//! Resolves settings (defaults, config file, environment, then flags),
//! builds the player policy and either plays one round in detail or runs
//! the parallel batch path and prints the aggregate report.
//!
//! # Examples
//!
//! ```no_run
//! use bjsim_cli::cli::SimArgs;
//! use bjsim_cli::commands::sim::handle_sim_command;
//! use std::io;
//!
//! let args = SimArgs { sims: 100_000, seed: Some(42), ..SimArgs::default() };
//! handle_sim_command(&args, &mut io::stdout(), &mut io::stderr()).unwrap();
//! ```

use std::io::Write;

use bjsim_ai::create_policy;
use bjsim_engine::sim::{play_single, simulate};
use tracing::info;

use crate::cli::SimArgs;
use crate::config::{self, Config};
use crate::error::CliError;
use crate::formatters::{write_round_detail, write_sim_report};
use crate::ui;

/// Handle the sim command.
///
/// `args.sims` below 1 is rejected before anything is loaded or played.
pub fn handle_sim_command(
    args: &SimArgs,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if args.sims < 1 {
        return Err(CliError::InvalidInput("simulations must be >= 1".to_string()));
    }

    let resolved = config::load_layers()?;
    let cfg = apply_flags(resolved.config, args);
    config::validate(&cfg)?;

    if cfg.strategy == "simple" && cfg.table.is_some() {
        ui::warn_parameter_unused(err, "table", "the simple strategy has no table")?;
    }
    let policy = create_policy(&cfg.strategy, cfg.table.as_deref())?;
    let sim = cfg.sim_config(args.sims);
    info!(
        strategy = policy.name(),
        simulations = sim.simulations,
        decks = sim.num_decks,
        shuffle = sim.shuffle_threshold,
        "starting simulation"
    );

    if sim.simulations == 1 {
        let report = play_single(&sim, policy.as_ref())?;
        write_round_detail(out, &report)?;
    } else {
        let report = simulate(&sim, policy.as_ref())?;
        writeln!(out, "Strategy: {}", policy.name())?;
        write_sim_report(out, &report)?;
    }
    Ok(())
}

fn apply_flags(mut cfg: Config, args: &SimArgs) -> Config {
    if let Some(v) = args.decks {
        cfg.decks = v;
    }
    if let Some(v) = args.shuffle {
        cfg.shuffle = v;
    }
    if let Some(v) = &args.strategy {
        cfg.strategy = v.clone();
    }
    if let Some(v) = &args.table {
        cfg.table = Some(v.clone());
    }
    if let Some(v) = args.wager {
        cfg.wager = v;
    }
    if args.workers.is_some() {
        cfg.workers = args.workers;
    }
    if args.seed.is_some() {
        cfg.seed = args.seed;
    }
    cfg
}
