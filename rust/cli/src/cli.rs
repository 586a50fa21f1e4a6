//! Command-line surface parsed by clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "bjsim",
    version,
    about = "Blackjack simulation: estimate a playing strategy's expected earnings"
)]
pub struct BjsimCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Play rounds and report win/tie/loss rates and earnings
    Sim(SimArgs),
    /// Show the resolved configuration and where each value came from
    Cfg,
    /// Check a strategy table for completeness
    Table(TableArgs),
}

/// Flags override configuration file and environment values.
#[derive(Debug, Clone, Default, Args)]
pub struct SimArgs {
    /// Number of rounds to play; 1 prints the round in detail
    #[arg(long, default_value_t = 10_000)]
    pub sims: u64,
    /// Decks in the shoe (1-8)
    #[arg(long)]
    pub decks: Option<u8>,
    /// Replace the shoe once less than this fraction remains (0.5-0.95)
    #[arg(long)]
    pub shuffle: Option<f64>,
    /// Player strategy: basic, basic-alt or simple
    #[arg(long)]
    pub strategy: Option<String>,
    /// Custom strategy table (TOML) for table-driven strategies
    #[arg(long)]
    pub table: Option<PathBuf>,
    /// Opening wager per round
    #[arg(long)]
    pub wager: Option<f64>,
    /// Worker threads (defaults to available parallelism)
    #[arg(long)]
    pub workers: Option<usize>,
    /// Base RNG seed for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,
    /// Log every round at debug level
    #[arg(long)]
    pub debug: bool,
}

#[derive(Debug, Clone, Default, Args)]
pub struct TableArgs {
    /// Built-in table to check: basic or basic-alt
    #[arg(long)]
    pub strategy: Option<String>,
    /// Table file to check instead of a built-in one
    #[arg(long)]
    pub table: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sim_defaults() {
        let cli = BjsimCli::try_parse_from(["bjsim", "sim"]).unwrap();
        let Commands::Sim(args) = cli.cmd else {
            panic!("expected sim");
        };
        assert_eq!(args.sims, 10_000);
        assert!(args.decks.is_none());
        assert!(!args.debug);
    }

    #[test]
    fn test_sim_flags_parse() {
        let cli = BjsimCli::try_parse_from([
            "bjsim", "sim", "--sims", "20", "--decks", "6", "--shuffle", "0.6", "--strategy",
            "simple", "--wager", "10", "--workers", "2", "--seed", "5", "--debug",
        ])
        .unwrap();
        let Commands::Sim(args) = cli.cmd else {
            panic!("expected sim");
        };
        assert_eq!(args.sims, 20);
        assert_eq!(args.decks, Some(6));
        assert_eq!(args.shuffle, Some(0.6));
        assert_eq!(args.strategy.as_deref(), Some("simple"));
        assert_eq!(args.wager, Some(10.0));
        assert_eq!(args.workers, Some(2));
        assert_eq!(args.seed, Some(5));
        assert!(args.debug);
    }

    #[test]
    fn test_all_subcommands_parse() {
        for argv in [
            vec!["bjsim", "sim"],
            vec!["bjsim", "cfg"],
            vec!["bjsim", "table"],
            vec!["bjsim", "table", "--strategy", "basic-alt"],
        ] {
            assert!(BjsimCli::try_parse_from(&argv).is_ok(), "{:?}", argv);
        }
        assert!(BjsimCli::try_parse_from(["bjsim", "deal"]).is_err());
        assert!(BjsimCli::try_parse_from(["bjsim", "sim", "--sims", "many"]).is_err());
    }
}
