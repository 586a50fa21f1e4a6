//! # bjsim CLI Library
//!
//! Command-line interface for the blackjack simulation engine. It resolves
//! settings, picks a player strategy and runs single rounds or parallel
//! batches.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["bjsim", "sim", "--sims", "100000", "--decks", "6"];
//! let code = bjsim_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `sim`: Play rounds and report win/tie/loss rates and expected earnings
//! - `cfg`: Display the resolved configuration and value sources
//! - `table`: Check a strategy table for completeness

use clap::Parser;
use std::io::Write;

#[macro_use]
mod macros;

pub mod cli;
pub mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod logging;
pub mod ui;

use cli::{BjsimCli, Commands};
use commands::{handle_cfg_command, handle_sim_command, handle_table_command};

pub use error::CliError;

const COMMANDS: &[&str] = &["sim", "cfg", "table"];

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate subcommand handler.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["bjsim", "sim", "--sims", "1", "--seed", "42"];
/// let code = bjsim_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match BjsimCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                if write!(out, "{}", e).is_err() {
                    return exit_code::ERROR;
                }
                return exit_code::SUCCESS;
            }
            write_or_exit!(err, "{}", e);
            write_or_exit!(err, "bjsim blackjack simulator");
            write_or_exit!(err, "Usage: bjsim <command> [options]\n");
            write_or_exit!(err, "Commands:");
            for c in COMMANDS {
                write_or_exit!(err, "  {}", c);
            }
            write_or_exit!(err, "\nFor full help, run: bjsim --help");
            return exit_code::ERROR;
        }
    };

    let result = match cli.cmd {
        Commands::Sim(args) => {
            logging::init_logging(args.debug);
            handle_sim_command(&args, out, err)
        }
        Commands::Cfg => handle_cfg_command(out, err),
        Commands::Table(args) => handle_table_command(&args, out, err),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}
