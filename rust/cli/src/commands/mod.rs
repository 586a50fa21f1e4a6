//! Command handler modules for the bjsim CLI.
//!
//! Each command lives in its own module with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Module-private helpers specific to that command
//! - Output streams (`&mut dyn Write`) passed in as parameters
//! - Errors propagated as `CliError`; `run` prints them and picks the exit code

pub mod cfg;
pub mod sim;
pub mod table;

pub use cfg::handle_cfg_command;
pub use sim::handle_sim_command;
pub use table::handle_table_command;
