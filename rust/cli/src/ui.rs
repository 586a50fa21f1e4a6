//! UI helper functions for terminal output formatting.
//!
//! Keeps error and warning prefixes consistent across commands.

use std::io::Write;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

/// Display parameter ignored warning
pub fn warn_parameter_unused(
    err: &mut dyn Write,
    param_name: &str,
    reason: &str,
) -> std::io::Result<()> {
    display_warning(
        err,
        &format!("Parameter --{} is ignored: {}.", param_name, reason),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefixes() {
        let mut err = Vec::new();
        write_error(&mut err, "boom").unwrap();
        warn_parameter_unused(&mut err, "table", "the simple strategy has no table").unwrap();
        let text = String::from_utf8(err).unwrap();
        assert!(text.starts_with("Error: boom\n"));
        assert!(text.contains("WARNING: Parameter --table is ignored"));
    }
}
