//! Exit code constants for the CLI application.

/// Success exit code (standard Unix convention).
pub const SUCCESS: i32 = 0;

/// Any reported error: invalid input, bad configuration, failed run.
pub const ERROR: i32 = 2;
