//! Exit code constants for the envsweep CLI.
//!
//! - 0: Success
//! - 1: Any handled failure (permission denied, pip not found, other errors)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Handled failure: the run was aborted and a message was printed.
pub const FAILURE: i32 = 1;
