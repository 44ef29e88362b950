//! Command implementations for envsweep.
//!
//! envsweep has a single command, the sweep; this module is where it is
//! dispatched from.

mod sweep;

use crate::cli::Cli;
use crate::error::Result;

/// Run the command described by `cli`.
pub fn dispatch(cli: &Cli) -> Result<()> {
    sweep::cmd_sweep(cli)
}
