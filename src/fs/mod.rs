//! Filesystem utilities for envsweep.
//!
//! Atomic writes keep requirements snapshots and run reports from ever being
//! observed half-written.

pub mod atomic;

pub use atomic::atomic_write;
pub use atomic::atomic_write_file;
