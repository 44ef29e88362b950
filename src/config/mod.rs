//! Configuration model for envsweep.
//!
//! This module defines the Config struct that represents `.envsweep.yaml`.
//! It supports forward-compatible YAML parsing (unknown fields are ignored),
//! sensible defaults for every field, and validation of patterns up front so
//! a bad regex or glob fails before any directory is touched.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::Config;
pub use types::CONFIG_FILE_NAME;
