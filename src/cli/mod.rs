//! Command-line interface for imadic.

mod commands;

pub use commands::{is_verbose, run};
