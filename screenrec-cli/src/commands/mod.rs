//! Command implementations for the CLI.

/// Module containing the implementation of a recording run.
pub mod record;
