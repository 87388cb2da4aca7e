// ============================================================================
// screenrec-core/src/error.rs
// ============================================================================
//
// ERROR HANDLING: Custom Error Types for screenrec-core
//
// This module defines the error type used throughout the core library and a
// few helper constructors for the process-related variants.
//
// KEY COMPONENTS:
// - CoreError: Enum of everything that can go wrong around a recording
// - CoreResult: Type alias for Result<T, CoreError>
// - Helper functions for creating command errors

// ---- External crate imports ----
use thiserror::Error;

// ---- Standard library imports ----
use std::io;

// ============================================================================
// ERROR TYPES
// ============================================================================

/// Errors produced by the screenrec core library.
///
/// Failures inside ffmpeg itself are not errors at this level: they surface
/// as an unsuccessful exit status on the finished recording.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to start {cmd}: {source}")]
    CommandStart {
        cmd: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed waiting for {cmd}: {source}")]
    CommandWait {
        cmd: String,
        #[source]
        source: io::Error,
    },

    #[error("Could not install stop handler: {0}")]
    SignalHandler(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Result type for screenrec-core operations.
pub type CoreResult<T> = std::result::Result<T, CoreError>;

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Creates a `CommandStart` error for a program that could not be launched.
pub fn command_start_error(cmd: impl Into<String>, source: io::Error) -> CoreError {
    CoreError::CommandStart {
        cmd: cmd.into(),
        source,
    }
}

/// Creates a `CommandWait` error for a child whose status could not be read.
pub fn command_wait_error(cmd: impl Into<String>, source: io::Error) -> CoreError {
    CoreError::CommandWait {
        cmd: cmd.into(),
        source,
    }
}
