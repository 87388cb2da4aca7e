// ============================================================================
// screenrec-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TOOLS: Interactions with the ffmpeg Command-Line Tool
//
// This module encapsulates everything that touches ffmpeg: building its
// argument list and starting, stopping and reaping the process. Process
// handling sits behind traits so the recording session can be tested
// without a real ffmpeg.

// ============================================================================
// SUBMODULES
// ============================================================================

/// Contains the platform-aware ffmpeg capture argument builder
pub mod capture_args;

/// Contains traits and implementations for running the ffmpeg process
pub mod ffmpeg_executor;

#[cfg(test)]
pub(crate) mod mocks;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use capture_args::{CaptureArgsBuilder, build_capture_args};
pub use ffmpeg_executor::{
    CaptureProcess, CaptureSpawner, FfmpegChildProcess, FfmpegSpawner, QUIT_COMMAND, StopOutcome,
    resolve_ffmpeg_path, send_quit,
};
