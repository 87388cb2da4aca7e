// ============================================================================
// screenrec-core/src/config.rs
// ============================================================================
//
// CONFIGURATION: Recording Parameters
//
// This module defines the configuration of a single recording and the
// defaults used when the caller leaves a setting unspecified.
//
// KEY COMPONENTS:
// - RecordingConfig: Output path, duration, framerate, CRF, platform
// - Default constants shared with the CLI
// - Timestamped default output naming

// ---- Internal crate imports ----
use crate::error::{CoreError, CoreResult};
use crate::platform::Platform;

// ---- Standard library imports ----
use std::ffi::OsString;
use std::path::PathBuf;

// ============================================================================
// DEFAULTS
// ============================================================================

/// Default capture framerate in frames per second.
pub const DEFAULT_FRAMERATE: u32 = 30;

/// Default x264 constant rate factor.
pub const DEFAULT_CRF: u8 = 20;

/// Highest CRF x264 accepts for 8-bit output.
pub const MAX_CRF: u8 = 51;

/// Highest framerate accepted for screen capture.
pub const MAX_FRAMERATE: u32 = 240;

/// Returns the default output file name for a recording started now,
/// e.g. `screen_20240601_123045.mp4`.
#[must_use]
pub fn default_output_path() -> PathBuf {
    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    PathBuf::from(format!("screen_{timestamp}.mp4"))
}

// ============================================================================
// RECORDING CONFIG
// ============================================================================

/// Parameters of one recording.
#[derive(Debug, Clone)]
pub struct RecordingConfig {
    /// Where ffmpeg writes the video.
    pub output_path: PathBuf,

    /// Recording length in seconds. `None` records until a stop request.
    pub duration_secs: Option<u32>,

    /// Capture framerate.
    pub framerate: u32,

    /// x264 quality, 0-51, lower is better.
    pub crf: u8,

    /// Platform deciding the capture input driver.
    pub platform: Platform,

    /// Explicit ffmpeg binary. When unset the sidecar lookup is used.
    pub ffmpeg_path: Option<PathBuf>,
}

impl RecordingConfig {
    /// Creates a configuration with default settings for `output_path`.
    #[must_use]
    pub fn new(output_path: PathBuf) -> Self {
        Self {
            output_path,
            duration_secs: None,
            framerate: DEFAULT_FRAMERATE,
            crf: DEFAULT_CRF,
            platform: Platform::current(),
            ffmpeg_path: None,
        }
    }

    /// Creates a configuration that writes to a timestamped file in the
    /// current directory.
    #[must_use]
    pub fn with_default_output() -> Self {
        Self::new(default_output_path())
    }

    /// Checks the numeric settings against the ranges ffmpeg accepts.
    pub fn validate(&self) -> CoreResult<()> {
        if self.framerate == 0 || self.framerate > MAX_FRAMERATE {
            return Err(CoreError::Config(format!(
                "framerate must be between 1 and {MAX_FRAMERATE}, got {}",
                self.framerate
            )));
        }
        if self.crf > MAX_CRF {
            return Err(CoreError::Config(format!(
                "CRF must be between 0 and {MAX_CRF}, got {}",
                self.crf
            )));
        }
        if self.output_path.as_os_str().is_empty() {
            return Err(CoreError::Config("output path is empty".to_string()));
        }
        Ok(())
    }

    /// Builds the ffmpeg argument list for this configuration.
    #[must_use]
    pub fn capture_args(&self) -> Vec<OsString> {
        crate::external::build_capture_args(
            &self.output_path,
            self.framerate,
            self.crf,
            self.duration_secs,
            self.platform,
        )
    }
}
