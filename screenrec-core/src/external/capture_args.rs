//! FFmpeg screen capture argument builder
//!
//! Maps the recording parameters onto the argument list handed to ffmpeg.
//! The input driver is chosen per platform; encoding settings are fixed
//! (libx264, `veryfast`, yuv420p) apart from the CRF value.

use crate::platform::Platform;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Video codec used for every recording.
pub const VIDEO_CODEC: &str = "libx264";

/// x264 preset. Screen capture has to keep up in real time.
pub const ENCODER_PRESET: &str = "veryfast";

/// Pixel format for broad player compatibility.
pub const PIXEL_FORMAT: &str = "yuv420p";

/// Builder for the ffmpeg arguments of a screen capture
#[derive(Debug, Clone)]
pub struct CaptureArgsBuilder {
    output: PathBuf,
    framerate: u32,
    crf: u8,
    duration_secs: Option<u32>,
    platform: Platform,
}

impl CaptureArgsBuilder {
    /// Creates a builder for the given output file using default settings
    /// for the current platform
    #[must_use]
    pub fn new(output: &Path) -> Self {
        Self {
            output: output.to_path_buf(),
            framerate: crate::config::DEFAULT_FRAMERATE,
            crf: crate::config::DEFAULT_CRF,
            duration_secs: None,
            platform: Platform::current(),
        }
    }

    /// Sets the capture framerate
    #[must_use]
    pub fn with_framerate(mut self, framerate: u32) -> Self {
        self.framerate = framerate;
        self
    }

    /// Sets the x264 constant rate factor
    #[must_use]
    pub fn with_crf(mut self, crf: u8) -> Self {
        self.crf = crf;
        self
    }

    /// Limits the recording length. `None` or zero records until stopped.
    #[must_use]
    pub fn with_duration(mut self, duration_secs: Option<u32>) -> Self {
        self.duration_secs = duration_secs;
        self
    }

    /// Overrides the platform used to pick the input driver
    #[must_use]
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Builds the ordered argument list. The output path is always last
    /// and passed through byte for byte.
    #[must_use]
    pub fn build(self) -> Vec<OsString> {
        let mut args: Vec<OsString> = [
            "-y",
            "-f",
            self.platform.input_driver(),
            "-framerate",
            &self.framerate.to_string(),
            "-i",
            self.platform.input_source(),
            "-c:v",
            VIDEO_CODEC,
            "-preset",
            ENCODER_PRESET,
            "-crf",
            &self.crf.to_string(),
            "-pix_fmt",
            PIXEL_FORMAT,
        ]
        .into_iter()
        .map(OsString::from)
        .collect();

        if let Some(secs) = self.duration_secs.filter(|secs| *secs > 0) {
            args.push("-t".into());
            args.push(secs.to_string().into());
        }

        args.push(self.output.into_os_string());
        args
    }
}

/// Builds the ffmpeg capture arguments in one call.
#[must_use]
pub fn build_capture_args(
    output: &Path,
    framerate: u32,
    crf: u8,
    duration_secs: Option<u32>,
    platform: Platform,
) -> Vec<OsString> {
    CaptureArgsBuilder::new(output)
        .with_framerate(framerate)
        .with_crf(crf)
        .with_duration(duration_secs)
        .with_platform(platform)
        .build()
}
