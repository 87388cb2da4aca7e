//! Core library for recording the screen with ffmpeg.
//!
//! This crate builds the platform-specific ffmpeg capture invocation, runs it
//! as a child process that can be stopped gracefully from a signal handler,
//! and inspects the file it produced.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use screenrec_core::{FfmpegSpawner, RecordingConfig, RecordingSession, install_stop_handler};
//!
//! let mut config = RecordingConfig::with_default_output();
//! config.duration_secs = Some(10);
//! config.validate().unwrap();
//!
//! let stop_rx = install_stop_handler().unwrap();
//! let outcome = RecordingSession::new(&FfmpegSpawner)
//!     .run(&config, &stop_rx)
//!     .unwrap();
//! println!("saved {} ({:?})", outcome.output_path.display(), outcome.output);
//! ```

pub mod config;
pub mod error;
pub mod external;
pub mod platform;
pub mod report;
pub mod session;
pub mod signals;
pub mod utils;

// Re-exports for public API
pub use config::{
    DEFAULT_CRF, DEFAULT_FRAMERATE, MAX_CRF, MAX_FRAMERATE, RecordingConfig, default_output_path,
};
pub use error::{CoreError, CoreResult};
pub use external::{
    CaptureArgsBuilder, CaptureProcess, CaptureSpawner, FfmpegSpawner, StopOutcome,
    build_capture_args,
};
pub use platform::Platform;
pub use report::{OutputStatus, inspect_output};
pub use session::{RecordingOutcome, RecordingSession, StopListener};
pub use signals::{StopRequest, install_stop_handler};
pub use utils::{format_bytes, format_duration};
