//! Implementation of a recording run.
//!
//! Turns parsed arguments into a `RecordingConfig`, prints the plan, drives
//! the recording session and prints the summary.

use crate::cli::Cli;
use crate::error::{CliErrorContext, CliResult};
use crate::output;

use screenrec_core::{
    FfmpegSpawner, RecordingConfig, RecordingOutcome, RecordingSession, StopRequest,
    default_output_path,
};

use log::debug;
use std::fs;
use std::sync::mpsc::Receiver;

/// Creates the recording configuration from CLI arguments.
pub fn build_config(args: &Cli) -> CliResult<RecordingConfig> {
    let output_path = args.output.clone().unwrap_or_else(default_output_path);

    let mut config = RecordingConfig::new(output_path);
    config.duration_secs = args.duration;
    config.framerate = args.framerate;
    config.crf = args.quality;
    config.ffmpeg_path = args.ffmpeg.clone();
    config.validate()?;

    Ok(config)
}

/// Runs one recording and reports the result.
pub fn run_record(args: &Cli, stop_rx: &Receiver<StopRequest>) -> CliResult<RecordingOutcome> {
    let config = build_config(args)?;

    // ffmpeg does not create missing directories for its output.
    if let Some(parent) = config.output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).cli_with_context(|| {
            format!("Failed to create output directory '{}'", parent.display())
        })?;
    }

    debug!("Capture platform: {}", config.platform);
    output::print_recording_plan(&config);

    let outcome = RecordingSession::new(&FfmpegSpawner)
        .with_stop_listener(output::print_stopping)
        .run(&config, stop_rx)?;

    output::print_summary(&outcome);
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn test_build_config_from_args() {
        let cli = Cli::try_parse_from([
            "screenrec", "-o", "out/demo.mp4", "-d", "12", "-f", "25", "-q", "28", "--ffmpeg",
            "/opt/ffmpeg",
        ])
        .unwrap();
        let config = build_config(&cli).unwrap();
        assert_eq!(config.output_path, PathBuf::from("out/demo.mp4"));
        assert_eq!(config.duration_secs, Some(12));
        assert_eq!(config.framerate, 25);
        assert_eq!(config.crf, 28);
        assert_eq!(config.ffmpeg_path, Some(PathBuf::from("/opt/ffmpeg")));
    }

    #[test]
    fn test_build_config_generates_output_name() {
        let cli = Cli::try_parse_from(["screenrec"]).unwrap();
        let config = build_config(&cli).unwrap();
        let name = config.output_path.to_string_lossy().into_owned();
        assert!(name.starts_with("screen_") && name.ends_with(".mp4"));
    }
}
