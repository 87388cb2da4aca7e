// screenrec-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::Parser;
use screenrec_core::{DEFAULT_CRF, DEFAULT_FRAMERATE};
use std::path::PathBuf;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "Record the screen with ffmpeg",
    long_about = "Records the screen by running ffmpeg with the capture driver for this platform. \
                  Without --duration the recording runs until Ctrl+C, which asks ffmpeg to \
                  finish the file cleanly.",
    after_help = "Examples:\n  \
                  screenrec                        Record until Ctrl+C\n  \
                  screenrec --duration 10          Record 10 seconds\n  \
                  screenrec -o demo.mp4 -d 30      Record 30 seconds to demo.mp4"
)]
pub struct Cli {
    /// Output file (defaults to screen_YYYYMMDD_HHMMSS.mp4)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Recording time in seconds (defaults to until Ctrl+C)
    #[arg(
        short = 'd',
        long = "duration",
        value_name = "SECONDS",
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub duration: Option<u32>,

    /// Capture framerate
    #[arg(
        short = 'f',
        long = "framerate",
        value_name = "FPS",
        default_value_t = DEFAULT_FRAMERATE,
        value_parser = clap::value_parser!(u32).range(1..=240)
    )]
    pub framerate: u32,

    /// Quality as x264 CRF 0-51, lower is better
    #[arg(
        short = 'q',
        long = "quality",
        value_name = "CRF",
        default_value_t = DEFAULT_CRF,
        value_parser = clap::value_parser!(u8).range(0..=51)
    )]
    pub quality: u8,

    /// Optional: ffmpeg binary to run instead of the one found on PATH
    #[arg(long = "ffmpeg", value_name = "PATH", env = "SCREENREC_FFMPEG")]
    pub ffmpeg: Option<PathBuf>,

    /// Optional: Directory for a log file of this recording
    #[arg(short = 'l', long = "log-dir", value_name = "LOG_DIR", env = "SCREENREC_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}
