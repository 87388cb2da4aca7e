// ============================================================================
// screenrec-core/src/external/ffmpeg_executor.rs
// ============================================================================
//
// FFMPEG EXECUTOR: Capture Process Management and Abstraction
//
// This module provides abstractions for spawning the ffmpeg capture process
// and for stopping it. The session only talks to the traits, so tests can
// swap in a scripted process.
//
// KEY COMPONENTS:
// - CaptureProcess: Trait representing a running capture
// - CaptureSpawner: Trait for starting a capture
// - FfmpegSpawner: Concrete implementation on std::process, with the binary
//   located through ffmpeg-sidecar
// - send_quit: Graceful stop by writing `q` to ffmpeg's stdin

// ---- Internal crate imports ----
use crate::error::{CoreResult, command_start_error, command_wait_error};

// ---- Standard library imports ----
use std::ffi::OsString;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Stdio};

/// Keystroke ffmpeg treats as "finish the file and exit".
pub const QUIT_COMMAND: &[u8] = b"q";

/// How a stop request was carried out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopOutcome {
    /// `q` was written to ffmpeg's stdin; it finalizes the file itself.
    QuitSent,
    /// stdin was unusable so the process was killed.
    Killed,
}

// ============================================================================
// TRAITS
// ============================================================================

/// A running capture process.
pub trait CaptureProcess {
    /// Asks the process to stop, falling back to a kill when stdin is closed.
    fn request_stop(&mut self) -> StopOutcome;

    /// Returns the exit status if the process has finished.
    fn try_wait(&mut self) -> CoreResult<Option<ExitStatus>>;

    /// Blocks until the process exits.
    fn wait(&mut self) -> CoreResult<ExitStatus>;
}

/// Something that can start a capture process.
pub trait CaptureSpawner {
    type Process: CaptureProcess;

    /// Starts `program` with `args`, stdin piped and stderr on the terminal.
    fn spawn(&self, program: &Path, args: &[OsString]) -> CoreResult<Self::Process>;
}

// ============================================================================
// GRACEFUL STOP
// ============================================================================

/// Writes the quit keystroke to ffmpeg's stdin and flushes it.
///
/// A missing stdin is reported as `BrokenPipe`, the same as a closed one.
pub fn send_quit<W: Write>(stdin: Option<&mut W>) -> io::Result<()> {
    let stdin = stdin
        .ok_or_else(|| io::Error::new(io::ErrorKind::BrokenPipe, "ffmpeg stdin is closed"))?;
    stdin.write_all(QUIT_COMMAND)?;
    stdin.flush()
}

// ============================================================================
// STD::PROCESS IMPLEMENTATION
// ============================================================================

/// Resolves the ffmpeg binary: an explicit path wins, otherwise
/// ffmpeg-sidecar's lookup (sidecar next to the executable, then `PATH`).
#[must_use]
pub fn resolve_ffmpeg_path(explicit: Option<&Path>) -> PathBuf {
    explicit
        .map(Path::to_path_buf)
        .unwrap_or_else(ffmpeg_sidecar::paths::ffmpeg_path)
}

/// Wrapper around `std::process::Child` implementing `CaptureProcess`.
#[derive(Debug)]
pub struct FfmpegChildProcess(Child);

impl CaptureProcess for FfmpegChildProcess {
    fn request_stop(&mut self) -> StopOutcome {
        let child = &mut self.0;
        match send_quit(child.stdin.as_mut()) {
            Ok(()) => {
                log::debug!("Sent quit command to ffmpeg");
                StopOutcome::QuitSent
            }
            Err(e) => {
                log::debug!("Could not write to ffmpeg stdin ({}), killing process", e);
                child.stdin = None;
                if let Err(e) = child.kill() {
                    // Already exited; the next wait reaps it.
                    log::debug!("Kill failed: {}", e);
                }
                StopOutcome::Killed
            }
        }
    }

    fn try_wait(&mut self) -> CoreResult<Option<ExitStatus>> {
        self.0
            .try_wait()
            .map_err(|e| command_wait_error("ffmpeg", e))
    }

    fn wait(&mut self) -> CoreResult<ExitStatus> {
        self.0
            .wait()
            .map_err(|e| command_wait_error("ffmpeg", e))
    }
}

/// Concrete implementation of `CaptureSpawner` on `std::process::Command`.
///
/// The argument list is passed through untouched. stdout is discarded and
/// stderr is inherited so ffmpeg's own diagnostics reach the terminal.
#[derive(Debug, Clone, Default)]
pub struct FfmpegSpawner;

impl CaptureSpawner for FfmpegSpawner {
    type Process = FfmpegChildProcess;

    fn spawn(&self, program: &Path, args: &[OsString]) -> CoreResult<Self::Process> {
        log::debug!(
            "Running: {} {}",
            program.display(),
            args.iter()
                .map(|a| a.to_string_lossy())
                .collect::<Vec<_>>()
                .join(" ")
        );

        Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::inherit())
            .spawn()
            .map(FfmpegChildProcess)
            .map_err(|e| command_start_error(program.display().to_string(), e))
    }
}
