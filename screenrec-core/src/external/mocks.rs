// screenrec-core/src/external/mocks.rs

// --- Mocking Infrastructure (for testing) ---

use super::{CaptureProcess, CaptureSpawner, StopOutcome};
use crate::error::{CoreResult, command_start_error};
use std::cell::RefCell;
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;
use std::rc::Rc;

#[cfg(unix)]
pub fn exit_status(code: i32) -> ExitStatus {
    use std::os::unix::process::ExitStatusExt;
    ExitStatus::from_raw(code << 8)
}

#[cfg(windows)]
pub fn exit_status(code: i32) -> ExitStatus {
    use std::os::windows::process::ExitStatusExt;
    ExitStatus::from_raw(code as u32)
}

/// What a mock capture did, shared with the test that created it.
#[derive(Debug, Default)]
pub struct MockLog {
    pub spawned: Vec<(PathBuf, Vec<OsString>)>,
    pub quits_written: usize,
    pub kills: usize,
    pub polls: usize,
}

/// Scripted stand-in for a running ffmpeg.
pub struct MockProcess {
    log: Rc<RefCell<MockLog>>,
    /// Exit on its own after this many polls (a `-t` limit running out).
    exit_after_polls: Option<usize>,
    stdin_open: bool,
    exit: Option<ExitStatus>,
    /// File to create when the process exits normally.
    writes_output: Option<PathBuf>,
}

impl MockProcess {
    fn finish(&mut self, status: ExitStatus) {
        if status.success() {
            if let Some(path) = &self.writes_output {
                std::fs::write(path, vec![0u8; 2048]).expect("write mock output");
            }
        }
        self.exit = Some(status);
    }
}

impl CaptureProcess for MockProcess {
    fn request_stop(&mut self) -> StopOutcome {
        if self.stdin_open {
            self.log.borrow_mut().quits_written += 1;
            self.finish(exit_status(0));
            StopOutcome::QuitSent
        } else {
            self.log.borrow_mut().kills += 1;
            self.exit = Some(exit_status(255));
            StopOutcome::Killed
        }
    }

    fn try_wait(&mut self) -> CoreResult<Option<ExitStatus>> {
        let polls = {
            let mut log = self.log.borrow_mut();
            log.polls += 1;
            log.polls
        };
        if self.exit.is_none() && self.exit_after_polls.is_some_and(|n| polls >= n) {
            self.finish(exit_status(0));
        }
        Ok(self.exit)
    }

    fn wait(&mut self) -> CoreResult<ExitStatus> {
        if self.exit.is_none() {
            self.finish(exit_status(0));
        }
        Ok(self.exit.unwrap_or_else(|| exit_status(0)))
    }
}

/// Mock implementation of `CaptureSpawner`.
#[derive(Clone, Default)]
pub struct MockSpawner {
    pub log: Rc<RefCell<MockLog>>,
    pub exit_after_polls: Option<usize>,
    pub stdin_closed: bool,
    pub writes_output: Option<PathBuf>,
    pub fail_to_start: bool,
}

impl MockSpawner {
    pub fn new() -> Self {
        Default::default()
    }
}

impl CaptureSpawner for MockSpawner {
    type Process = MockProcess;

    fn spawn(&self, program: &Path, args: &[OsString]) -> CoreResult<Self::Process> {
        if self.fail_to_start {
            return Err(command_start_error(
                program.display().to_string(),
                io::Error::new(io::ErrorKind::NotFound, "not found"),
            ));
        }
        self.log
            .borrow_mut()
            .spawned
            .push((program.to_path_buf(), args.to_vec()));
        Ok(MockProcess {
            log: Rc::clone(&self.log),
            exit_after_polls: self.exit_after_polls,
            stdin_open: !self.stdin_closed,
            exit: None,
            writes_output: self.writes_output.clone(),
        })
    }
}
