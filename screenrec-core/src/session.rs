// ============================================================================
// screenrec-core/src/session.rs
// ============================================================================
//
// RECORDING SESSION: ffmpeg Process Lifecycle
//
// This module runs one recording from start to finish: it spawns ffmpeg with
// the capture arguments, turns stop requests into graceful stops while the
// process runs, waits for it to exit and inspects the output file.
//
// KEY COMPONENTS:
// - RecordingSession: Drives a capture through a CaptureSpawner
// - RecordingOutcome: Exit status, stop history and output file status
//
// The session thread is the only owner of the child process. Signal
// delivery reaches it as messages on a channel, polled between
// `try_wait` calls.

// ---- Internal crate imports ----
use crate::config::RecordingConfig;
use crate::error::CoreResult;
use crate::external::{CaptureProcess, CaptureSpawner, StopOutcome, resolve_ffmpeg_path};
use crate::report::{OutputStatus, inspect_output};
use crate::signals::StopRequest;

// ---- Standard library imports ----
use std::path::PathBuf;
use std::process::ExitStatus;
use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::time::{Duration, Instant};

/// How long to wait for a stop request before checking on ffmpeg again.
pub const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Result of a finished recording.
#[derive(Debug, Clone)]
pub struct RecordingOutcome {
    pub output_path: PathBuf,
    pub exit_status: ExitStatus,
    /// Number of stop requests received while ffmpeg was running.
    pub stop_requests: usize,
    /// How the last stop request was handled, if there was one.
    pub stop_outcome: Option<StopOutcome>,
    pub elapsed: Duration,
    pub output: OutputStatus,
}

impl RecordingOutcome {
    /// True when ffmpeg exited successfully.
    #[must_use]
    pub fn succeeded(&self) -> bool {
        self.exit_status.success()
    }

    /// True when the recording should count as done.
    ///
    /// ffmpeg shares the terminal's process group, so Ctrl+C reaches it as
    /// well and it exits non-zero after finalizing the file. A stopped
    /// recording that left a file behind is therefore still a success.
    #[must_use]
    pub fn completed(&self) -> bool {
        self.succeeded() || (self.stop_requests > 0 && self.output.exists())
    }
}

/// Callback invoked after each stop request has been handled.
pub type StopListener<'a> = Box<dyn Fn(StopOutcome) + 'a>;

/// Runs recordings through a [`CaptureSpawner`].
pub struct RecordingSession<'a, S: CaptureSpawner> {
    spawner: &'a S,
    poll_interval: Duration,
    on_stop: Option<StopListener<'a>>,
}

impl<'a, S: CaptureSpawner> RecordingSession<'a, S> {
    pub fn new(spawner: &'a S) -> Self {
        Self {
            spawner,
            poll_interval: POLL_INTERVAL,
            on_stop: None,
        }
    }

    /// Registers a callback for stop requests, e.g. to tell the user the
    /// recording is being finalized.
    #[must_use]
    pub fn with_stop_listener(mut self, listener: impl Fn(StopOutcome) + 'a) -> Self {
        self.on_stop = Some(Box::new(listener));
        self
    }

    #[must_use]
    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    /// Records according to `config` until ffmpeg exits.
    ///
    /// Every message on `stop_rx` triggers a graceful stop attempt. If the
    /// sending side disconnects the session simply waits for ffmpeg.
    pub fn run(
        &self,
        config: &RecordingConfig,
        stop_rx: &Receiver<StopRequest>,
    ) -> CoreResult<RecordingOutcome> {
        let program = resolve_ffmpeg_path(config.ffmpeg_path.as_deref());
        let args = config.capture_args();

        log::debug!(
            "Starting capture on {} at {} fps, CRF {}",
            config.platform,
            config.framerate,
            config.crf
        );

        let started = Instant::now();
        let mut process = self.spawner.spawn(&program, &args)?;

        let mut stop_requests = 0;
        let mut stop_outcome = None;

        let exit_status = loop {
            if let Some(status) = process.try_wait()? {
                break status;
            }

            match stop_rx.recv_timeout(self.poll_interval) {
                Ok(StopRequest) => {
                    stop_requests += 1;
                    let outcome = process.request_stop();
                    log::debug!("Stop request {} handled: {:?}", stop_requests, outcome);
                    if let Some(listener) = &self.on_stop {
                        listener(outcome);
                    }
                    stop_outcome = Some(outcome);
                }
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => break process.wait()?,
            }
        };

        let elapsed = started.elapsed();
        log::debug!("ffmpeg exited with {} after {:?}", exit_status, elapsed);

        Ok(RecordingOutcome {
            output_path: config.output_path.clone(),
            exit_status,
            stop_requests,
            stop_outcome,
            elapsed,
            output: inspect_output(&config.output_path),
        })
    }
}
