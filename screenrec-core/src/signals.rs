//! Stop requests from termination signals.
//!
//! SIGINT and SIGTERM (Ctrl+C, Ctrl+Break and console close on Windows) are
//! turned into [`StopRequest`] messages on a channel. The handler thread
//! never touches the ffmpeg process; the session that owns the child reads
//! the channel and decides how to stop it.

use crate::error::{CoreError, CoreResult};
use std::sync::mpsc::{self, Receiver};

/// A termination signal was delivered to the recorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StopRequest;

/// Installs the process-wide stop handler and returns the receiving end.
///
/// Only one handler can exist per process; a second call fails with
/// `CoreError::SignalHandler`.
pub fn install_stop_handler() -> CoreResult<Receiver<StopRequest>> {
    let (tx, rx) = mpsc::channel();
    ctrlc::set_handler(move || {
        // The receiver is gone once the session has finished.
        let _ = tx.send(StopRequest);
    })
    .map_err(|e| CoreError::SignalHandler(e.to_string()))?;
    log::debug!("Stop handler installed for SIGINT/SIGTERM");
    Ok(rx)
}
