// ============================================================================
// screenrec-cli/src/output.rs
// ============================================================================
//
// TERMINAL OUTPUT: Banner, Status Lines and Recording Summary
//
// Everything the user sees goes through the `log` macros at info level so
// that it also lands in the log file when one is configured. Colors are only
// applied when the terminal supports them and NO_COLOR is unset; the file
// logger strips them again.

// ---- External crate imports ----
use console::style;
use log::{info, warn};
use owo_colors::OwoColorize;

// ---- Internal crate imports ----
use screenrec_core::{
    OutputStatus, RecordingConfig, RecordingOutcome, StopOutcome, format_bytes, format_duration,
};

/// Width of the `=` rules around headings.
const RULE_WIDTH: usize = 40;

/// Width labels are padded to in status lines.
const LABEL_WIDTH: usize = 11;

/// Check if color should be used (respects NO_COLOR and terminal support)
pub fn should_use_color() -> bool {
    std::env::var_os("NO_COLOR").is_none()
        && supports_color::on(supports_color::Stream::Stderr).is_some()
}

/// Print a heading framed by rules
pub fn print_heading(title: &str) {
    let rule = "=".repeat(RULE_WIDTH);
    if should_use_color() {
        info!("{}", rule.blue());
        info!("  {}", style(title).bold());
        info!("{}", rule.blue());
    } else {
        info!("{rule}");
        info!("  {title}");
        info!("{rule}");
    }
}

/// Print an aligned `label: value` line
pub fn print_status(label: &str, value: &str) {
    let padded = format!("{:<width$}", format!("{label}:"), width = LABEL_WIDTH);
    if should_use_color() {
        info!("{}{}", padded.cyan(), value);
    } else {
        info!("{padded}{value}");
    }
}

/// Renders the duration setting the way the plan shows it. Zero means no
/// limit, same as `None`.
#[must_use]
pub fn describe_duration(duration_secs: Option<u32>) -> String {
    match duration_secs.filter(|secs| *secs > 0) {
        Some(secs) => format!("{secs}s"),
        None => "until Ctrl+C".to_string(),
    }
}

/// Prints the banner and the settings about to be used.
pub fn print_recording_plan(config: &RecordingConfig) {
    print_heading("Screen Recorder");
    info!("");
    print_status("Output", &config.output_path.display().to_string());
    print_status("Framerate", &format!("{} fps", config.framerate));
    print_status("Quality", &format!("CRF {}", config.crf));
    print_status("Duration", &describe_duration(config.duration_secs));
    info!("");
    info!("Starting recording...");
    if config.duration_secs.filter(|secs| *secs > 0).is_none() {
        info!("Press Ctrl+C to stop");
    }
    info!("");
}

/// Tells the user a stop request is being handled.
pub fn print_stopping(outcome: StopOutcome) {
    info!("");
    info!("Stopping recording...");
    if outcome == StopOutcome::Killed {
        warn!("ffmpeg input was closed, terminated the process");
    }
}

/// Prints the completion block: saved path and size, or a warning.
pub fn print_summary(outcome: &RecordingOutcome) {
    info!("");
    print_heading("Recording finished");
    print_status("Saved as", &outcome.output_path.display().to_string());
    print_status("Elapsed", &format_duration(outcome.elapsed));

    match outcome.output {
        OutputStatus::Present { size_bytes } => {
            print_status("File size", &format_bytes(size_bytes));
        }
        OutputStatus::Missing => {
            warn!("The output file was not created!");
        }
    }

    if !outcome.succeeded() && outcome.stop_requests == 0 {
        warn!("ffmpeg exited with {}", outcome.exit_status);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_duration() {
        assert_eq!(describe_duration(Some(10)), "10s");
        assert_eq!(describe_duration(None), "until Ctrl+C");
        assert_eq!(describe_duration(Some(0)), "until Ctrl+C");
    }
}
