// ============================================================================
// screenrec-cli/src/logging.rs
// ============================================================================
//
// LOGGING SETUP: Console and Optional File Output
//
// The CLI logs through the standard `log` facade with `fern` as the backend.
// Info messages are the user-facing output and are printed bare on stderr;
// warnings, errors and debug lines get a prefix. When a log directory is
// given, the same records are written to a timestamped file with ANSI
// escapes removed.
//
// USAGE:
// - default: Info level
// - --verbose: Debug level, including the full ffmpeg invocation

// ---- External crate imports ----
use log::LevelFilter;
use owo_colors::OwoColorize;

// ---- Internal crate imports ----
use crate::error::{CliErrorContext, CliResult};
use crate::output::should_use_color;
use screenrec_core::CoreError;

// ---- Standard library imports ----
use std::fs;
use std::path::{Path, PathBuf};

/// Returns the current local timestamp formatted as "YYYYMMDD_HHMMSS".
///
/// # Example
/// ```
/// let log_filename = format!("screenrec_{}.log", screenrec_cli::logging::get_timestamp());
/// // Result: "screenrec_20240601_123045.log"
/// ```
pub fn get_timestamp() -> String {
    chrono::Local::now().format("%Y%m%d_%H%M%S").to_string()
}

/// Formats a record for the console.
fn console_line(level: log::Level, message: &str, color: bool) -> String {
    match level {
        log::Level::Info => message.to_string(),
        log::Level::Warn if color => format!("{} {}", "WARNING:".yellow().bold(), message),
        log::Level::Warn => format!("WARNING: {message}"),
        log::Level::Error if color => format!("{} {}", "Error:".bright_red().bold(), message),
        log::Level::Error => format!("Error: {message}"),
        log::Level::Debug | log::Level::Trace if color => {
            format!("{} {}", "[debug]".dimmed(), message)
        }
        log::Level::Debug | log::Level::Trace => format!("[debug] {message}"),
    }
}

/// Formats a record for the log file, without color codes.
fn file_line(level: log::Level, message: &str) -> String {
    let plain = strip_ansi_escapes::strip_str(message);
    format!(
        "{} [{}] {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        level,
        plain
    )
}

/// Initializes logging. Returns the log file path when one was created.
pub fn init_logging(verbose: bool, log_dir: Option<&Path>) -> CliResult<Option<PathBuf>> {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let color = should_use_color();

    let console = fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{}",
                console_line(record.level(), &message.to_string(), color)
            ))
        })
        .chain(std::io::stderr());

    let mut dispatch = fern::Dispatch::new()
        .level(level)
        .level_for("ffmpeg_sidecar", LevelFilter::Warn)
        .chain(console);

    let mut log_file = None;
    if let Some(dir) = log_dir {
        fs::create_dir_all(dir).cli_with_context(|| {
            format!("Failed to create log directory '{}'", dir.display())
        })?;
        let path = dir.join(format!("screenrec_{}.log", get_timestamp()));
        let file = fern::log_file(&path)
            .cli_with_context(|| format!("Failed to open log file '{}'", path.display()))?;

        dispatch = dispatch.chain(
            fern::Dispatch::new()
                .format(|out, message, record| {
                    out.finish(format_args!(
                        "{}",
                        file_line(record.level(), &message.to_string())
                    ))
                })
                .chain(file),
        );
        log_file = Some(path);
    }

    dispatch
        .apply()
        .map_err(|e| CoreError::Config(format!("Logger already initialized: {e}")))?;

    if let Some(path) = &log_file {
        log::debug!("Logging to {}", path.display());
    }
    Ok(log_file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_format() {
        let ts = get_timestamp();
        assert_eq!(ts.len(), 15);
        assert_eq!(&ts[8..9], "_");
        assert!(ts.chars().filter(|c| *c != '_').all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_console_line_plain() {
        assert_eq!(console_line(log::Level::Info, "Starting recording...", false), "Starting recording...");
        assert_eq!(console_line(log::Level::Warn, "missing", false), "WARNING: missing");
        assert_eq!(console_line(log::Level::Error, "boom", false), "Error: boom");
        assert_eq!(console_line(log::Level::Debug, "args", false), "[debug] args");
    }

    #[test]
    fn test_file_line_strips_color() {
        let colored = format!("{}", "File size:".cyan());
        let line = file_line(log::Level::Info, &colored);
        assert!(line.ends_with("[INFO] File size:"));
        assert!(!line.contains('\u{1b}'));
    }
}
