//! Logging Infrastructure
//!
//! Structured logging to stdout, or to a daily rolling file when a log
//! directory is configured. `RUST_LOG` directives take precedence over the
//! configured level.

use std::path::Path;

use tracing::Level;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Log file prefix inside the log directory
const LOG_FILE_PREFIX: &str = "quote-server";

/// Initialize the logger with defaults (info, text, stdout)
pub fn init_logger() {
    init_logger_with_file("info", false, None);
}

/// Initialize the logger with optional JSON format and file output
///
/// The directory is created when missing; if that fails, logs go to stdout.
pub fn init_logger_with_file(level: &str, json_format: bool, log_dir: Option<&str>) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| level_filter(level));

    let (writer, ansi) = match log_dir.and_then(open_log_dir) {
        Some(dir) => (
            BoxMakeWriter::new(tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX)),
            false,
        ),
        None => (BoxMakeWriter::new(std::io::stdout), true),
    };

    let (json_layer, text_layer) = if json_format {
        let layer = fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .with_writer(writer);
        (Some(layer), None)
    } else {
        let layer = fmt::layer()
            .with_target(false)
            .with_thread_ids(false)
            .with_ansi(ansi)
            .with_writer(writer);
        (None, Some(layer))
    };

    if let Err(e) = tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .try_init()
    {
        eprintln!("Logger already initialized: {e}");
    }
}

/// Filter for a plain level name; unknown names mean `info`
fn level_filter(level: &str) -> EnvFilter {
    EnvFilter::default().add_directive(LevelFilter::from_level(parse_level(level)).into())
}

fn parse_level(level: &str) -> Level {
    level.trim().parse().unwrap_or(Level::INFO)
}

fn open_log_dir(dir: &str) -> Option<&Path> {
    let path = Path::new(dir);
    match std::fs::create_dir_all(path) {
        Ok(()) => Some(path),
        Err(e) => {
            eprintln!("Cannot create log directory {dir}, logging to stdout: {e}");
            None
        }
    }
}
