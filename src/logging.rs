//! Log output setup
//!
//! The dashboard owns the terminal while it runs, so its logs go to a file
//! in the data directory. CLI subcommands log to stderr, leaving stdout for
//! their reports.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::Subscriber;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt};

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "dsa_tracker=info";

const LOG_FILE: &str = "dsa-tracker.log";

/// Where log lines are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogOutput {
    Stderr,
    /// Append to the log file inside this directory
    File(PathBuf),
}

/// Path of the log file inside `dir`
pub fn log_file_path(dir: &Path) -> PathBuf {
    dir.join(LOG_FILE)
}

fn open_log_file(dir: &Path) -> Result<File> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {:?}", dir))?;
    let path = log_file_path(dir);
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {:?}", path))
}

/// Build a subscriber writing to `output`
pub fn build_subscriber(
    output: &LogOutput,
    filter: EnvFilter,
) -> Result<Box<dyn Subscriber + Send + Sync>> {
    let registry = tracing_subscriber::registry().with(filter);

    Ok(match output {
        LogOutput::Stderr => {
            Box::new(registry.with(fmt::layer().with_target(false).with_writer(io::stderr)))
        }
        LogOutput::File(dir) => {
            let file = open_log_file(dir)?;
            Box::new(
                registry.with(
                    fmt::layer().with_target(false).with_ansi(false).with_writer(Mutex::new(file)),
                ),
            )
        }
    })
}

/// Install the global subscriber, honouring `RUST_LOG`
pub fn init(output: &LogOutput) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing::subscriber::set_global_default(build_subscriber(output, filter)?)
        .context("Failed to install log subscriber")
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn file_output_writes_plain_lines_to_data_dir() {
        let dir = TempDir::new().unwrap();
        let logs = dir.path().join("data");
        let subscriber = build_subscriber(&LogOutput::File(logs.clone()), EnvFilter::new("info")).unwrap();

        tracing::subscriber::with_default(subscriber, || {
            tracing::error!("Error handling key: disk full");
        });

        let text = std::fs::read_to_string(log_file_path(&logs)).unwrap();
        assert!(text.contains("Error handling key: disk full"));
        assert!(!text.contains('\u{1b}'));
    }

    #[test]
    fn file_output_appends() {
        let dir = TempDir::new().unwrap();
        for message in ["first", "second"] {
            let subscriber =
                build_subscriber(&LogOutput::File(dir.path().into()), EnvFilter::new("info")).unwrap();
            tracing::subscriber::with_default(subscriber, || tracing::warn!("{message}"));
        }

        let text = std::fs::read_to_string(log_file_path(dir.path())).unwrap();
        assert!(text.contains("first"));
        assert!(text.contains("second"));
    }

    #[test]
    fn filter_drops_lower_levels() {
        let dir = TempDir::new().unwrap();
        let subscriber =
            build_subscriber(&LogOutput::File(dir.path().into()), EnvFilter::new("warn")).unwrap();

        tracing::subscriber::with_default(subscriber, || tracing::info!("quiet"));

        let text = std::fs::read_to_string(log_file_path(dir.path())).unwrap();
        assert!(!text.contains("quiet"));
    }
}
