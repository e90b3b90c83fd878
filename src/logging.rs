//! Tracing setup: stdout plus one log file per launch under `.riskdesk/logs`.
//!
//! Old launch files are removed before the new one is opened so the
//! directory never holds more than [`KEEP_LOG_FILES`] files.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::SystemTime;

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Registry, fmt, prelude::*};

use crate::app_dirs;

/// How many log files the logs directory may hold, this launch included.
pub const KEEP_LOG_FILES: usize = 10;

static FILE_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Errors raised while setting up logging.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// The logs directory could not be resolved or created.
    #[error(transparent)]
    LogDir(#[from] app_dirs::AppDirError),
    /// The logs directory could not be scanned or pruned.
    #[error("Failed to manage log files in {dir}: {source}")]
    LogFiles {
        /// Logs directory.
        dir: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
    /// Another global tracing subscriber is already installed.
    #[error(transparent)]
    Install(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Install the global subscriber. Idempotent; callers treat a returned error
/// as "run without logging" rather than a startup failure.
pub fn init() -> Result<(), LoggingError> {
    if FILE_GUARD.get().is_some() {
        return Ok(());
    }
    let dir = app_dirs::logs_dir()?;
    // Leave room for this launch's file.
    let removed = prune_logs(&dir, KEEP_LOG_FILES - 1).map_err(|source| {
        LoggingError::LogFiles {
            dir: dir.clone(),
            source,
        }
    })?;

    let file_name = launch_file_name(local_now());
    let appender = tracing_appender::rolling::never(&dir, &file_name);
    let (file_writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let timer = wall_clock_timer();
    let subscriber = Registry::default()
        .with(filter)
        .with(fmt::layer().with_timer(timer.clone()).with_writer(std::io::stdout))
        .with(fmt::layer().with_ansi(false).with_timer(timer).with_writer(file_writer));
    tracing::subscriber::set_global_default(subscriber)?;
    let _ = FILE_GUARD.set(guard);

    tracing::info!(
        "Logging to {} ({removed} old file(s) pruned)",
        dir.join(file_name).display()
    );
    Ok(())
}

/// File name for this launch, e.g. `riskdesk-20240305-093000.log`.
fn launch_file_name(now: OffsetDateTime) -> String {
    format!(
        "riskdesk-{:04}{:02}{:02}-{:02}{:02}{:02}.log",
        now.year(),
        u8::from(now.month()),
        now.day(),
        now.hour(),
        now.minute(),
        now.second()
    )
}

/// Delete the oldest `.log` files until at most `keep` remain. Returns how
/// many were removed.
fn prune_logs(dir: &Path, keep: usize) -> Result<usize, std::io::Error> {
    let mut logs: Vec<(SystemTime, PathBuf)> = fs::read_dir(dir)?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "log"))
        .map(|path| {
            let modified = fs::metadata(&path)
                .and_then(|meta| meta.modified())
                .unwrap_or(SystemTime::UNIX_EPOCH);
            (modified, path)
        })
        .collect();
    if logs.len() <= keep {
        return Ok(0);
    }
    logs.sort_by_key(|(modified, _)| *modified);
    let excess = logs.len() - keep;
    for (_, path) in logs.drain(..excess) {
        fs::remove_file(path)?;
    }
    Ok(excess)
}

fn wall_clock_timer() -> fmt::time::OffsetTime<&'static [BorrowedFormatItem<'static>]> {
    const FORMAT: &[BorrowedFormatItem<'_>] =
        format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
    fmt::time::OffsetTime::new(offset, FORMAT)
}

fn local_now() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{thread, time::Duration};
    use tempfile::tempdir;

    #[test]
    fn launch_file_name_is_compact_and_prefixed() {
        let fixed = OffsetDateTime::from_unix_timestamp(1_700_000_000).unwrap();
        assert_eq!(launch_file_name(fixed), "riskdesk-20231114-221320.log");
    }

    #[test]
    fn prune_is_a_no_op_under_the_limit() {
        let dir = tempdir().unwrap();
        for idx in 0..3 {
            fs::write(dir.path().join(format!("run-{idx}.log")), b"x").unwrap();
        }
        assert_eq!(prune_logs(dir.path(), 9).unwrap(), 0);
    }

    #[test]
    fn prune_drops_the_oldest_files_first() {
        let dir = tempdir().unwrap();
        for idx in 0..12 {
            fs::write(dir.path().join(format!("run-{idx:02}.log")), b"x").unwrap();
            thread::sleep(Duration::from_millis(10));
        }
        fs::write(dir.path().join("notes.txt"), b"kept").unwrap();

        assert_eq!(prune_logs(dir.path(), 9).unwrap(), 3);
        let mut remaining: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(Result::ok)
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .filter(|name| name.ends_with(".log"))
            .collect();
        remaining.sort();
        assert_eq!(remaining.len(), 9);
        assert_eq!(remaining[0], "run-03.log");
        assert!(dir.path().join("notes.txt").exists());
    }
}
