//! Destinations for assembled log lines.
//!
//! A [`Sink`] receives every line the [`Dispatcher`](crate::dispatch::Dispatcher) routes to it.
//! Sinks are best effort: they cannot report failures, and any I/O error is dropped after being
//! traced at `debug` level.
//!
//! # Built-in Sinks
//!
//! - [`ConsoleSink`] - Writes to standard output with a colored severity tag
//! - [`FileSink`] - Appends to a log file per calendar day
//! - [`MemorySink`] - Collects lines in memory for testing purposes

use std::io::Write;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};

use chrono::{Datelike, NaiveDate};
use colored::{ColoredString, Colorize};

use crate::config::LogConfig;
use crate::line::{LogLine, SEPARATOR};
use crate::Severity;

/// One line on its way to a sink, with the context needed to place it.
#[derive(Copy, Clone, Debug)]
pub struct Entry<'a> {
    /// The assembled line.
    pub line: &'a LogLine,
    /// The local date the line was logged on, if known.
    pub date: Option<NaiveDate>,
    /// The configuration the line was logged under.
    pub config: &'a LogConfig,
}

/// Trait for writing log lines to a destination.
///
/// # Examples
///
/// ```rust
/// use veecle_logline::sink::{Entry, Sink};
///
/// #[derive(Debug)]
/// struct StderrSink;
///
/// impl Sink for StderrSink {
///     fn write(&self, entry: &Entry<'_>) {
///         eprintln!("{}", entry.line);
///     }
/// }
/// ```
pub trait Sink: core::fmt::Debug + Send + Sync {
    /// Writes one line, ignoring any failure.
    fn write(&self, entry: &Entry<'_>);
}

/// Writes lines to a console stream, coloring the severity tag.
///
/// Coloring follows the [`colored`] crate's global control, which honors `NO_COLOR`,
/// `CLICOLOR` and `CLICOLOR_FORCE`.
#[derive(Debug)]
pub struct ConsoleSink<W = std::io::Stdout> {
    writer: Mutex<W>,
}

impl ConsoleSink {
    /// A sink writing to [`std::io::stdout`].
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::stdout()
    }
}

impl<W> ConsoleSink<W> {
    /// A sink writing to `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Consumes the sink and returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

/// Applies the console color of `severity` to `tag`.
///
/// Trace and [`Severity::Disabled`] are left uncolored.
pub fn paint(tag: &str, severity: Severity) -> ColoredString {
    match severity {
        Severity::Debug => tag.cyan(),
        Severity::Information => tag.green(),
        Severity::Warning => tag.yellow(),
        Severity::Error => tag.red(),
        Severity::Critical => tag.on_red(),
        Severity::Trace | Severity::Disabled => tag.normal(),
    }
}

impl<W> Sink for ConsoleSink<W>
where
    W: Write + Send + core::fmt::Debug,
{
    fn write(&self, entry: &Entry<'_>) {
        let line = entry.line;
        let tag = paint(&line.tag(), line.severity());

        // A poisoned lock only means another thread panicked mid-write, keep logging.
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let result = writeln!(
            writer,
            "{}{SEPARATOR}{tag}{SEPARATOR}{}",
            line.time(),
            line.body()
        )
        .and_then(|()| writer.flush());

        if let Err(error) = result {
            tracing::debug!(?error, "failed to write log line to console");
        }
    }
}

/// Returns the log file name for `date`.
///
/// The name is `<prefix><YYYY>_<MM>_<DD><postfix>.log`, or `<prefix>General<postfix>.log` when
/// the date is unknown.
///
/// # Examples
///
/// ```rust
/// use chrono::NaiveDate;
/// use veecle_logline::sink::log_file_name;
///
/// let date = NaiveDate::from_ymd_opt(2025, 7, 9);
/// assert_eq!(log_file_name("app_", "_v1", date), "app_2025_07_09_v1.log");
/// assert_eq!(log_file_name("app_", "_v1", None), "app_General_v1.log");
/// ```
pub fn log_file_name(prefix: &str, postfix: &str, date: Option<NaiveDate>) -> String {
    match date {
        Some(date) => format!(
            "{prefix}{:04}_{:02}_{:02}{postfix}.log",
            date.year(),
            date.month(),
            date.day()
        ),
        None => format!("{prefix}General{postfix}.log"),
    }
}

/// Returns the full path of the log file for `entry`, if a directory is configured.
pub fn log_file_path(entry: &Entry<'_>) -> Option<PathBuf> {
    let directory = entry.config.directory.as_ref()?;
    Some(directory.join(log_file_name(
        &entry.config.file_prefix,
        &entry.config.file_postfix,
        entry.date,
    )))
}

/// Appends lines to a log file per calendar day inside the configured directory.
///
/// Every line opens, appends to and closes the file on its own; no handle is kept between lines.
/// Concurrent writers to the same file are not serialized. The directory must already exist.
#[derive(Copy, Clone, Debug, Default)]
pub struct FileSink;

impl Sink for FileSink {
    fn write(&self, entry: &Entry<'_>) {
        let Some(path) = log_file_path(entry) else {
            tracing::debug!("no log directory configured, skipping file sink");
            return;
        };

        let result = fs_err::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .and_then(|mut file| {
                writeln!(file, "{}", entry.line)?;
                file.flush()
            });

        if let Err(error) = result {
            tracing::debug!(%error, "failed to append log line to file");
        }
    }
}

/// A sink collecting lines in memory.
///
/// Useful for tests, or to show recent lines inside an application.
///
/// # Examples
///
/// ```rust
/// use veecle_logline::sink::MemorySink;
///
/// let (sink, lines) = MemorySink::new();
/// // Install `sink` on a logger, then inspect `lines`.
/// assert!(lines.lock().unwrap().is_empty());
/// # drop(sink);
/// ```
#[derive(Debug)]
pub struct MemorySink {
    /// Shared vector storing every written line.
    pub lines: Arc<Mutex<Vec<LogLine>>>,
}

impl MemorySink {
    /// Creates a sink and returns it with a handle to the line storage.
    pub fn new() -> (Self, Arc<Mutex<Vec<LogLine>>>) {
        let lines = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                lines: lines.clone(),
            },
            lines,
        )
    }
}

impl Sink for MemorySink {
    fn write(&self, entry: &Entry<'_>) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(entry.line.clone());
    }
}

/// A sink discarding everything.
#[derive(Copy, Clone, Debug, Default)]
pub struct NullSink;

impl Sink for NullSink {
    fn write(&self, _: &Entry<'_>) {}
}
