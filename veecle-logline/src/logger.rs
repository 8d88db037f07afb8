//! The log call entry point.

use std::sync::Arc;

use crate::Severity;
use crate::clock::{Clock, SystemClock};
use crate::config::LogConfig;
use crate::dispatch::Dispatcher;
use crate::error::FormatError;
use crate::line::{CallSite, LogLine, TimeOfDay};
use crate::sink::{ConsoleSink, Entry, FileSink, Sink};
use crate::template::Template;
use crate::thread::current_thread_id;

/// Renders log calls into lines and hands them to the configured sinks.
///
/// A logger owns an immutable [`LogConfig`] snapshot, a [`Clock`] and a [`Dispatcher`]. All work
/// happens synchronously on the calling thread.
///
/// # Examples
///
/// ```rust
/// use veecle_logline::sink::MemorySink;
/// use veecle_logline::{LogConfig, Logger, Severity};
///
/// let (sink, lines) = MemorySink::new();
/// let logger = Logger::builder()
///     .config(LogConfig::default().with_console(true))
///     .console_sink(sink)
///     .build();
///
/// veecle_logline::error!(logger: &logger, "disk {} is {}% full", "sda", 97);
/// veecle_logline::info!(logger: &logger, "below the threshold, not written");
///
/// let lines = lines.lock().unwrap();
/// assert_eq!(lines.len(), 1);
/// assert!(lines[0].body().ends_with("disk sda is 97% full"));
/// ```
#[derive(Debug)]
pub struct Logger {
    config: Arc<LogConfig>,
    clock: Box<dyn Clock>,
    dispatcher: Dispatcher,
}

impl Default for Logger {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Logger {
    /// A logger using `config`, the system clock, standard output and dated files.
    pub fn new(config: impl Into<Arc<LogConfig>>) -> Self {
        Self::builder().config(config).build()
    }

    /// Starts building a logger.
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// The configuration this logger writes with.
    pub fn config(&self) -> &LogConfig {
        &self.config
    }

    /// Returns whether a call at `severity` would produce any output.
    ///
    /// Callers can use this to skip rendering values for suppressed lines.
    pub fn enabled(&self, severity: Severity) -> bool {
        self.config.is_enabled(severity)
    }

    /// Logs one line.
    ///
    /// `values` are the already rendered arguments for `template`, see
    /// [`value::render`](crate::value::render). Suppressed severities return immediately without
    /// touching the template.
    ///
    /// Sink failures are never reported. The only error is [`FormatError::MissingArgument`],
    /// when `values` has fewer entries than `template` has placeholders.
    pub fn log<S>(
        &self,
        severity: Severity,
        call_site: &CallSite<'_>,
        template: &Template<'_>,
        values: &[S],
    ) -> Result<(), FormatError>
    where
        S: AsRef<str>,
    {
        if !self.enabled(severity) {
            return Ok(());
        }

        let message = template.render(values)?;

        let now = self.clock.now();
        let time = now.map_or(TimeOfDay::MIDNIGHT, |now| TimeOfDay::from(now.time()));
        let thread = self.config.include_thread_id.then(current_thread_id);
        let line = LogLine::assemble(time, severity, call_site, thread, &message);

        self.dispatcher.dispatch(&Entry {
            line: &line,
            date: now.map(|now| now.date()),
            config: &self.config,
        });

        Ok(())
    }
}

/// Builder for [`Logger`].
///
/// Unset parts default to [`LogConfig::default`], [`SystemClock`], [`ConsoleSink::stdout`] and
/// [`FileSink`].
#[derive(Debug, Default)]
#[must_use]
pub struct Builder {
    config: Option<Arc<LogConfig>>,
    clock: Option<Box<dyn Clock>>,
    console: Option<Box<dyn Sink>>,
    file: Option<Box<dyn Sink>>,
}

impl Builder {
    /// Sets the configuration snapshot.
    pub fn config(mut self, config: impl Into<Arc<LogConfig>>) -> Self {
        self.config = Some(config.into());
        self
    }

    /// Sets the source of local time.
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Some(Box::new(clock));
        self
    }

    /// Replaces the sink used when [`LogConfig::console`] is on.
    pub fn console_sink(mut self, sink: impl Sink + 'static) -> Self {
        self.console = Some(Box::new(sink));
        self
    }

    /// Replaces the sink used when [`LogConfig::file`] is on and a directory is configured.
    pub fn file_sink(mut self, sink: impl Sink + 'static) -> Self {
        self.file = Some(Box::new(sink));
        self
    }

    /// Finishes the logger.
    pub fn build(self) -> Logger {
        Logger {
            config: self.config.unwrap_or_default(),
            clock: self.clock.unwrap_or_else(|| Box::new(SystemClock)),
            dispatcher: Dispatcher::new(
                self.console
                    .unwrap_or_else(|| Box::new(ConsoleSink::stdout())),
                self.file.unwrap_or_else(|| Box::new(FileSink)),
            ),
        }
    }
}
