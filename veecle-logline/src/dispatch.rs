//! Routing of assembled lines to the enabled sinks.

use crate::config::LogConfig;
use crate::sink::{ConsoleSink, Entry, FileSink, Sink};

/// Sends each line to the console and file sinks the configuration turns on.
///
/// The file sink is only used when a directory is configured.
#[derive(Debug)]
pub struct Dispatcher {
    console: Box<dyn Sink>,
    file: Box<dyn Sink>,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new(Box::new(ConsoleSink::stdout()), Box::new(FileSink))
    }
}

impl Dispatcher {
    /// Creates a dispatcher with custom sinks in the console and file slots.
    pub fn new(console: Box<dyn Sink>, file: Box<dyn Sink>) -> Self {
        Self { console, file }
    }

    /// Writes `entry` to every enabled sink.
    ///
    /// Does nothing when the threshold is [`Disabled`](crate::Severity::Disabled), when the
    /// line's severity does not pass the threshold, or when both sinks are off.
    pub fn dispatch(&self, entry: &Entry<'_>) {
        let config: &LogConfig = entry.config;
        if !config.is_enabled(entry.line.severity()) {
            return;
        }

        if config.console {
            self.console.write(entry);
        }

        if config.file && config.directory.is_some() {
            self.file.write(entry);
        }
    }
}
