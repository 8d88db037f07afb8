//! Logger configuration.
//!
//! [`LogConfig`] is an immutable snapshot. A [`Logger`](crate::Logger) reads it on every call and
//! never changes it; to change the configuration, build a new logger.
//!
//! Configurations can be written in TOML, every field is optional:
//!
//! ```toml
//! directory = "/var/log/app"
//! threshold = "info"
//! file_prefix = "app_"
//! file_postfix = "_v1"
//! include_thread_id = true
//! console = true
//! file = true
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::Severity;
use crate::error::ConfigError;

/// Which lines are written, and where.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    /// Directory the dated log files are created in; without one the file sink writes nothing.
    pub directory: Option<PathBuf>,

    /// The most verbose severity that is still written.
    pub threshold: Severity,

    /// Prepended to the date in log file names.
    pub file_prefix: String,

    /// Appended to the date in log file names, before the `.log` extension.
    pub file_postfix: String,

    /// Adds a `Thread #<id>` column to every line.
    pub include_thread_id: bool,

    /// Writes lines to standard output with a colored severity tag.
    pub console: bool,

    /// Appends lines to the dated log file in [`directory`](Self::directory).
    pub file: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            directory: None,
            threshold: Severity::Warning,
            file_prefix: String::new(),
            file_postfix: String::new(),
            include_thread_id: false,
            console: false,
            file: true,
        }
    }
}

impl LogConfig {
    /// Parses a configuration from TOML text.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use veecle_logline::{LogConfig, Severity};
    ///
    /// let config = LogConfig::from_toml_str(r#"
    ///     threshold = "DEBUG"
    ///     console = true
    /// "#)?;
    ///
    /// assert_eq!(config.threshold, Severity::Debug);
    /// assert!(config.console);
    /// assert!(config.file);
    /// # Ok::<(), veecle_logline::ConfigError>(())
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(ConfigError::Parse)
    }

    /// Reads and parses a TOML configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_owned(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Sets [`directory`](Self::directory).
    pub fn with_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = Some(directory.into());
        self
    }

    /// Sets [`threshold`](Self::threshold).
    pub fn with_threshold(mut self, threshold: Severity) -> Self {
        self.threshold = threshold;
        self
    }

    /// Sets [`file_prefix`](Self::file_prefix) and [`file_postfix`](Self::file_postfix).
    pub fn with_file_affixes(
        mut self,
        prefix: impl Into<String>,
        postfix: impl Into<String>,
    ) -> Self {
        self.file_prefix = prefix.into();
        self.file_postfix = postfix.into();
        self
    }

    /// Sets [`include_thread_id`](Self::include_thread_id).
    pub fn with_thread_id(mut self, include_thread_id: bool) -> Self {
        self.include_thread_id = include_thread_id;
        self
    }

    /// Sets [`console`](Self::console).
    pub fn with_console(mut self, console: bool) -> Self {
        self.console = console;
        self
    }

    /// Sets [`file`](Self::file).
    pub fn with_file(mut self, file: bool) -> Self {
        self.file = file;
        self
    }

    /// Returns whether at least one sink would write; the file sink needs a directory.
    pub fn has_output(&self) -> bool {
        self.console || (self.file && self.directory.is_some())
    }

    /// Returns whether a line of `severity` would be written anywhere.
    pub fn is_enabled(&self, severity: Severity) -> bool {
        self.has_output() && severity.is_enabled_at(self.threshold)
    }
}
