//! Error types.
//!
//! Sink I/O failures have no error type: writing a log line is best effort and never fails
//! the caller.

use std::path::PathBuf;

/// A template whose placeholder count does not match the number of supplied arguments.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateError {
    /// The template has a different number of `{}` placeholders than arguments.
    #[error("template has {placeholders} placeholder(s) but {arguments} argument(s) were supplied")]
    ArgumentCountMismatch {
        /// Number of unescaped `{}` pairs found in the template.
        placeholders: usize,
        /// Number of arguments supplied for the template.
        arguments: usize,
    },
}

/// An error raised while substituting values into a template.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatError {
    /// A placeholder was reached after every value had been consumed.
    #[error("placeholder {index} has no matching argument, only {available} supplied")]
    MissingArgument {
        /// Zero-based index of the placeholder lacking a value.
        index: usize,
        /// Number of values that were supplied.
        available: usize,
    },
}

/// An error loading a [`LogConfig`](crate::LogConfig).
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read log configuration from {path:?}")]
    Read {
        /// The file that was being read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid TOML or has unexpected fields.
    #[error("invalid log configuration")]
    Parse(#[source] toml::de::Error),
}

/// Returned by [`set_global`](crate::set_global) when a global logger has already been set.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("a global logger has already been set")]
pub struct SetGlobalError(pub(crate) ());
