//! Severity levels used to gate and label log lines.
//!
//! Levels are totally ordered by increasing verbosity:
//!
//! [`Disabled`](Severity::Disabled) < [`Critical`](Severity::Critical) <
//! [`Error`](Severity::Error) < [`Warning`](Severity::Warning) <
//! [`Information`](Severity::Information) < [`Debug`](Severity::Debug) <
//! [`Trace`](Severity::Trace)
//!
//! A line is written when its severity is less than or equal to the configured threshold.
//! A threshold of [`Severity::Disabled`] suppresses everything.

use core::convert::Infallible;
use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// The importance of a log line.
///
/// # Examples
///
/// ```rust
/// use veecle_logline::Severity;
///
/// assert!(Severity::Error < Severity::Warning);
/// assert_eq!(Severity::parse("WARN"), Severity::Warning);
/// assert_eq!(Severity::parse("bogus"), Severity::Disabled);
/// assert_eq!(Severity::Information.to_string(), "Information");
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum Severity {
    /// Sentinel below every level, turns all output off when used as a threshold.
    #[default]
    Disabled,

    /// Failures the application likely cannot recover from.
    Critical,

    /// Serious errors that still allow the application to continue.
    Error,

    /// Hazardous or unexpected situations.
    Warning,

    /// Useful operational information.
    Information,

    /// Lower priority diagnostic information.
    Debug,

    /// Very verbose tracing information.
    Trace,
}

impl Severity {
    /// Every level, ordered from least to most verbose.
    pub const ALL: [Severity; 7] = [
        Severity::Disabled,
        Severity::Critical,
        Severity::Error,
        Severity::Warning,
        Severity::Information,
        Severity::Debug,
        Severity::Trace,
    ];

    /// Parses a level name, ignoring ASCII case.
    ///
    /// Besides the canonical names, `warn` and `info` are accepted as aliases. Surrounding
    /// whitespace is not trimmed. Anything unrecognized yields [`Severity::Disabled`], so a typo
    /// in a configured threshold silently turns logging off.
    pub fn parse(text: &str) -> Self {
        const NAMES: [(&str, Severity); 8] = [
            ("trace", Severity::Trace),
            ("debug", Severity::Debug),
            ("information", Severity::Information),
            ("info", Severity::Information),
            ("warning", Severity::Warning),
            ("warn", Severity::Warning),
            ("error", Severity::Error),
            ("critical", Severity::Critical),
        ];

        NAMES
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(text))
            .map_or(Severity::Disabled, |(_, severity)| *severity)
    }

    /// Returns the canonical capitalized name.
    ///
    /// [`Severity::Disabled`] has no display name of its own and renders as `Unknown`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Severity::Trace => "Trace",
            Severity::Debug => "Debug",
            Severity::Information => "Information",
            Severity::Warning => "Warning",
            Severity::Error => "Error",
            Severity::Critical => "Critical",
            Severity::Disabled => "Unknown",
        }
    }

    /// Returns whether a line of this severity passes the given threshold.
    ///
    /// Nothing passes a [`Severity::Disabled`] threshold, and a [`Severity::Disabled`] line never
    /// passes any threshold.
    pub fn is_enabled_at(self, threshold: Severity) -> bool {
        self != Severity::Disabled && threshold != Severity::Disabled && self <= threshold
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `pad` so width and alignment flags apply to the name.
        f.pad(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Severity::parse(s))
    }
}

impl From<&str> for Severity {
    fn from(value: &str) -> Self {
        Severity::parse(value)
    }
}

impl From<String> for Severity {
    fn from(value: String) -> Self {
        Severity::parse(&value)
    }
}

impl From<Severity> for &'static str {
    fn from(value: Severity) -> Self {
        value.as_str()
    }
}
