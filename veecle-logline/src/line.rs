//! Assembly of a complete log line from its fields.
//!
//! A line has the shape
//!
//! ```text
//! HH:MM:SS   [Severity    ]   [Thread #N   ]file.rs:LINE<pad to 64>   function<pad to 32>   message
//! ```
//!
//! Fields are left-justified and padded with spaces to fixed widths. Overlong fields are never
//! truncated, they push the following columns to the right.

use core::fmt::{self, Write};
use core::num::NonZeroU64;

use chrono::Timelike;

use crate::Severity;

/// Separates the columns of a line.
pub const SEPARATOR: &str = "   ";

/// Width the severity name is padded to inside its brackets.
pub const SEVERITY_WIDTH: usize = 12;

/// Width the `file:line` column is padded to.
pub const LOCATION_WIDTH: usize = 64;

/// Width the function column is padded to.
pub const FUNCTION_WIDTH: usize = 32;

/// Wall-clock time of day, rendered as zero-padded `HH:MM:SS`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    /// Hour, `0..24`.
    pub hour: u8,
    /// Minute, `0..60`.
    pub minute: u8,
    /// Second, `0..60` (leap seconds are folded into 59).
    pub second: u8,
}

impl TimeOfDay {
    /// `00:00:00`, used when the local time is unavailable.
    pub const MIDNIGHT: Self = Self::new(0, 0, 0);

    /// Creates a time of day from its components.
    pub const fn new(hour: u8, minute: u8, second: u8) -> Self {
        Self {
            hour,
            minute,
            second,
        }
    }
}

impl From<chrono::NaiveTime> for TimeOfDay {
    fn from(time: chrono::NaiveTime) -> Self {
        // `Timelike` components are always below 60, the casts cannot truncate.
        Self::new(time.hour() as u8, time.minute() as u8, time.second() as u8)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let TimeOfDay {
            hour,
            minute,
            second,
        } = self;
        write!(f, "{hour:02}:{minute:02}:{second:02}")
    }
}

/// Where a log call originated.
///
/// Usually captured with [`call_site!`](crate::call_site), which fills in [`file!`], [`line!`]
/// and the enclosing function name.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct CallSite<'a> {
    /// Path of the source file, only its last segment is rendered.
    pub file: &'a str,
    /// Line number within `file`.
    pub line: u32,
    /// Name of the enclosing function.
    pub function: &'a str,
}

impl<'a> CallSite<'a> {
    /// Creates a call site from its parts.
    pub const fn new(file: &'a str, line: u32, function: &'a str) -> Self {
        Self {
            file,
            line,
            function,
        }
    }

    /// The last path segment of [`file`](Self::file).
    pub fn file_name(&self) -> &'a str {
        basename(self.file)
    }
}

/// Returns the part of `path` after the final `/` or `\`.
pub fn basename(path: &str) -> &str {
    path.rfind(['/', '\\'])
        .map_or(path, |separator| &path[separator + 1..])
}

/// A fully assembled log line.
///
/// The line is kept in three parts so sinks can decorate the severity tag, the [`Display`]
/// implementation joins them with [`SEPARATOR`].
///
/// [`Display`]: fmt::Display
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogLine {
    time: TimeOfDay,
    severity: Severity,
    body: String,
}

impl LogLine {
    /// Assembles a line.
    ///
    /// `thread` adds a `Thread #<id>` column in front of the call site when present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use veecle_logline::line::{CallSite, LogLine, TimeOfDay};
    /// use veecle_logline::Severity;
    ///
    /// let line = LogLine::assemble(
    ///     TimeOfDay::new(9, 5, 3),
    ///     Severity::Error,
    ///     &CallSite::new("src/net/socket.rs", 42, "connect"),
    ///     None,
    ///     "refused",
    /// );
    ///
    /// assert!(line.to_string().starts_with("09:05:03   [Error       ]   socket.rs:42 "));
    /// assert!(line.to_string().ends_with("connect                            refused"));
    /// ```
    pub fn assemble(
        time: TimeOfDay,
        severity: Severity,
        call_site: &CallSite<'_>,
        thread: Option<NonZeroU64>,
        message: &str,
    ) -> Self {
        let mut body = String::with_capacity(
            LOCATION_WIDTH + FUNCTION_WIDTH + 2 * SEPARATOR.len() + message.len(),
        );

        // Writing into a `String` cannot fail.
        if let Some(thread) = thread {
            let _ = write!(body, "Thread #{thread}{SEPARATOR}");
        }

        let location = format!("{}:{}", call_site.file_name(), call_site.line);
        let _ = write!(
            body,
            "{location:<LOCATION_WIDTH$}{SEPARATOR}{function:<FUNCTION_WIDTH$}{SEPARATOR}{message}",
            function = call_site.function,
        );

        Self {
            time,
            severity,
            body,
        }
    }

    /// The time of day the line was assembled for.
    pub fn time(&self) -> TimeOfDay {
        self.time
    }

    /// The severity the line was logged at.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// The bracketed, padded severity tag, e.g. `[Error       ]`.
    pub fn tag(&self) -> String {
        format!("[{:<SEVERITY_WIDTH$}]", self.severity)
    }

    /// Everything after the severity tag: optional thread, call site, function and message.
    pub fn body(&self) -> &str {
        &self.body
    }
}

impl fmt::Display for LogLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{SEPARATOR}{}{SEPARATOR}{}",
            self.time,
            self.tag(),
            self.body
        )
    }
}
