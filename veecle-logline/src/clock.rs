//! Sources of local wall-clock time.
//!
//! The logger reads the clock once per line: the time of day goes into the line, the date picks
//! the log file.

use chrono::NaiveDateTime;

/// Provides the current local date and time.
pub trait Clock: core::fmt::Debug + Send + Sync {
    /// Returns the current local date and time, or `None` if it cannot be determined.
    ///
    /// Without a time the line is stamped `00:00:00` and written to the `General` log file.
    fn now(&self) -> Option<NaiveDateTime>;
}

/// Reads the system clock in the local time zone.
#[derive(Copy, Clone, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Option<NaiveDateTime> {
        Some(chrono::Local::now().naive_local())
    }
}

/// Always returns the same instant, for deterministic output.
///
/// # Examples
///
/// ```rust
/// use chrono::NaiveDate;
/// use veecle_logline::clock::{Clock, FixedClock};
///
/// let instant = NaiveDate::from_ymd_opt(2025, 7, 9)
///     .unwrap()
///     .and_hms_opt(8, 30, 0)
///     .unwrap();
/// assert_eq!(FixedClock::at(instant).now(), Some(instant));
/// assert_eq!(FixedClock::unavailable().now(), None);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FixedClock(Option<NaiveDateTime>);

impl FixedClock {
    /// A clock stopped at `instant`.
    pub const fn at(instant: NaiveDateTime) -> Self {
        Self(Some(instant))
    }

    /// A clock that never knows the time.
    pub const fn unavailable() -> Self {
        Self(None)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Option<NaiveDateTime> {
        self.0
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::{Clock, SystemClock};

    #[test]
    fn system_clock_is_available() {
        assert!(SystemClock.now().is_some());
    }
}
