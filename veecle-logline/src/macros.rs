/// Logs a line at the given severity.
///
/// The template is a string literal with one `{}` per value; `{{` and `}}` produce literal
/// braces. The placeholder count is checked against the number of values at compile time. Values
/// are rendered through [`Loggable`](crate::value::Loggable), and only when the logger would write
/// the line.
///
/// Without a `logger:` argument the [global logger](crate::global) is used.
///
/// # Examples
///
/// ```rust
/// use veecle_logline::{Logger, Severity, log};
///
/// let logger = Logger::default();
/// let attempts = 3;
///
/// log!(Severity::Warning, "retrying, attempt {} of {}", attempts, 5);
/// log!(logger: &logger, Severity::Error, "literal {{braces}} and a {}", "value");
/// ```
///
/// A mismatched argument count does not compile:
///
/// ```rust,compile_fail
/// use veecle_logline::{Severity, log};
///
/// log!(Severity::Error, "{} and {}", 1);
/// ```
#[macro_export]
macro_rules! log {
    (logger: $logger:expr, $severity:expr, $template:literal $(, $value:expr)* $(,)?) => {{
        const TEMPLATE: $crate::template::Template<'static> =
            $crate::template::Template::checked($template, $crate::count_args!($($value),*));

        let logger: &$crate::Logger = $logger;
        let severity: $crate::Severity = $severity;
        if logger.enabled(severity) {
            // Argument parity is checked by `TEMPLATE`, rendering cannot fail.
            let _ = logger.log::<::std::borrow::Cow<'_, str>>(
                severity,
                &$crate::call_site!(),
                &TEMPLATE,
                &[$($crate::value::render(&$value)),*],
            );
        }
    }};
    ($severity:expr, $template:literal $(, $value:expr)* $(,)?) => {
        $crate::log!(logger: $crate::global(), $severity, $template $(, $value)*)
    };
}

/// Logs a trace-level line, the most verbose severity.
///
/// ```rust
/// use veecle_logline::trace;
///
/// trace!("entering poll loop");
/// ```
#[macro_export]
macro_rules! trace {
    (logger: $logger:expr, $($args:tt)*) => {
        $crate::log!(logger: $logger, $crate::Severity::Trace, $($args)*)
    };
    ($($args:tt)*) => {
        $crate::log!($crate::Severity::Trace, $($args)*)
    };
}

/// Logs a debug-level line.
///
/// ```rust
/// use veecle_logline::debug;
///
/// let frame = [0x01_u8, 0x02];
/// debug!("decoded {} bytes", frame.len());
/// ```
#[macro_export]
macro_rules! debug {
    (logger: $logger:expr, $($args:tt)*) => {
        $crate::log!(logger: $logger, $crate::Severity::Debug, $($args)*)
    };
    ($($args:tt)*) => {
        $crate::log!($crate::Severity::Debug, $($args)*)
    };
}

/// Logs an information-level line.
///
/// ```rust
/// use veecle_logline::info;
///
/// info!("listening on {}", std::net::Ipv4Addr::LOCALHOST);
/// ```
#[macro_export]
macro_rules! info {
    (logger: $logger:expr, $($args:tt)*) => {
        $crate::log!(logger: $logger, $crate::Severity::Information, $($args)*)
    };
    ($($args:tt)*) => {
        $crate::log!($crate::Severity::Information, $($args)*)
    };
}

/// Logs a warning-level line.
///
/// ```rust
/// use veecle_logline::warn;
///
/// let used = 0.93;
/// warn!("disk usage at {}", used);
/// ```
#[macro_export]
macro_rules! warn {
    (logger: $logger:expr, $($args:tt)*) => {
        $crate::log!(logger: $logger, $crate::Severity::Warning, $($args)*)
    };
    ($($args:tt)*) => {
        $crate::log!($crate::Severity::Warning, $($args)*)
    };
}

/// Logs an error-level line.
///
/// ```rust
/// use veecle_logline::error;
///
/// let path = std::path::Path::new("/etc/app.toml");
/// error!("cannot read {}", path);
/// ```
#[macro_export]
macro_rules! error {
    (logger: $logger:expr, $($args:tt)*) => {
        $crate::log!(logger: $logger, $crate::Severity::Error, $($args)*)
    };
    ($($args:tt)*) => {
        $crate::log!($crate::Severity::Error, $($args)*)
    };
}

/// Logs a critical-level line, the most severe.
///
/// ```rust
/// use veecle_logline::critical;
///
/// critical!("watchdog expired after {}", std::time::Duration::from_secs(5));
/// ```
#[macro_export]
macro_rules! critical {
    (logger: $logger:expr, $($args:tt)*) => {
        $crate::log!(logger: $logger, $crate::Severity::Critical, $($args)*)
    };
    ($($args:tt)*) => {
        $crate::log!($crate::Severity::Critical, $($args)*)
    };
}

/// Captures the [`CallSite`](crate::line::CallSite) of the macro invocation.
///
/// ```rust
/// fn connect() -> veecle_logline::line::CallSite<'static> {
///     veecle_logline::call_site!()
/// }
///
/// assert_eq!(connect().function, "connect");
/// ```
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::line::CallSite::new(::core::file!(), ::core::line!(), $crate::function_name!())
    };
}

/// Expands to the name of the enclosing function, without its module path.
///
/// Closures and async blocks report the function they are defined in.
#[doc(hidden)]
#[macro_export]
macro_rules! function_name {
    () => {{
        fn here() {}
        $crate::macro_helpers::enclosing_function(::core::any::type_name_of_val(&here))
    }};
}

/// Counts comma-separated expressions.
#[doc(hidden)]
#[macro_export]
macro_rules! count_args {
    () => { 0usize };
    ($head:expr $(, $tail:expr)*) => { 1usize + $crate::count_args!($($tail),*) };
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::cell::Cell;
    use std::sync::{Arc, Mutex};

    use pretty_assertions::assert_eq;

    use crate::clock::FixedClock;
    use crate::line::LogLine;
    use crate::sink::MemorySink;
    use crate::{LogConfig, Logger, Severity};

    fn logger(threshold: Severity) -> (Logger, Arc<Mutex<Vec<LogLine>>>) {
        let (sink, lines) = MemorySink::new();
        let logger = Logger::builder()
            .config(
                LogConfig::default()
                    .with_threshold(threshold)
                    .with_console(true),
            )
            .clock(FixedClock::unavailable())
            .console_sink(sink)
            .build();
        (logger, lines)
    }

    fn messages(lines: &Mutex<Vec<LogLine>>) -> Vec<String> {
        lines
            .lock()
            .unwrap()
            .iter()
            .map(|line| line.body().rsplit("   ").next().unwrap().to_owned())
            .collect()
    }

    #[test]
    fn counts_arguments() {
        assert_eq!(count_args!(), 0);
        assert_eq!(count_args!(a), 1);
        assert_eq!(count_args!(1 + 2, "x", [3, 4]), 3);
    }

    #[test]
    fn renders_mixed_values() {
        let (logger, lines) = logger(Severity::Trace);
        let name = String::from("pump");

        crate::info!(logger: &logger, "{} at {} rpm, running: {}", name, 1200, true);
        crate::debug!(logger: &logger, "{{raw}} {}", 'x');

        assert_eq!(
            messages(&lines),
            ["pump at 1200 rpm, running: true", "{raw} x"]
        );
    }

    #[test]
    fn severity_macros_tag_lines() {
        let (logger, lines) = logger(Severity::Trace);

        crate::trace!(logger: &logger, "t");
        crate::debug!(logger: &logger, "d");
        crate::info!(logger: &logger, "i");
        crate::warn!(logger: &logger, "w");
        crate::error!(logger: &logger, "e");
        crate::critical!(logger: &logger, "c");

        let severities: Vec<Severity> = lines
            .lock()
            .unwrap()
            .iter()
            .map(LogLine::severity)
            .collect();
        assert_eq!(
            severities,
            [
                Severity::Trace,
                Severity::Debug,
                Severity::Information,
                Severity::Warning,
                Severity::Error,
                Severity::Critical,
            ]
        );
    }

    #[test]
    fn suppressed_values_are_not_evaluated() {
        let (logger, lines) = logger(Severity::Error);
        let evaluated = Cell::new(0);
        let count = || {
            evaluated.set(evaluated.get() + 1);
            evaluated.get()
        };

        crate::debug!(logger: &logger, "call {}", count());
        assert_eq!(evaluated.get(), 0);

        crate::error!(logger: &logger, "call {}", count());
        assert_eq!(evaluated.get(), 1);
        assert_eq!(messages(&lines), ["call 1"]);
    }

    #[test]
    fn records_call_site() {
        let (logger, lines) = logger(Severity::Trace);

        let line = line!() + 1;
        crate::log!(logger: &logger, Severity::Warning, "here");

        let body = lines.lock().unwrap()[0].body().to_owned();
        let expected = format!(
            "{:<64}   {:<32}   here",
            format!("macros.rs:{line}"),
            "records_call_site"
        );
        assert_eq!(body, expected);
    }

    #[test]
    fn temporaries_live_long_enough() {
        let (logger, lines) = logger(Severity::Trace);

        crate::error!(logger: &logger, "{} / {}", String::from("owned"), format!("{}", 7));

        assert_eq!(messages(&lines), ["owned / 7"]);
    }

    #[test]
    fn trailing_comma_is_accepted() {
        let (logger, lines) = logger(Severity::Trace);

        crate::critical!(logger: &logger, "{}", 1,);

        assert_eq!(messages(&lines), ["1"]);
    }
}
