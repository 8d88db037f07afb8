#![expect(missing_docs, reason = "tests")]

use std::sync::{Arc, LazyLock, Mutex};

use pretty_assertions::assert_eq;
use serial_test::serial;
use veecle_logline::clock::FixedClock;
use veecle_logline::line::LogLine;
use veecle_logline::sink::MemorySink;
use veecle_logline::{LogConfig, Logger, Severity, critical, debug, info, warn};

/// Installs the global logger once for this test binary and returns its line buffer.
fn install() -> Arc<Mutex<Vec<LogLine>>> {
    static LINES: LazyLock<Arc<Mutex<Vec<LogLine>>>> = LazyLock::new(|| {
        let (sink, lines) = MemorySink::new();
        let logger = Logger::builder()
            .config(
                LogConfig::default()
                    .with_threshold(Severity::Information)
                    .with_console(true)
                    .with_file(false),
            )
            .clock(FixedClock::unavailable())
            .console_sink(sink)
            .build();
        veecle_logline::set_global(logger).expect("global logger was not set yet");
        lines
    });

    let lines = Arc::clone(&LINES);
    lines.lock().unwrap().clear();
    lines
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
#[serial]
fn macros_use_global_logger() {
    let lines = install();

    info!("started {} workers", 4);
    debug!("too verbose for the threshold");
    warn!("queue at {}%", 93);
    critical!("shutting down");

    assert_eq!(
        messages(&lines),
        ["started 4 workers", "queue at 93%", "shutting down"]
    );
}

#[test]
#[serial]
fn global_logger_is_set_once() {
    let lines = install();

    assert!(veecle_logline::set_global(Logger::default()).is_err());
    assert_eq!(
        veecle_logline::global().config().threshold,
        Severity::Information
    );

    info!("still the first logger");
    assert_eq!(messages(&lines), ["still the first logger"]);
}
