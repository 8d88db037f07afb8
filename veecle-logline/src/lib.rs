//! # `veecle-logline`
//!
//! Renders log calls into fixed-column text lines and writes them to the console and to one log
//! file per day.
//!
//! ## Features
//!
//! - **Templates**: Positional `{}` placeholders, with the argument count checked at compile time
//! - **Values**: Anything implementing [`value::Loggable`] is converted to text by a fixed
//!   precedence of conversions
//! - **Filtering**: Lines more verbose than the configured [`Severity`] threshold are skipped
//!   before any value is rendered
//! - **Sinks**: Colored console output and dated log files, each can be turned off or replaced
//!
//! ## Line Format
//!
//! ```text
//! 14:03:07   [Warning     ]   worker.rs:88                                                       poll                               queue is 93% full
//! ```
//!
//! The time of day is followed by the padded severity tag, an optional `Thread #<id>` column, the
//! `file:line` call site padded to 64 characters, the enclosing function padded to 32 characters
//! and finally the message.
//!
//! ## Basic Usage
//!
//! Install a logger once at startup:
//!
//! ```rust
//! use veecle_logline::{LogConfig, Logger, Severity};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! # let directory = tempfile::tempdir()?;
//! let config = LogConfig::default()
//!     .with_directory(directory.path())
//!     .with_threshold(Severity::Information)
//!     .with_file_affixes("app_", "")
//!     .with_console(true);
//!
//! veecle_logline::set_global(Logger::new(config))?;
//! # Ok(())
//! # }
//! ```
//!
//! Then use the logging macros anywhere:
//!
//! ```rust
//! use veecle_logline::{error, info};
//!
//! let port = 8080;
//! info!("listening on port {}", port);
//! error!("{} of {} workers failed to start", 2, 8);
//! ```
//!
//! Loggers can also be passed explicitly, e.g. to collect lines in tests:
//!
//! ```rust
//! use veecle_logline::sink::MemorySink;
//! use veecle_logline::{LogConfig, Logger, warn};
//!
//! let (sink, lines) = MemorySink::new();
//! let logger = Logger::builder()
//!     .config(LogConfig::default().with_console(true))
//!     .console_sink(sink)
//!     .build();
//!
//! warn!(logger: &logger, "{} retries left", 1);
//! assert_eq!(lines.lock().unwrap().len(), 1);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod clock;
pub mod config;
pub mod dispatch;
mod error;
mod global;
pub mod line;
mod logger;
#[doc(hidden)]
pub mod macro_helpers;
mod macros;
mod severity;
pub mod sink;
pub mod template;
pub mod thread;
pub mod value;

pub use config::LogConfig;
pub use error::{ConfigError, FormatError, SetGlobalError, TemplateError};
pub use global::{global, set_global};
pub use logger::{Builder, Logger};
pub use severity::Severity;
pub use template::Template;
