//! The process-wide logger used by the logging macros.

use std::sync::{LazyLock, OnceLock};

use crate::Logger;
use crate::error::SetGlobalError;

static GLOBAL: OnceLock<Logger> = OnceLock::new();

// Default configuration without a directory: only used until `set_global` succeeds.
static FALLBACK: LazyLock<Logger> = LazyLock::new(Logger::default);

/// Installs `logger` as the process-wide logger.
///
/// Can only succeed once; later calls return an error and the first logger stays installed.
///
/// # Examples
///
/// ```rust
/// use veecle_logline::{LogConfig, Logger, Severity};
///
/// let config = LogConfig::default()
///     .with_threshold(Severity::Information)
///     .with_console(true);
///
/// veecle_logline::set_global(Logger::new(config))?;
/// veecle_logline::info!("service started on port {}", 8080);
///
/// assert!(veecle_logline::set_global(Logger::default()).is_err());
/// # Ok::<(), veecle_logline::SetGlobalError>(())
/// ```
pub fn set_global(logger: Logger) -> Result<(), SetGlobalError> {
    GLOBAL.set(logger).map_err(|_| SetGlobalError(()))
}

/// Returns the process-wide logger.
///
/// Before [`set_global`] succeeds this is a logger with [`LogConfig::default`], which writes
/// nothing because no log directory is configured and the console is off.
///
/// [`LogConfig::default`]: crate::LogConfig::default
pub fn global() -> &'static Logger {
    GLOBAL.get().unwrap_or_else(|| LazyLock::force(&FALLBACK))
}
