#![deny(missing_docs)]
//! Shared logging utilities for the ATS Tailor workspace.
//!
//! This crate provides the `tailor_*` logging macros used by the dashboard
//! core and host, plus a terminal initializer for tests. Every macro forwards
//! to the `log` facade, so callers must depend on `log` themselves.

use std::sync::Once;

/// Log target shared by every dashboard message.
pub const TARGET: &str = "ats_tailor";

/// Logs a trace-level message under the dashboard target.
#[macro_export]
macro_rules! tailor_trace {
    ($($arg:tt)*) => {{
        log::trace!(target: $crate::TARGET, $($arg)*);
    }};
}

/// Logs a debug-level message under the dashboard target.
#[macro_export]
macro_rules! tailor_debug {
    ($($arg:tt)*) => {{
        log::debug!(target: $crate::TARGET, $($arg)*);
    }};
}

/// Logs an info-level message under the dashboard target.
#[macro_export]
macro_rules! tailor_info {
    ($($arg:tt)*) => {{
        log::info!(target: $crate::TARGET, $($arg)*);
    }};
}

/// Logs a warn-level message under the dashboard target.
#[macro_export]
macro_rules! tailor_warn {
    ($($arg:tt)*) => {{
        log::warn!(target: $crate::TARGET, $($arg)*);
    }};
}

/// Logs an error-level message under the dashboard target.
#[macro_export]
macro_rules! tailor_error {
    ($($arg:tt)*) => {{
        log::error!(target: $crate::TARGET, $($arg)*);
    }};
}

/// Initializes a terminal logger for unit and integration tests.
///
/// Safe to call from every test: only the first call installs a logger, and
/// an already-installed logger from elsewhere is left in place.
pub fn initialize_for_tests() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

        // Use debug level in debug builds, info in release builds.
        let level = if cfg!(debug_assertions) {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        };

        let _ = CombinedLogger::init(vec![TermLogger::new(
            level,
            Config::default(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        )]);
    });
}
