#![deny(missing_docs)]
//! Shared logging utilities for the estimator workspace.
//!
//! This crate provides the `eta_*` logging macros used across the codebase
//! and a minimal test initializer for the global logger. Every message is
//! prefixed with the polling tick it was emitted from, so a log of a long
//! session can be lined up against the rendered estimates.

use std::cell::Cell;

#[doc(hidden)]
pub use log as __log;

thread_local! {
    /// Thread-local storage for the current polling tick count.
    static TICK: Cell<u64> = const { Cell::new(0) };
}

/// Sets the polling tick count for the current thread.
/// The controller calls this once per dispatched tick and resets it to 0
/// when a new session starts.
pub fn set_tick(tick: u64) {
    TICK.with(|v| v.set(tick));
}

/// Retrieves the polling tick count for the current thread.
/// Returns 0 outside of an active session.
pub fn current_tick() -> u64 {
    TICK.with(|v| v.get())
}

/// Logs a trace-level message tagged with the current tick.
#[macro_export]
macro_rules! eta_trace {
    ($($arg:tt)*) => {{
        $crate::__log::trace!("[tick {}] {}", $crate::current_tick(), format_args!($($arg)*));
    }};
}

/// Logs a debug-level message tagged with the current tick.
#[macro_export]
macro_rules! eta_debug {
    ($($arg:tt)*) => {{
        $crate::__log::debug!("[tick {}] {}", $crate::current_tick(), format_args!($($arg)*));
    }};
}

/// Logs an info-level message tagged with the current tick.
#[macro_export]
macro_rules! eta_info {
    ($($arg:tt)*) => {{
        $crate::__log::info!("[tick {}] {}", $crate::current_tick(), format_args!($($arg)*));
    }};
}

/// Logs a warn-level message tagged with the current tick.
#[macro_export]
macro_rules! eta_warn {
    ($($arg:tt)*) => {{
        $crate::__log::warn!("[tick {}] {}", $crate::current_tick(), format_args!($($arg)*));
    }};
}

/// Logs an error-level message tagged with the current tick.
#[macro_export]
macro_rules! eta_error {
    ($($arg:tt)*) => {{
        $crate::__log::error!("[tick {}] {}", $crate::current_tick(), format_args!($($arg)*));
    }};
}

/// Initializes a terminal logger for tests.
///
/// Safe to call from every test: a second initialization is ignored.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Never,
    )]);
}
