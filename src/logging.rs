//! Logger setup for the binary plus tracing macros for the library.
//!
//! `debug_log!` and `info_log!` compile to nothing in release builds so the
//! per-round filter traces cost nothing when solving at full speed.

use env_logger::Env;

/// Installs `env_logger`. `RUST_LOG` wins over the default level; `verbose`
/// raises that default from `warn` to `debug`.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .try_init();
}

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        log::debug!(target: "wordle_guesser", $($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{}};
}

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        log::info!(target: "wordle_guesser", $($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {{}};
}
