//! Logger setup.
//!
//! Stdout carries the CGI response, so log records always go to stderr,
//! which CGI hosts forward to their error log.

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Environment variable holding an env_logger filter (e.g. `debug`).
pub const LOG_ENV: &str = "LAYOUT_CGI_LOG";

/// Filter used when `LAYOUT_CGI_LOG` is unset.
pub const DEFAULT_FILTER: &str = "warn";

/// Level forced by `-v` flags; `None` keeps the environment filter.
pub fn level_for_verbosity(verbose: u8) -> Option<LevelFilter> {
    match verbose {
        0 => None,
        1 => Some(LevelFilter::Info),
        2 => Some(LevelFilter::Debug),
        _ => Some(LevelFilter::Trace),
    }
}

/// Install the global logger. Later calls are ignored.
pub fn init(verbose: u8) {
    let mut builder = Builder::from_env(Env::new().filter_or(LOG_ENV, DEFAULT_FILTER));
    builder.target(Target::Stderr);
    if let Some(level) = level_for_verbosity(verbose) {
        builder.filter_level(level);
    }
    let _ = builder.try_init();
}
