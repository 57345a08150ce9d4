#![cfg(feature = "std")]

use log::{self, LevelFilter, Log, Metadata, Record};
use std::env;

/// Environment variable holding the log level filter.
pub const LOG_ENV: &str = "BROADSIDE_LOG";

/// Writes `[LEVEL target] message` lines to stderr, keeping stdout free for
/// game output and JSON summaries.
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{:<5} {}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn level_from_env() -> LevelFilter {
    env::var(LOG_ENV)
        .ok()
        .and_then(|lvl| lvl.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Install the logger with the level named by `BROADSIDE_LOG` (`off`,
/// `error`, `warn`, `info`, `debug`, `trace`). Defaults to `info`.
///
/// Calling it again, or after another logger was installed, does nothing.
pub fn init_logging() {
    let level = level_from_env();
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
