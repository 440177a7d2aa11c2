#![cfg(feature = "std")]

use std::env;
use log::{self, LevelFilter, Metadata, Record};

struct SimpleLogger;

impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} [{}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: SimpleLogger = SimpleLogger;

/// Environment variable holding the log level filter.
pub const LOG_ENV: &str = "TICTAC_LOG";

/// Initialize logging with a level taken from the `TICTAC_LOG` environment variable.
/// Defaults to `info` if the variable is not set or invalid.
pub fn init_logging() {
    init_logging_with(env::var(LOG_ENV).ok().as_deref());
}

/// Initialize logging from an explicit level string. Calling this again after
/// a logger is installed only changes the level.
pub fn init_logging_with(level: Option<&str>) {
    let level = level
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Info);
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_parsed_or_defaulted() {
        init_logging_with(Some("debug"));
        assert_eq!(log::max_level(), LevelFilter::Debug);
        init_logging_with(Some("not-a-level"));
        assert_eq!(log::max_level(), LevelFilter::Info);
        init_logging_with(None);
        assert_eq!(log::max_level(), LevelFilter::Info);
    }
}
