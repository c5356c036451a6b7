#![cfg(feature = "std")]

use std::env;
use std::io::Write;

use log::{LevelFilter, Metadata, Record};

const LOG_ENV: &str = "GUESSING_LOG";
const DEFAULT_LEVEL: LevelFilter = LevelFilter::Warn;

/// Writes `[LEVEL module] message` lines to stderr; stdout carries the game.
struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let mut err = std::io::stderr().lock();
            let _ = writeln!(err, "{}", format_record(record));
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

static LOGGER: StderrLogger = StderrLogger;

fn format_record(record: &Record) -> String {
    format!("[{:<5} {}] {}", record.level(), record.target(), record.args())
}

/// Level for a raw `GUESSING_LOG` value. Unset or unparsable falls back to `warn`.
fn level_from(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|lvl| lvl.trim().parse().ok())
        .unwrap_or(DEFAULT_LEVEL)
}

/// Install the stderr logger with the level taken from `GUESSING_LOG`.
///
/// Calling it again keeps the first logger.
pub fn init_logging() {
    let level = level_from(env::var(LOG_ENV).ok().as_deref());
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
