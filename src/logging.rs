#![cfg(feature = "std")]

//! Stderr logger for the `salvo` binaries.

use std::boxed::Box;
use std::env;
use std::fmt;
use std::string::String;

use log::{Level, LevelFilter, Log, Metadata, Record};

/// Environment variable holding the level name, e.g. `SALVO_LOG=debug`.
pub const LOG_ENV: &str = "SALVO_LOG";

/// Writes `[LEVEL target] message` lines to stderr so they never mix
/// with the board output on stdout.
struct ConsoleLogger {
    level: LevelFilter,
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!(
                "{}",
                format_line(record.level(), record.target(), record.args())
            );
        }
    }

    fn flush(&self) {}
}

/// The crate name is dropped from targets, so `salvo::ai` shows as `ai`.
fn format_line(level: Level, target: &str, args: &fmt::Arguments<'_>) -> String {
    let target = target
        .strip_prefix("salvo::")
        .filter(|rest| !rest.is_empty())
        .unwrap_or(target);
    format!("[{:<5} {}] {}", level, target, args)
}

/// Parse a level name such as `debug` or `WARN`, falling back to `info`.
fn level_from(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|lvl| lvl.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Install the stderr logger at the level named by `SALVO_LOG` (default `info`).
/// Only the first call has any effect.
pub fn init_logging() {
    let level = level_from(env::var(LOG_ENV).ok().as_deref());
    let logger = Box::new(ConsoleLogger { level });
    if log::set_boxed_logger(logger).is_ok() {
        log::set_max_level(level);
    }
}
