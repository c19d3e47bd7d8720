#![cfg(feature = "std")]

use log::{self, LevelFilter, Metadata, Record};
use std::env;
use std::string::String;

struct StderrLogger;

/// One log line: level, emitting module, message.
fn format_record(record: &Record) -> String {
    format!(
        "{:<5} [{}] {}",
        record.level(),
        record.module_path().unwrap_or_else(|| record.target()),
        record.args()
    )
}

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{}", format_record(record));
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Install the stderr logger. The level comes from `SEABATTLE_LOG`
/// (`error` .. `trace`, or `off`) and falls back to `info`.
pub fn init_logging() {
    let level = env::var("SEABATTLE_LOG")
        .ok()
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Info);
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Level;

    #[test]
    fn line_names_the_module() {
        let line = format_record(
            &Record::builder()
                .level(Level::Debug)
                .target("seabattle")
                .module_path(Some("seabattle::board"))
                .args(format_args!("board rejected: {}", 3))
                .build(),
        );
        assert_eq!(line, "DEBUG [seabattle::board] board rejected: 3");

        let line = format_record(
            &Record::builder()
                .level(Level::Warn)
                .target("placement")
                .args(format_args!("retry"))
                .build(),
        );
        assert_eq!(line, "WARN  [placement] retry");
    }
}
