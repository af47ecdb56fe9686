//! cli/src/logger.rs
//! Stderr logger for the CLI
//! description: Installs a `log` backend that writes one timestamped,
//! console-styled line per record. Core crates only talk to the `log`
//! facade; this is the only place records are turned into text.

use std::io::Write;

use chrono::Local;
use console::Style;
use log::{Level, LevelFilter, Log, Metadata, Record};

pub struct CliLogger {
    level: LevelFilter,
}

impl CliLogger {
    pub fn new(level: LevelFilter) -> Self {
        CliLogger { level }
    }

    fn style_for(level: Level) -> Style {
        match level {
            Level::Error => Style::new().red().bold(),
            Level::Warn => Style::new().yellow().bold(),
            Level::Info => Style::new().cyan(),
            Level::Debug => Style::new().blue(),
            Level::Trace => Style::new().dim(),
        }
    }
}

impl Log for CliLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let stamp = Local::now().format("%H:%M:%S%.3f");
        let level = Self::style_for(record.level()).apply_to(format!("{:<5}", record.level()));
        let target = Style::new().dim().apply_to(record.target());
        let _ = writeln!(std::io::stderr().lock(), "{} {} {} {}", stamp, level, target, record.args());
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// Map `-q` and the number of `-v` flags to a filter. Warnings are shown by
/// default.
pub fn level_from_flags(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Off;
    }
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the logger once for the process. A second call leaves the first
/// logger in place.
pub fn init(level: LevelFilter) {
    if log::set_boxed_logger(Box::new(CliLogger::new(level))).is_ok() {
        log::set_max_level(level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_wins_over_verbose() {
        assert_eq!(level_from_flags(3, true), LevelFilter::Off);
    }

    #[test]
    fn each_v_raises_the_level() {
        assert_eq!(level_from_flags(0, false), LevelFilter::Warn);
        assert_eq!(level_from_flags(1, false), LevelFilter::Info);
        assert_eq!(level_from_flags(2, false), LevelFilter::Debug);
        assert_eq!(level_from_flags(7, false), LevelFilter::Trace);
    }

    #[test]
    fn logger_filters_by_level() {
        let logger = CliLogger::new(LevelFilter::Info);
        let info = Metadata::builder().level(Level::Info).build();
        let debug = Metadata::builder().level(Level::Debug).build();
        assert!(logger.enabled(&info));
        assert!(!logger.enabled(&debug));
    }
}
