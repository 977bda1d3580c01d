//! `log` crate backend.
//!
//! Installing a [`Logger`] routes `log::error!` and friends through its style:
//!
//! | `log` level       | Logger level |
//! |-------------------|--------------|
//! | `Error`           | `err`        |
//! | `Warn`            | `warn`       |
//! | `Info`            | `info`       |
//! | `Debug`, `Trace`  | `log`        |
//!
//! There is no `log` counterpart for `ok`.

use log::{LevelFilter, Metadata, Record, SetLoggerError};

use super::Logger;
use crate::level::Level;
use crate::sink::Sink;

impl From<log::Level> for Level {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Level::Err,
            log::Level::Warn => Level::Warn,
            log::Level::Info => Level::Info,
            log::Level::Debug | log::Level::Trace => Level::Log,
        }
    }
}

impl<S: Sink> Logger<S> {
    /// The most verbose `log` level this logger prints.
    pub fn level_filter(&self) -> LevelFilter {
        if self.debug {
            LevelFilter::Trace
        } else {
            LevelFilter::Info
        }
    }
}

impl<S: Sink + Send + Sync + 'static> Logger<S> {
    /// Installs this logger as the global `log` backend.
    ///
    /// Returns an error if a logger has already been set.
    pub fn install(self) -> Result<(), SetLoggerError> {
        let filter = self.level_filter();
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(filter);
        Ok(())
    }
}

impl<S: Sink + Send + Sync> log::Log for Logger<S> {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level_filter()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        // The facade has no error channel.
        let _ = self.write(Level::from(record.level()), record.args());
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::Capture;
    use log::Log;

    fn logger(debug: bool) -> (Logger<Capture>, Capture, Capture) {
        let out = Capture::new();
        let err = Capture::new();
        let logger = Logger::builder()
            .debug(debug)
            .style("classic")
            .sinks(out.clone(), err.clone())
            .build()
            .unwrap();
        (logger, out, err)
    }

    fn emit(logger: &Logger<Capture>, level: log::Level, msg: &str) {
        // Fully qualified: the inherent `Logger::log` takes a message.
        Log::log(
            logger,
            &Record::builder()
                .level(level)
                .args(format_args!("{msg}"))
                .target("test")
                .build(),
        );
    }

    #[test]
    fn test_level_mapping() {
        assert_eq!(Level::from(log::Level::Error), Level::Err);
        assert_eq!(Level::from(log::Level::Warn), Level::Warn);
        assert_eq!(Level::from(log::Level::Info), Level::Info);
        assert_eq!(Level::from(log::Level::Debug), Level::Log);
        assert_eq!(Level::from(log::Level::Trace), Level::Log);
    }

    #[test]
    fn test_records_are_routed_by_level() {
        let (logger, out, err) = logger(true);
        emit(&logger, log::Level::Info, "hello");
        emit(&logger, log::Level::Error, "oops");
        emit(&logger, log::Level::Debug, "detail");

        assert_eq!(out.lines(), vec!["[INFO] hello", "[LOG] detail"]);
        assert_eq!(err.lines(), vec!["[ERR] oops"]);
    }

    #[test]
    fn test_debug_records_dropped_without_debug() {
        let (logger, out, _err) = logger(false);
        emit(&logger, log::Level::Trace, "noise");
        emit(&logger, log::Level::Warn, "signal");
        assert_eq!(out.lines(), vec!["[WARN] signal"]);
    }

    #[test]
    fn test_enabled_follows_debug_flag() {
        let (quiet, _, _) = logger(false);
        let (verbose, _, _) = logger(true);
        let debug = Metadata::builder().level(log::Level::Debug).build();
        let info = Metadata::builder().level(log::Level::Info).build();

        assert!(!quiet.enabled(&debug));
        assert!(quiet.enabled(&info));
        assert!(verbose.enabled(&debug));
    }

    struct Broken;

    impl std::fmt::Display for Broken {
        fn fmt(&self, _: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            Err(std::fmt::Error)
        }
    }

    #[test]
    fn test_record_with_failing_display_is_still_written() {
        let (logger, out, _err) = logger(false);
        Log::log(
            &logger,
            &Record::builder()
                .level(log::Level::Warn)
                .args(format_args!("{}", Broken))
                .build(),
        );
        assert_eq!(out.lines(), vec!["[WARN] <unformattable>"]);
    }

    #[test]
    fn test_level_filter() {
        assert_eq!(logger(false).0.level_filter(), LevelFilter::Info);
        assert_eq!(logger(true).0.level_filter(), LevelFilter::Trace);
    }
}
