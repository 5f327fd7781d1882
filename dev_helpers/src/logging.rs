use log::{Level, LevelFilter, Log, Metadata, Record};

/// Prints log records to stdout.
pub struct ConsoleLogger {
    level: Level,
}

static LOGGER: ConsoleLogger = ConsoleLogger {
    level: Level::Debug,
};

impl ConsoleLogger {
    /// Installs the logger as the global `log` backend. Only the first
    /// call has an effect.
    pub fn init() {
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(LevelFilter::Debug);
        }
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            println!(
                "[{:>5}] {} [{}:{}]",
                record.level(),
                record.args(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0)
            );
        }
    }

    fn flush(&self) {}
}
