// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! A small stdout logger on top of the `log` facade.
//!
//! ```no_run
//! logger::Logger::new()
//!     .label("demo")
//!     .level(logger::Level::Info)
//!     .init()
//!     .expect("Failed to initialize logger");
//! ```

pub use log::{debug, error, info, trace, warn};
pub use log::{Level, LevelFilter, SetLoggerError};

use log::{Log, Metadata, Record};

/// Log at `error` level and terminate the process with a non-zero status.
#[macro_export]
macro_rules! fatal {
    ($($arg:tt)*) => {{
        $crate::error!($($arg)*);
        std::process::exit(1);
    }};
}

pub struct Logger {
    label: String,
    level: Level,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    pub fn new() -> Self {
        Self {
            label: String::new(),
            level: Level::Info,
        }
    }

    /// Name shown in place of the module path for `info` and above.
    pub fn label(mut self, label: &str) -> Self {
        self.label = label.to_owned();
        self
    }

    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Install as the global logger. Fails if one is already installed.
    pub fn init(self) -> Result<(), SetLoggerError> {
        let filter = self.level.to_level_filter();
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(filter);
        Ok(())
    }

    fn format(&self, record: &Record) -> String {
        let target = if record.level() >= Level::Debug || self.label.is_empty() {
            record.target()
        } else {
            &self.label
        };
        format!(
            "{} {:<5} [{}] {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            record.level(),
            target,
            record.args()
        )
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            println!("{}", self.format(record));
        }
    }

    fn flush(&self) {}
}

/// Raise `base` by `steps` levels, saturating at `Trace`.
pub fn verbosity(base: Level, steps: u64) -> Level {
    let mut level = base;
    for _ in 0..steps {
        level = match level {
            Level::Error => Level::Warn,
            Level::Warn => Level::Info,
            Level::Info => Level::Debug,
            Level::Debug | Level::Trace => Level::Trace,
        };
    }
    level
}
