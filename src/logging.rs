//! File-backed logger for the `log` facade. The terminal belongs to the UI,
//! so records go to a file instead of stdout.

use std::env;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use log::{LevelFilter, Metadata, Record};

use crate::error::LogError;

/// Environment variable that overrides the configured log level.
pub const LOG_ENV_VAR: &str = "CONNECT_FOUR_LOG";

struct FileLogger {
    file: Mutex<File>,
}

impl log::Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        if let Ok(mut file) = self.file.lock() {
            let _ = writeln!(file, "{}", format_record(record));
        }
    }

    fn flush(&self) {
        if let Ok(mut file) = self.file.lock() {
            let _ = file.flush();
        }
    }
}

fn format_record(record: &Record) -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!(
        "{}.{:03} {:<5} {} - {}",
        now.as_secs(),
        now.subsec_millis(),
        record.level(),
        record.target(),
        record.args()
    )
}

/// Pick the level from the environment value if it parses, else `fallback`.
pub fn resolve_level(env_value: Option<&str>, fallback: LevelFilter) -> LevelFilter {
    env_value
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(fallback)
}

/// Install the file logger. The level comes from `CONNECT_FOUR_LOG` when it is
/// set to a valid level, otherwise from `fallback`. Nothing is opened when the
/// resulting level is `off`.
pub fn init_logging(path: &Path, fallback: LevelFilter) -> Result<LevelFilter, LogError> {
    let level = resolve_level(env::var(LOG_ENV_VAR).ok().as_deref(), fallback);
    if level == LevelFilter::Off {
        log::set_max_level(level);
        return Ok(level);
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| LogError::FileOpen {
            path: path.to_path_buf(),
            source: e,
        })?;
    log::set_boxed_logger(Box::new(FileLogger {
        file: Mutex::new(file),
    }))?;
    log::set_max_level(level);
    Ok(level)
}
