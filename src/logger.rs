// src/logger.rs
// File sink for the `log` facade: "[HH:MM:SS.mmm][LEVEL] msg" lines, elapsed
// since the logger was installed. Warnings and errors are echoed to stderr.
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::{Mutex, OnceLock};
use std::time::Instant;

use log::{Level, LevelFilter, Log, Metadata, Record};

static LOGGER: OnceLock<FileLogger> = OnceLock::new();

struct FileLogger {
    file: Option<Mutex<File>>,
    level: LevelFilter,
    start: Instant,
}

pub fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let elapsed = fmt_elapsed(self.start.elapsed().as_millis());
        let line = format!("[{elapsed}][{}] {}\n", record.level(), record.args());

        if record.level() <= Level::Warn {
            eprint!("{line}");
        }
        if let Some(file) = &self.file {
            if let Ok(mut f) = file.lock() {
                let _ = f.write_all(line.as_bytes());
            }
        }
    }

    fn flush(&self) {
        if let Some(file) = &self.file {
            if let Ok(mut f) = file.lock() {
                let _ = f.flush();
            }
        }
    }
}

/// Install the logger once. A log file that cannot be opened only disables
/// the file sink; stderr echo still works.
pub fn init(path: &Path, level: LevelFilter) -> Result<(), log::SetLoggerError> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .ok()
        .map(Mutex::new);

    let logger = LOGGER.get_or_init(|| FileLogger { file, level, start: Instant::now() });
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}
