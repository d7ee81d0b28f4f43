//! File logger for the `log` facade.
//!
//! The terminal belongs to the renderer while the game runs, so log records
//! go to the file named by `GRID_TETRIS_LOG_PATH` instead of stderr. Each
//! line looks like `[<elapsed ms>] <LEVEL> <target>: <message>`.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::sync::Mutex;
use std::time::Instant;

use anyhow::{anyhow, Context, Result};
use log::{LevelFilter, Log, Metadata, Record};

use crate::config::AppConfig;

struct FileLogger {
    level: LevelFilter,
    started: Instant,
    file: Mutex<File>,
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let elapsed_ms = self.started.elapsed().as_millis();
        if let Ok(mut file) = self.file.lock() {
            let _ = write_record(&mut *file, elapsed_ms, record);
        }
    }

    fn flush(&self) {
        if let Ok(mut file) = self.file.lock() {
            let _ = file.flush();
        }
    }
}

fn write_record(out: &mut impl Write, elapsed_ms: u128, record: &Record) -> io::Result<()> {
    writeln!(
        out,
        "[{}] {} {}: {}",
        elapsed_ms,
        record.level(),
        record.target(),
        record.args()
    )
}

/// Install the file logger if a log path is configured.
///
/// Without a path every record is discarded at the facade. Calling this
/// twice is an error.
pub fn init(config: &AppConfig) -> Result<()> {
    let Some(path) = &config.log_path else {
        log::set_max_level(LevelFilter::Off);
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    let logger = Box::new(FileLogger {
        level: config.log_level,
        started: Instant::now(),
        file: Mutex::new(file),
    });
    log::set_logger(Box::leak(logger)).map_err(|e| anyhow!("installing logger: {}", e))?;
    log::set_max_level(config.log_level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Level;

    #[test]
    fn line_format() {
        let mut out = Vec::new();
        write_record(
            &mut out,
            1234,
            &Record::builder()
                .args(format_args!("spawned {} at ({}, {})", "T", 125, 25))
                .level(Level::Debug)
                .target("grid_tetris_core::game_state")
                .build(),
        )
        .unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "[1234] DEBUG grid_tetris_core::game_state: spawned T at (125, 25)\n"
        );
    }

    #[test]
    fn no_path_is_a_no_op() {
        assert!(init(&AppConfig::default()).is_ok());
    }
}
