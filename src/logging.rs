use color_eyre::Result;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

/// Number of records kept before the oldest are dropped
pub const LOG_CAPACITY: usize = 64;

/// Shared, bounded list of formatted log lines.
///
/// A TUI owns the terminal, so records are kept here and rendered by the
/// application instead of being written to stderr.
#[derive(Debug, Clone)]
pub struct LogBuffer {
    lines: Arc<Mutex<VecDeque<String>>>,
    capacity: usize,
}

impl LogBuffer {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity: capacity.max(1),
        }
    }

    pub fn push(&self, line: String) {
        let mut lines = self.lines.lock().unwrap_or_else(PoisonError::into_inner);
        while lines.len() >= self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
    }

    /// The newest `count` lines, oldest first
    #[must_use]
    pub fn recent(&self, count: usize) -> Vec<String> {
        let lines = self.lines.lock().unwrap_or_else(PoisonError::into_inner);
        let skip = lines.len().saturating_sub(count);
        lines.iter().skip(skip).cloned().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for LogBuffer {
    fn default() -> Self {
        Self::new(LOG_CAPACITY)
    }
}

struct BufferLogger {
    buffer: LogBuffer,
    level: LevelFilter,
}

impl Log for BufferLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            self.buffer.push(format_record(record.level(), &record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

fn format_record(level: Level, message: &str) -> String {
    match level {
        Level::Info => message.to_string(),
        Level::Error | Level::Warn | Level::Debug | Level::Trace => {
            format!("[{}] {}", level, message)
        }
    }
}

/// Maximum level for the process, fixed once at startup
#[must_use]
pub fn level_for(debug_mode: bool) -> LevelFilter {
    if debug_mode {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Installs the buffer logger as the global `log` backend
pub fn init(debug_mode: bool) -> Result<LogBuffer> {
    let buffer = LogBuffer::default();
    let level = level_for(debug_mode);
    log::set_boxed_logger(Box::new(BufferLogger {
        buffer: buffer.clone(),
        level,
    }))?;
    log::set_max_level(level);
    Ok(buffer)
}

/// Process-wide capturing logger for unit tests. Tests run in parallel, so
/// assertions should look for lines unique to the test.
#[cfg(test)]
pub(crate) fn capture_for_tests() -> LogBuffer {
    static CAPTURE: std::sync::OnceLock<LogBuffer> = std::sync::OnceLock::new();
    CAPTURE
        .get_or_init(|| {
            let buffer = LogBuffer::new(4096);
            let installed = log::set_boxed_logger(Box::new(BufferLogger {
                buffer: buffer.clone(),
                level: LevelFilter::Debug,
            }));
            assert!(installed.is_ok(), "global logger already installed");
            log::set_max_level(LevelFilter::Debug);
            buffer
        })
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_drops_oldest() {
        let buffer = LogBuffer::new(2);
        buffer.push("one".to_string());
        buffer.push("two".to_string());
        buffer.push("three".to_string());
        assert_eq!(buffer.len(), 2);
        assert_eq!(buffer.recent(5), vec!["two".to_string(), "three".to_string()]);
        assert_eq!(buffer.recent(1), vec!["three".to_string()]);
    }

    #[test]
    fn test_logger_filters_by_level() {
        let buffer = LogBuffer::new(8);
        let logger = BufferLogger {
            buffer: buffer.clone(),
            level: level_for(false),
        };
        logger.log(
            &Record::builder()
                .level(Level::Debug)
                .args(format_args!("hidden"))
                .build(),
        );
        logger.log(
            &Record::builder()
                .level(Level::Warn)
                .args(format_args!("narrow"))
                .build(),
        );
        logger.log(
            &Record::builder()
                .level(Level::Info)
                .args(format_args!("label 1 activated"))
                .build(),
        );
        assert_eq!(
            buffer.recent(8),
            vec!["[WARN] narrow".to_string(), "label 1 activated".to_string()]
        );
    }

    #[test]
    fn test_level_for_debug_mode() {
        assert_eq!(level_for(true), LevelFilter::Debug);
        assert_eq!(level_for(false), LevelFilter::Info);
    }
}
