//! Collects log records in memory so tests can check what was logged.

use std::sync::Mutex;

use log::{LevelFilter, Log, Metadata, Record};


static CAPTURED: Mutex<Vec<String>> = Mutex::new(Vec::new());

struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        CAPTURED.lock().unwrap().push(format!("{} {}", record.level(), record.args()));
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;

pub fn capture_logs() {
    // Another test may have installed it already.
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(LevelFilter::Info);
}

/// Captured lines, formatted as `LEVEL message`, that contain `needle`.
pub fn captured_containing(needle: &str) -> Vec<String> {
    CAPTURED.lock().unwrap().iter().filter(|l| l.contains(needle)).cloned().collect()
}
