//! Simple file-based logging
//!
//! Nothing is written until [`init`] opens a log file; messages logged before
//! that are dropped.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use parking_lot::Mutex;

static LOG_FILE: Mutex<Option<File>> = parking_lot::const_mutex(None);

/// Open (and truncate) the log file at `path`
pub fn init(path: &Path) {
    match OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
    {
        Ok(file) => *LOG_FILE.lock() = Some(file),
        Err(_) => return,
    }

    log("=== flexlayout log started ===");
}

/// Stop logging and close the file
pub fn shutdown() {
    LOG_FILE.lock().take();
}

/// Log a message to the file
pub fn log(msg: &str) {
    let mut guard = LOG_FILE.lock();
    if let Some(ref mut file) = *guard {
        let ts = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        let _ = writeln!(file, "[{}] {}", ts, msg);
        let _ = file.flush();
    }
}

/// Log a formatted message
#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::log::log(&format!($($arg)*))
    };
}

/// Log with function context
#[macro_export]
macro_rules! log_fn {
    ($fn_name:expr) => {
        $crate::log::log(&format!("-> {}", $fn_name))
    };
    ($fn_name:expr, $($arg:tt)*) => {
        $crate::log::log(&format!("-> {}: {}", $fn_name, format!($($arg)*)))
    };
}
