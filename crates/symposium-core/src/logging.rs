//! Page console logging.
//!
//! Failures that the site reports to the browser console (document fetches
//! that fail to load or parse) are written through the `log` facade and,
//! when a log directory is configured, appended to a per-page console file.

use std::{
    fs::{File, OpenOptions},
    io::Write,
    path::Path,
    sync::{Arc, Mutex},
};

use chrono::{SecondsFormat, Utc};

/// Thread-safe handle to an append-only console log file.
pub type LogHandle = Arc<Mutex<Option<File>>>;

/// Current UTC time as ISO 8601 with milliseconds (e.g. 2026-02-04T10:15:30.123Z).
fn utc_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Write a timestamped line to the console file (if present).
pub fn log_line(handle: &LogHandle, level: &str, message: &str) {
    if let Ok(mut guard) = handle.lock() {
        if let Some(ref mut file) = *guard {
            let _ = writeln!(file, "[{}] {}: {}", utc_timestamp(), level, message);
            let _ = file.flush();
        }
    }
}

/// Log an error to the facade and the console file.
pub fn console_error(handle: &LogHandle, message: &str) {
    log::error!("{}", message);
    log_line(handle, "ERROR", message);
}

/// Open (or create) a console file at `{log_dir}/{page}.log` and return a shared handle.
///
/// A missing directory or an unopenable file yields a handle that discards lines.
pub fn open_log_file(log_dir: Option<&Path>, page: &str) -> LogHandle {
    let file = log_dir.and_then(|dir| {
        std::fs::create_dir_all(dir).ok()?;
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(dir.join(format!("{}.log", page)))
            .ok()
    });
    Arc::new(Mutex::new(file))
}

/// A handle that discards every line.
pub fn disabled() -> LogHandle {
    Arc::new(Mutex::new(None))
}
