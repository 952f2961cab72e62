//! ## Sets up logging by reading configuration from environment variables.
//!
//! Environment variables used:
//! - LOG_MODE: "stdout" (default) or "file"
//! - LOG_LEVEL: log level ("trace", "debug", "info", "warn", "error"); default is "info"
//! - LOG_DATA_DIR: when using file mode, the directory holding the log files (default "./logs")

use chrono::Utc;
use log::info;
use simplelog::{Config, LevelFilter, SimpleLogger, WriteLogger};
use std::{
    env,
    fs::{create_dir_all, OpenOptions},
    path::Path,
};

/// Maps a level name to its `LevelFilter`. Unrecognized names fall back to
/// `Info`.
pub fn parse_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Info,
    }
}

/// Computes the date-stamped log file path inside the given directory.
pub fn log_file_path(log_dir: &str, date_str: &str) -> String {
    format!("{}/cattery-{}.log", log_dir.trim_end_matches('/'), date_str)
}

/// Sets up logging by reading configuration from environment variables.
///
/// In file mode the log file is stamped with the current UTC date and
/// appended to if it already exists, e.g. after a restart on the same day.
pub fn setup_logging() {
    let log_mode = env::var("LOG_MODE").unwrap_or_else(|_| "stdout".to_string());
    let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let level_filter = parse_level(&log_level);

    if log_mode.to_lowercase() == "file" {
        let log_dir = env::var("LOG_DATA_DIR").unwrap_or_else(|_| "./logs".to_string());
        let date_str = Utc::now().format("%Y-%m-%d").to_string();
        let file_path = log_file_path(&log_dir, &date_str);

        if let Some(parent) = Path::new(&file_path).parent() {
            create_dir_all(parent).expect("Failed to create log directory");
        }

        let log_file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&file_path)
            .unwrap_or_else(|e| panic!("Unable to open log file {}: {}", file_path, e));
        WriteLogger::init(level_filter, Config::default(), log_file)
            .expect("Failed to initialize file logger");
    } else {
        // Default to stdout logging
        SimpleLogger::init(level_filter, Config::default())
            .expect("Failed to initialize simple logger");
    }

    info!("Logging is successfully configured (mode: {})", log_mode);
}
