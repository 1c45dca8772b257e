use std::fs::{self, File, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Environment variable holding the log level.
pub const LOG_ENV: &str = "STARFIELD_LOG";

/// The terminal belongs to the canvas, so logs go to
/// `<cache dir>/starfield/starfield.log`.
pub fn log_path() -> PathBuf {
    let base = dirs::cache_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("starfield").join("starfield.log")
}

pub fn parse_level(level: &str) -> Level {
    match level.trim().to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

/// Install the global subscriber. Logging is best effort: if the log file
/// can't be opened the program runs without it.
pub fn init() {
    let level = std::env::var(LOG_ENV)
        .map(|value| parse_level(&value))
        .unwrap_or(Level::INFO);

    let Some(file) = open_log_file() else {
        return;
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_thread_ids(false)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn open_log_file() -> Option<File> {
    let path = log_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok()?;
    }
    OpenOptions::new().create(true).append(true).open(path).ok()
}
