//! Logging system configuration and initialization
//!
//! Console output is always human readable. File output is optional, can be
//! JSON formatted, and rotates the previous run's file aside by timestamp.

use anyhow::{Result, anyhow};
use chrono::Local;
use lazy_static::lazy_static;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{info, warn};
use tracing_appender::{non_blocking, rolling};
use tracing_subscriber::{
    EnvFilter, Registry,
    fmt::{self, time::FormatTime},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

pub use crate::infrastructure::config::LoggingConfig;

/// Name of the active log file
pub const LOG_FILE_NAME: &str = "smartphone-scraper.log";

// Keeps the non-blocking file writer alive for the whole process
lazy_static! {
    static ref LOG_GUARDS: Mutex<Vec<tracing_appender::non_blocking::WorkerGuard>> =
        Mutex::new(Vec::new());
}

/// Local wall-clock timestamps with millisecond precision
struct LocalTimeFormatter;

impl FormatTime for LocalTimeFormatter {
    fn format_time(&self, w: &mut fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

/// Get the log directory relative to the executable location
pub fn get_log_directory() -> PathBuf {
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());

    exe_dir.join("logs")
}

/// Build the level filter. `RUST_LOG` wins over the configured level; otherwise
/// HTTP and HTML parser internals are damped unless tracing is requested.
fn build_env_filter(level: &str) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    let mut filter = EnvFilter::try_new(level)
        .map_err(|e| anyhow!("Invalid log level '{}': {}", level, e))?;

    if !level.to_lowercase().contains("trace") {
        for directive in [
            "reqwest=info",
            "hyper=warn",
            "hyper_util=warn",
            "h2=warn",
            "rustls=warn",
            "html5ever=warn",
            "selectors=warn",
        ] {
            filter = filter.add_directive(directive.parse()?);
        }
        filter = filter
            .add_directive(format!("smartphone_scraper_lib={level}").parse()?)
            .add_directive(format!("smartphone_scraper={level}").parse()?);
    }

    Ok(filter)
}

/// Initialize logging with custom configuration
pub fn init_logging_with_config(config: &LoggingConfig) -> Result<()> {
    let env_filter = build_env_filter(&config.level)?;
    let registry = Registry::default().with(env_filter);

    let log_dir = config.directory.clone().unwrap_or_else(get_log_directory);

    match (config.file_output, config.console_output) {
        (true, console) => {
            std::fs::create_dir_all(&log_dir)
                .map_err(|e| anyhow!("Failed to create log directory {:?}: {}", log_dir, e))?;
            rotate_existing_log_file(&log_dir, LOG_FILE_NAME)?;
            if config.auto_cleanup_logs {
                cleanup_old_logs(&log_dir, config.max_files)?;
            }

            let file_appender = rolling::never(&log_dir, LOG_FILE_NAME);
            let (file_writer, file_guard) = non_blocking(file_appender);
            if let Ok(mut guards) = LOG_GUARDS.lock() {
                guards.push(file_guard);
            }

            if config.json_format {
                let file_layer = fmt::Layer::new()
                    .json()
                    .with_writer(file_writer)
                    .with_timer(LocalTimeFormatter)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_ansi(false);
                let console_layer = console.then(|| {
                    fmt::Layer::new()
                        .with_writer(std::io::stdout)
                        .with_timer(LocalTimeFormatter)
                        .with_target(false)
                });
                registry
                    .with(file_layer)
                    .with(console_layer)
                    .try_init()
                    .map_err(|e| anyhow!("Failed to install subscriber: {}", e))?;
            } else {
                let file_layer = fmt::Layer::new()
                    .with_writer(file_writer)
                    .with_timer(LocalTimeFormatter)
                    .with_target(false)
                    .with_ansi(false);
                let console_layer = console.then(|| {
                    fmt::Layer::new()
                        .with_writer(std::io::stdout)
                        .with_timer(LocalTimeFormatter)
                        .with_target(false)
                });
                registry
                    .with(file_layer)
                    .with(console_layer)
                    .try_init()
                    .map_err(|e| anyhow!("Failed to install subscriber: {}", e))?;
            }
        }
        (false, true) => {
            let console_layer = fmt::Layer::new()
                .with_writer(std::io::stdout)
                .with_timer(LocalTimeFormatter)
                .with_target(false);
            registry
                .with(console_layer)
                .try_init()
                .map_err(|e| anyhow!("Failed to install subscriber: {}", e))?;
        }
        (false, false) => {
            return Err(anyhow!("No logging output configured"));
        }
    }

    info!("Logging system initialized (level: {})", config.level);
    if config.file_output {
        info!("Log file: {:?}", log_dir.join(LOG_FILE_NAME));
    }

    Ok(())
}

/// Log system information for diagnostics
pub fn log_system_info() {
    info!("=== Smartphone Scraper ===");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));
    info!("Operating system: {} ({})", std::env::consts::OS, std::env::consts::ARCH);
    if let Ok(current_dir) = std::env::current_dir() {
        info!("Working directory: {:?}", current_dir);
    }
}

/// Rename the previous run's log file with its modification timestamp
fn rotate_existing_log_file(log_dir: &Path, log_file_name: &str) -> Result<()> {
    let log_file_path = log_dir.join(log_file_name);
    if !log_file_path.exists() {
        return Ok(());
    }

    let metadata = std::fs::metadata(&log_file_path)
        .map_err(|e| anyhow!("Failed to get log file metadata: {}", e))?;
    let file_time = metadata
        .modified()
        .unwrap_or_else(|_| std::time::SystemTime::now());
    let datetime: chrono::DateTime<Local> = file_time.into();

    let file_stem = log_file_name.trim_end_matches(".log");
    let timestamped_path = log_dir.join(format!("{}.{}.log", file_stem, datetime.format("%Y%m%dT%H%M%S")));

    std::fs::rename(&log_file_path, &timestamped_path).map_err(|e| {
        anyhow!(
            "Failed to rotate log file {} to {}: {}",
            log_file_path.display(),
            timestamped_path.display(),
            e
        )
    })?;

    Ok(())
}

/// Delete the oldest `.log` files so that at most `max_files` remain
fn cleanup_old_logs(log_dir: &Path, max_files: u32) -> Result<usize> {
    if !log_dir.exists() {
        return Ok(0);
    }

    let mut log_files = Vec::new();
    for entry in std::fs::read_dir(log_dir)? {
        let entry = entry?;
        let path = entry.path();
        let is_log = path.extension().is_some_and(|ext| ext == "log");
        if path.is_file() && is_log {
            if let Ok(modified) = entry.metadata().and_then(|m| m.modified()) {
                log_files.push((path, modified));
            }
        }
    }

    // Newest first
    log_files.sort_by(|a, b| b.1.cmp(&a.1));

    let mut removed = 0;
    for (path, _) in log_files.iter().skip(max_files as usize) {
        if let Err(e) = std::fs::remove_file(path) {
            warn!("Failed to remove old log file {:?}: {}", path, e);
        } else {
            removed += 1;
        }
    }

    Ok(removed)
}
