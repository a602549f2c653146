//! File logging setup; the global subscriber can be installed once per process
use tempfile::tempdir;

use smartphone_scraper_lib::infrastructure::config::LoggingConfig;
use smartphone_scraper_lib::infrastructure::init_logging_with_config;
use smartphone_scraper_lib::infrastructure::logging::LOG_FILE_NAME;

#[test]
fn file_output_installs_subscriber_once() {
    let dir = tempdir().unwrap();
    let config = LoggingConfig {
        file_output: true,
        console_output: true,
        directory: Some(dir.path().to_path_buf()),
        ..LoggingConfig::default()
    };

    init_logging_with_config(&config).unwrap();
    tracing::info!("first run");
    assert!(dir.path().join(LOG_FILE_NAME).exists());

    // JSON variant builds its layers, then fails because a subscriber is already set
    let json_config = LoggingConfig {
        json_format: true,
        ..config
    };
    assert!(init_logging_with_config(&json_config).is_err());
}
