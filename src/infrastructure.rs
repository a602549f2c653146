//! Infrastructure layer for fetching, parsing, configuration and output
//!
//! Everything that touches the network, the filesystem or HTML lives here;
//! the domain module stays plain data.

pub mod config;
pub mod crawling;
pub mod export;
pub mod logging;
pub mod parsing;
pub mod parsing_error;
pub mod simple_http_client;

// Re-export commonly used items
pub use config::{AppConfig, ConfigManager, LoggingConfig, OutputConfig, ScraperConfig};
pub use crawling::{CrawlOutcome, ListingCrawler, NoDelayPacer, PageFetcher, Pacer, RandomDelayPacer};
pub use export::{load_from_json, save_to_json, summary_lines};
pub use logging::{get_log_directory, init_logging_with_config, log_system_info};
pub use parsing::{CandidateLocator, ListingParser, ParsingConfig};
pub use parsing_error::{ParsingError, ParsingResult};
pub use simple_http_client::{HttpClient, HttpClientConfig};
