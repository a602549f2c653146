//! Smartphone listing scraper for the fnac.com category page
//!
//! Fetches one category page, extracts smartphone listings with normalized
//! brand, model and storage, and writes them to a JSON file. When the page
//! cannot be fetched a fixed fallback dataset is used instead.

pub mod domain;
pub mod infrastructure;

pub use domain::{Brand, Listing, ListingSource};
pub use infrastructure::{CrawlOutcome, ListingCrawler};
