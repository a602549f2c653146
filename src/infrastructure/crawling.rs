//! Listing crawler for the smartphone category page
//!
//! One fetch, then sequential per-candidate extraction with a politeness
//! pause between candidates. A page that cannot be fetched yields the fixed
//! fallback dataset instead of an error.

use anyhow::{Context, Result};
use async_trait::async_trait;
use scraper::Html;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::domain::{Listing, fallback_listings};
use crate::infrastructure::config::{ScraperConfig, defaults};
use crate::infrastructure::parsing::{
    CandidateFragment, CandidateLocator, ContextualParser, ListingParser, ParseContext,
    ParsingConfig, ParsingError, ParsingResult,
};
use crate::infrastructure::simple_http_client::{HttpClient, HttpClientConfig};

/// Longest title prefix shown in progress lines, in characters
const LOG_TITLE_CHARS: usize = 50;

/// Source of page bodies
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch the body of `url`; any failure is a transport error
    async fn fetch_page(&self, url: &str) -> ParsingResult<String>;
}

/// Pause taken between two consecutive candidates
#[async_trait]
pub trait Pacer: Send + Sync {
    async fn pause(&self);
}

/// Uniform random pause in `[min, max)` milliseconds
#[derive(Debug, Clone)]
pub struct RandomDelayPacer {
    min_ms: u64,
    max_ms: u64,
}

impl RandomDelayPacer {
    pub fn new() -> Self {
        Self {
            min_ms: defaults::MIN_CANDIDATE_DELAY_MS,
            max_ms: defaults::MAX_CANDIDATE_DELAY_MS,
        }
    }

    /// Next delay drawn from the configured range
    pub fn next_delay(&self) -> Duration {
        Duration::from_millis(fastrand::u64(self.min_ms..self.max_ms))
    }
}

impl Default for RandomDelayPacer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Pacer for RandomDelayPacer {
    async fn pause(&self) {
        let delay = self.next_delay();
        debug!("Pausing {} ms before next candidate", delay.as_millis());
        sleep(delay).await;
    }
}

/// Pacer that never waits
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelayPacer;

#[async_trait]
impl Pacer for NoDelayPacer {
    async fn pause(&self) {}
}

/// Result of one crawl
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CrawlOutcome {
    /// The page was fetched; holds every accepted listing, possibly none
    Scraped(Vec<Listing>),
    /// The page could not be fetched; holds the fallback dataset
    Fallback { listings: Vec<Listing>, reason: String },
}

impl CrawlOutcome {
    pub fn listings(&self) -> &[Listing] {
        match self {
            Self::Scraped(listings) | Self::Fallback { listings, .. } => listings,
        }
    }

    pub fn into_listings(self) -> Vec<Listing> {
        match self {
            Self::Scraped(listings) | Self::Fallback { listings, .. } => listings,
        }
    }

    pub const fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }
}

/// Fetches the category page and extracts listings from it
pub struct ListingCrawler<F: PageFetcher> {
    fetcher: F,
    pacer: Box<dyn Pacer>,
    locator: CandidateLocator,
    parser: ListingParser,
    category_url: String,
    max_candidates: usize,
}

impl ListingCrawler<HttpClient> {
    /// Crawler backed by the reqwest client
    pub fn from_config(config: &ScraperConfig) -> Result<Self> {
        let client = HttpClient::with_config(HttpClientConfig::from_scraper_config(config))
            .context("Failed to create HTTP client")?;
        Self::new(client, config)
    }
}

impl<F: PageFetcher> ListingCrawler<F> {
    pub fn new(fetcher: F, config: &ScraperConfig) -> Result<Self> {
        let parsing_config = ParsingConfig::default().with_base_url(config.base_url.clone());

        Ok(Self {
            fetcher,
            pacer: Box::new(RandomDelayPacer::new()),
            locator: CandidateLocator::with_config(&parsing_config.candidate_patterns)
                .context("Failed to create candidate locator")?,
            parser: ListingParser::with_config(&parsing_config)
                .context("Failed to create listing parser")?,
            category_url: config.category_url.clone(),
            max_candidates: config.max_candidates,
        })
    }

    /// Replace the politeness pacer
    pub fn with_pacer(mut self, pacer: impl Pacer + 'static) -> Self {
        self.pacer = Box::new(pacer);
        self
    }

    pub fn category_url(&self) -> &str {
        &self.category_url
    }

    /// Run one crawl; never fails
    pub async fn crawl(&self) -> CrawlOutcome {
        info!("🔍 Fetching {}", self.category_url);

        let body = match self.fetcher.fetch_page(&self.category_url).await {
            Ok(body) => body,
            Err(e) => return Self::fallback(&e),
        };

        let fragments = self.locate_candidates(&body);
        let total = fragments.len();
        let fragments: Vec<CandidateFragment> =
            fragments.into_iter().take(self.max_candidates).collect();
        info!(
            "📦 Found {} candidates, processing {}",
            total,
            fragments.len()
        );

        let context = ParseContext::new(self.category_url.clone());
        let mut listings = Vec::with_capacity(fragments.len());

        for (position, fragment) in fragments.iter().enumerate() {
            if position > 0 {
                self.pacer.pause().await;
            }

            match self.parser.parse_candidate(fragment, &context) {
                Ok(listing) => {
                    info!(
                        "✅ [{}] {}",
                        fragment.index + 1,
                        truncate_chars(&listing.title, LOG_TITLE_CHARS)
                    );
                    listings.push(listing);
                }
                Err(e) if e.is_rejection() => debug!("Skipping candidate: {}", e),
                Err(e) => warn!("⚠️ Dropping candidate {}: {}", fragment.index + 1, e),
            }
        }

        info!("Extracted {} listings from {}", listings.len(), self.category_url);
        CrawlOutcome::Scraped(listings)
    }

    // The DOM is dropped before returning so nothing !Send outlives this call
    fn locate_candidates(&self, body: &str) -> Vec<CandidateFragment> {
        let html = Html::parse_document(body);
        let context = ParseContext::new(self.category_url.clone());
        match self.locator.parse_with_context(&html, &context) {
            Ok(fragments) => fragments,
            Err(e) => {
                warn!("Candidate lookup failed: {}", e);
                Vec::new()
            }
        }
    }

    fn fallback(error: &ParsingError) -> CrawlOutcome {
        warn!("❌ Page unavailable ({}), using fallback data", error);
        CrawlOutcome::Fallback {
            listings: fallback_listings(),
            reason: error.to_string(),
        }
    }
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
