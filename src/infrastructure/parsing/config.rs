//! Parsing configuration for listing extraction
//!
//! Centralized selector cascades and candidate patterns. Order inside each
//! cascade is a priority order: the first selector that yields a value wins.
//! The vocabularies follow one revision of the category page markup and are
//! expected to need updating when the site changes.

use crate::infrastructure::config::fnac;

/// Main parsing configuration
#[derive(Debug, Clone)]
pub struct ParsingConfig {
    /// Base URL for resolving relative links and images
    pub base_url: String,

    /// Per-fragment field selectors
    pub listing_selectors: ListingSelectors,

    /// Patterns used to find product fragments on the page
    pub candidate_patterns: CandidatePatterns,
}

impl Default for ParsingConfig {
    fn default() -> Self {
        Self {
            base_url: fnac::BASE_URL.to_string(),
            listing_selectors: ListingSelectors::default(),
            candidate_patterns: CandidatePatterns::default(),
        }
    }
}

impl ParsingConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// CSS selector cascades applied inside one product fragment
#[derive(Debug, Clone)]
pub struct ListingSelectors {
    pub title: Vec<String>,
    pub price: Vec<String>,
    pub image: Vec<String>,
    pub link: Vec<String>,
}

impl Default for ListingSelectors {
    fn default() -> Self {
        Self {
            title: vec![
                "h3".to_string(),
                "h4".to_string(),
                ".Article-desc".to_string(),
                ".product-title".to_string(),
                "[data-testid*=\"title\"]".to_string(),
                "a[title]".to_string(),
            ],
            price: vec![
                ".price".to_string(),
                ".Article-price".to_string(),
                "[data-testid*=\"price\"]".to_string(),
                ".f-priceBox-price".to_string(),
                ".priceBox-price".to_string(),
            ],
            image: vec![
                "img[src]".to_string(),
                "img[data-src]".to_string(),
                "img[data-lazy]".to_string(),
            ],
            link: vec!["a[href]".to_string()],
        }
    }
}

/// Two-tier description of what a product fragment looks like
#[derive(Debug, Clone)]
pub struct CandidatePatterns {
    /// Tags considered by the primary pass
    pub container_tags: Vec<String>,

    /// Regex matched against the `class` attribute in the primary pass
    pub class_pattern: String,

    /// Tag considered by the secondary pass
    pub secondary_tag: String,

    /// Attribute inspected by the secondary pass
    pub secondary_attribute: String,

    /// Regex matched against the secondary attribute value
    pub secondary_pattern: String,
}

impl Default for CandidatePatterns {
    fn default() -> Self {
        Self {
            container_tags: vec!["article".to_string(), "div".to_string()],
            class_pattern: "Article|product|item".to_string(),
            secondary_tag: "div".to_string(),
            secondary_attribute: "data-testid".to_string(),
            secondary_pattern: "product|item".to_string(),
        }
    }
}
