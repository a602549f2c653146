//! HTML parsing infrastructure for smartphone listings
//!
//! Page-level parsing finds candidate product fragments; fragment-level
//! parsing turns one candidate into a [`Listing`](crate::domain::Listing)
//! or explains why it was dropped.

pub mod candidate_locator;
pub mod config;
pub mod context;
pub mod error;
pub mod field_extractor;
pub mod listing_parser;
pub mod title_parser;

// Re-export public types
pub use candidate_locator::{CandidateFragment, CandidateLocator};
pub use config::{CandidatePatterns, ListingSelectors, ParsingConfig};
pub use context::ParseContext;
pub use error::{ParsingError, ParsingResult};
pub use field_extractor::{FieldExtractor, extract_text};
pub use listing_parser::ListingParser;
pub use title_parser::{
    SMARTPHONE_KEYWORDS, extract_brand, extract_model, extract_storage, is_smartphone_title,
};

use anyhow::Result;
use scraper::{Html, Selector};
use tracing::{debug, warn};

/// Parser trait for HTML inputs that need page or candidate context
pub trait ContextualParser {
    type Output;
    type Context;

    /// Parse HTML with contextual information
    fn parse_with_context(&self, html: &Html, context: &Self::Context) -> ParsingResult<Self::Output>;
}

/// Compile selector strings, keeping the ones that parse and their order.
/// Fails only when nothing in the cascade is usable.
pub(crate) fn compile_selectors(selector_strings: &[String]) -> Result<Vec<Selector>> {
    let mut selectors = Vec::with_capacity(selector_strings.len());
    let mut errors = Vec::new();

    for selector_str in selector_strings {
        match Selector::parse(selector_str) {
            Ok(selector) => selectors.push(selector),
            Err(e) => {
                warn!("Failed to compile selector '{}': {}", selector_str, e);
                errors.push(
                    ParsingError::InvalidSelector {
                        selector: selector_str.clone(),
                        reason: e.to_string(),
                    }
                    .to_string(),
                );
            }
        }
    }

    if selectors.is_empty() {
        return Err(anyhow::anyhow!(
            "No valid selectors compiled. Errors: {}",
            errors.join(", ")
        ));
    }

    if !errors.is_empty() {
        debug!("Some selectors failed to compile: {}", errors.join(", "));
    }

    Ok(selectors)
}
