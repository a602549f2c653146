//! Turns one candidate fragment into a [`Listing`], or rejects it
//!
//! A candidate is rejected when its title is missing, shorter than three
//! characters, or contains no smartphone keyword. Any other failure while
//! assembling the listing also drops just that candidate.

use anyhow::{Context, Result};
use scraper::{ElementRef, Html, Selector};

use super::candidate_locator::CandidateFragment;
use super::config::ParsingConfig;
use super::field_extractor::{FieldExtractor, extract_text};
use super::title_parser::{extract_brand, extract_model, extract_storage, is_smartphone_title};
use super::{ContextualParser, ParseContext, ParsingError, ParsingResult, compile_selectors};
use crate::domain::{Listing, ListingSource, PRICE_UNAVAILABLE};

/// Minimum title length, in characters
pub const MIN_TITLE_CHARS: usize = 3;

/// Parser for single product fragments
pub struct ListingParser {
    extractor: FieldExtractor,
    title_selectors: Vec<Selector>,
    price_selectors: Vec<Selector>,
    image_selectors: Vec<Selector>,
    link_selectors: Vec<Selector>,
}

impl ListingParser {
    /// Create a parser with the default selectors and base URL
    pub fn new() -> Result<Self> {
        Self::with_config(&ParsingConfig::default())
    }

    /// Create parser with custom configuration
    pub fn with_config(config: &ParsingConfig) -> Result<Self> {
        let selectors = &config.listing_selectors;
        Ok(Self {
            extractor: FieldExtractor::new(&config.base_url).context("Invalid base URL")?,
            title_selectors: compile_selectors(&selectors.title).context("title selectors")?,
            price_selectors: compile_selectors(&selectors.price).context("price selectors")?,
            image_selectors: compile_selectors(&selectors.image).context("image selectors")?,
            link_selectors: compile_selectors(&selectors.link).context("link selectors")?,
        })
    }

    /// Parse a detached candidate fragment
    pub fn parse_candidate(&self, fragment: &CandidateFragment, context: &ParseContext) -> ParsingResult<Listing> {
        let html = fragment.parse();
        self.parse_with_context(&html, &context.for_candidate(fragment.index))
    }

    /// Filter and normalize one product element
    pub fn extract_listing(&self, element: &ElementRef<'_>, index: usize) -> ParsingResult<Listing> {
        let title = extract_text(element, &self.title_selectors);

        if title.is_empty() {
            return Err(ParsingError::TitleMissing { index });
        }
        if title.chars().count() < MIN_TITLE_CHARS {
            return Err(ParsingError::TitleTooShort { index, title });
        }
        if !is_smartphone_title(&title) {
            return Err(ParsingError::NotASmartphone { index, title });
        }

        let price = extract_text(element, &self.price_selectors);
        let url = self.extractor.extract_link(element, &self.link_selectors)?;
        let image_url = self.extractor.extract_image(element, &self.image_selectors);

        let brand = extract_brand(&title);
        let price = price.trim();

        Ok(Listing {
            title: title.trim().to_string(),
            brand,
            model: extract_model(&title, brand),
            storage: extract_storage(&title),
            price: if price.is_empty() {
                PRICE_UNAVAILABLE.to_string()
            } else {
                price.to_string()
            },
            url,
            image_url,
            source: ListingSource::Site,
        })
    }
}

impl ContextualParser for ListingParser {
    type Output = Listing;
    type Context = ParseContext;

    // A parsed fragment sits under a synthetic <html> root; extraction starts
    // at the product element so only its descendants are searched
    fn parse_with_context(&self, html: &Html, context: &Self::Context) -> ParsingResult<Self::Output> {
        let root = html.root_element();
        let product = root.children().find_map(ElementRef::wrap).unwrap_or(root);
        self.extract_listing(&product, context.candidate_index)
    }
}
