//! Locates product fragments on a category page
//!
//! Two passes: container tags whose `class` matches the primary vocabulary,
//! then, only when that finds nothing, elements carrying a test-id attribute
//! that matches the secondary vocabulary.

use anyhow::{Context, Result};
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use super::config::{CandidatePatterns, ParsingConfig};
use super::{ContextualParser, ParseContext, ParsingResult};

/// Owned HTML of one candidate product, detached from the page DOM
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFragment {
    /// Zero-based position in page order
    pub index: usize,
    pub html: String,
}

impl CandidateFragment {
    /// Parse the fragment on its own; the product element sits under the
    /// returned document's root element
    pub fn parse(&self) -> Html {
        Html::parse_fragment(&self.html)
    }
}

/// Finds candidate product fragments using the two-tier pattern
pub struct CandidateLocator {
    container_selector: Selector,
    class_pattern: Regex,
    secondary_selector: Selector,
    secondary_attribute: String,
    secondary_pattern: Regex,
}

impl CandidateLocator {
    /// Create a locator with default patterns
    pub fn new() -> Result<Self> {
        Self::with_config(&ParsingConfig::default().candidate_patterns)
    }

    /// Create a locator with custom patterns
    pub fn with_config(patterns: &CandidatePatterns) -> Result<Self> {
        let container_list = patterns.container_tags.join(", ");
        let container_selector = Selector::parse(&container_list)
            .map_err(|e| anyhow::anyhow!("Invalid container tags '{}': {}", container_list, e))?;

        let secondary_list = format!("{}[{}]", patterns.secondary_tag, patterns.secondary_attribute);
        let secondary_selector = Selector::parse(&secondary_list)
            .map_err(|e| anyhow::anyhow!("Invalid secondary selector '{}': {}", secondary_list, e))?;

        Ok(Self {
            container_selector,
            class_pattern: Regex::new(&patterns.class_pattern)
                .context("Invalid class pattern")?,
            secondary_selector,
            secondary_attribute: patterns.secondary_attribute.clone(),
            secondary_pattern: Regex::new(&patterns.secondary_pattern)
                .context("Invalid secondary pattern")?,
        })
    }

    /// All candidate fragments of the page, in document order
    pub fn locate(&self, html: &Html) -> Vec<CandidateFragment> {
        let primary: Vec<ElementRef<'_>> = html
            .select(&self.container_selector)
            .filter(|element| {
                element
                    .value()
                    .attr("class")
                    .is_some_and(|class| self.class_pattern.is_match(class))
            })
            .collect();

        let elements = if primary.is_empty() {
            debug!("No class-matched containers, trying {} attribute", self.secondary_attribute);
            html.select(&self.secondary_selector)
                .filter(|element| {
                    element
                        .value()
                        .attr(&self.secondary_attribute)
                        .is_some_and(|value| self.secondary_pattern.is_match(value))
                })
                .collect()
        } else {
            primary
        };

        elements
            .iter()
            .enumerate()
            .map(|(index, element)| CandidateFragment {
                index,
                html: element.html(),
            })
            .collect()
    }
}

impl ContextualParser for CandidateLocator {
    type Output = Vec<CandidateFragment>;
    type Context = ParseContext;

    fn parse_with_context(&self, html: &Html, context: &Self::Context) -> ParsingResult<Self::Output> {
        let fragments = self.locate(html);
        debug!("Located {} candidates on {}", fragments.len(), context.page_url);
        Ok(fragments)
    }
}
