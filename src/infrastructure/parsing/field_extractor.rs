//! Selector-cascade field extraction inside one product fragment
//!
//! Every extractor is best-effort: a cascade that finds nothing yields an
//! empty string. Only an unresolvable product link is reported as an error.

use scraper::{ElementRef, Selector};
use tracing::debug;
use url::Url;

use super::{ParsingError, ParsingResult};

/// Image attributes in preference order: lazy-load source first, eager
/// `src` next, secondary lazy attribute last
const IMAGE_ATTRIBUTES: [&str; 3] = ["data-src", "src", "data-lazy"];

/// First non-empty trimmed text found by the cascade, or an empty string.
///
/// Only the first descendant matched by each selector is considered.
pub fn extract_text(fragment: &ElementRef<'_>, selectors: &[Selector]) -> String {
    selectors
        .iter()
        .find_map(|selector| extract_text_by_selector(fragment, selector))
        .unwrap_or_default()
}

fn extract_text_by_selector(fragment: &ElementRef<'_>, selector: &Selector) -> Option<String> {
    select_descendant(fragment, selector)
        .map(|e| e.text().collect::<String>().trim().to_string())
        .filter(|text| !text.is_empty())
}

/// First match strictly below `fragment`; the fragment element itself never
/// matches its own field selectors
fn select_descendant<'a>(fragment: &ElementRef<'a>, selector: &Selector) -> Option<ElementRef<'a>> {
    fragment
        .select(selector)
        .find(|element| element.id() != fragment.id())
}

/// Resolves link and image references against the site root
#[derive(Debug, Clone)]
pub struct FieldExtractor {
    base_url: Url,
}

impl FieldExtractor {
    pub fn new(base_url: &str) -> ParsingResult<Self> {
        let base_url = Url::parse(base_url).map_err(|e| {
            ParsingError::url_resolution_failed(base_url, &format!("Invalid base URL: {e}"), None)
        })?;
        Ok(Self { base_url })
    }

    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve a (possibly relative) reference to an absolute URL
    pub fn resolve_url(&self, href: &str) -> ParsingResult<String> {
        self.base_url
            .join(href.trim())
            .map(String::from)
            .map_err(|e| {
                ParsingError::url_resolution_failed(
                    href,
                    &format!("Failed to join URL: {e}"),
                    Some(self.base_url.as_str()),
                )
            })
    }

    /// Absolute image URL from the cascade, or an empty string.
    ///
    /// A candidate image whose reference cannot be resolved is skipped and the
    /// cascade moves on to the next selector.
    pub fn extract_image(&self, fragment: &ElementRef<'_>, selectors: &[Selector]) -> String {
        for selector in selectors {
            let Some(img) = select_descendant(fragment, selector) else {
                continue;
            };

            let source = IMAGE_ATTRIBUTES
                .iter()
                .find_map(|attr| img.value().attr(attr).filter(|v| !v.trim().is_empty()));

            if let Some(src) = source {
                match self.resolve_url(src) {
                    Ok(url) => return url,
                    Err(e) => debug!("Skipping image reference: {}", e),
                }
            }
        }
        String::new()
    }

    /// Absolute product URL from the first matching link, or an empty string
    /// when the fragment has no link. An unresolvable `href` is an error.
    pub fn extract_link(&self, fragment: &ElementRef<'_>, selectors: &[Selector]) -> ParsingResult<String> {
        let href = selectors
            .iter()
            .find_map(|selector| select_descendant(fragment, selector))
            .and_then(|link| link.value().attr("href"))
            .map(str::trim)
            .filter(|href| !href.is_empty());

        match href {
            Some(href) => self.resolve_url(href),
            None => Ok(String::new()),
        }
    }
}
