//! Brand, model and storage derivation from a product title.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use tracing::debug;

use crate::domain::{BRAND_KEYWORDS, Brand, MODEL_UNSPECIFIED, STORAGE_UNSPECIFIED};

/// Lowercase keywords, at least one of which a smartphone title contains
pub const SMARTPHONE_KEYWORDS: [&str; 10] = [
    "iphone",
    "samsung",
    "galaxy",
    "pixel",
    "xiaomi",
    "huawei",
    "oneplus",
    "oppo",
    "smartphone",
    "mobile",
];

/// Longest model string kept, in characters
pub const MAX_MODEL_CHARS: usize = 50;

static STORAGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d+)\s*(?:Go|GB)").expect("storage pattern is valid"));

static CAPACITY_TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\d+\s*(?:Go|GB)").expect("capacity pattern is valid"));

static PARENTHESIZED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\([^)]*\)").expect("parenthesis pattern is valid"));

static WHITESPACE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// True when the lowercased title contains any smartphone keyword
pub fn is_smartphone_title(title: &str) -> bool {
    let title_lower = title.to_lowercase();
    SMARTPHONE_KEYWORDS
        .iter()
        .any(|keyword| title_lower.contains(keyword))
}

/// First brand of the priority table with a keyword contained in the title
pub fn extract_brand(title: &str) -> Brand {
    let title_lower = title.to_lowercase();
    BRAND_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| title_lower.contains(keyword)))
        .map_or(Brand::Other, |(brand, _)| *brand)
}

/// Model name: the title without the brand word, parenthesized parts and
/// capacity tokens, whitespace collapsed, capped at [`MAX_MODEL_CHARS`].
///
/// Cleaning repeats until the text stops changing, so a removal that joins
/// two halves into a new capacity token or brand word is cleaned as well and
/// the result is stable under a second pass.
pub fn extract_model(title: &str, brand: Brand) -> String {
    let brand_re = if brand.is_known() { brand_word_pattern(brand) } else { None };

    let mut model = title.to_string();
    loop {
        let next = clean_model_once(&model, brand_re.as_ref());
        if next == model {
            break;
        }
        model = next;
    }

    if model.is_empty() {
        MODEL_UNSPECIFIED.to_string()
    } else {
        model
    }
}

// Never lengthens its input, which bounds the loop in `extract_model`
fn clean_model_once(text: &str, brand_re: Option<&Regex>) -> String {
    let without_brand = match brand_re {
        Some(re) => re.replace_all(text, ""),
        None => text.into(),
    };

    let model = PARENTHESIZED_RE.replace_all(&without_brand, "");
    let model = CAPACITY_TOKEN_RE.replace_all(&model, "");
    let model = WHITESPACE_RE.replace_all(&model, " ");

    let truncated: String = model.trim().chars().take(MAX_MODEL_CHARS).collect();
    truncated.trim_end().to_string()
}

/// Storage capacity normalized to `"<digits> GB"`
pub fn extract_storage(title: &str) -> String {
    STORAGE_RE
        .captures(title)
        .and_then(|caps| caps.get(1))
        .map_or_else(
            || STORAGE_UNSPECIFIED.to_string(),
            |digits| format!("{} GB", digits.as_str()),
        )
}

fn brand_word_pattern(brand: Brand) -> Option<Regex> {
    let pattern = format!(r"\b{}\b", regex::escape(brand.as_str()));
    match RegexBuilder::new(&pattern).case_insensitive(true).build() {
        Ok(re) => Some(re),
        Err(e) => {
            debug!("Brand pattern for {} unavailable: {}", brand, e);
            None
        }
    }
}
