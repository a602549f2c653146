use serde::{Deserialize, Serialize};

use super::brand::Brand;

/// Price placeholder when no price element yields text
pub const PRICE_UNAVAILABLE: &str = "price unavailable";

/// Model placeholder when nothing is left after cleaning the title
pub const MODEL_UNSPECIFIED: &str = "model unspecified";

/// Storage placeholder when the title carries no capacity token
pub const STORAGE_UNSPECIFIED: &str = "unspecified";

/// Where a listing came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingSource {
    /// Extracted from the live category page
    Site,
    /// Taken from the built-in dataset after a transport failure
    Fallback,
}

/// One smartphone listing as written to the output file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    pub title: String,
    pub brand: Brand,
    pub model: String,
    pub storage: String,
    pub price: String,
    pub url: String,
    pub image_url: String,
    pub source: ListingSource,
}

impl Listing {
    pub fn is_fallback(&self) -> bool {
        self.source == ListingSource::Fallback
    }

    /// One-line summary used by the console report
    pub fn summary_line(&self) -> String {
        format!("{} {} - {}", self.brand, self.model, self.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Listing {
        Listing {
            title: "Xiaomi Redmi Note 13 256 Go".to_string(),
            brand: Brand::Xiaomi,
            model: "Redmi Note 13".to_string(),
            storage: "256 GB".to_string(),
            price: "249,99 €".to_string(),
            url: "https://www.fnac.com/a1/redmi".to_string(),
            image_url: String::new(),
            source: ListingSource::Site,
        }
    }

    #[test]
    fn serializes_with_flat_field_names() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["brand"], "Xiaomi");
        assert_eq!(value["source"], "site");
        assert_eq!(value["image_url"], "");
        assert_eq!(value.as_object().unwrap().len(), 8);
    }

    #[test]
    fn summary_line_joins_brand_model_price() {
        assert_eq!(sample().summary_line(), "Xiaomi Redmi Note 13 - 249,99 €");
    }
}
