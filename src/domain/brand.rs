//! Smartphone brands and the keyword table used to recognise them in titles.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of brands a listing can be attributed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Brand {
    Apple,
    Samsung,
    Google,
    Xiaomi,
    OnePlus,
    Huawei,
    Oppo,
    Vivo,
    Sony,
    Nokia,
    Motorola,
    Realme,
    Honor,
    Other,
}

/// Brand keyword table in priority order. The first brand with a keyword
/// contained in the lowercased title wins, so entries must not be reordered.
pub const BRAND_KEYWORDS: &[(Brand, &[&str])] = &[
    (Brand::Apple, &["apple", "iphone"]),
    (Brand::Samsung, &["samsung", "galaxy"]),
    (Brand::Google, &["google", "pixel"]),
    (Brand::Xiaomi, &["xiaomi", "redmi", "poco"]),
    (Brand::OnePlus, &["oneplus", "one plus"]),
    (Brand::Huawei, &["huawei"]),
    (Brand::Oppo, &["oppo"]),
    (Brand::Vivo, &["vivo"]),
    (Brand::Sony, &["sony", "xperia"]),
    (Brand::Nokia, &["nokia"]),
    (Brand::Motorola, &["motorola", "moto"]),
    (Brand::Realme, &["realme"]),
    (Brand::Honor, &["honor"]),
];

impl Brand {
    /// Display name, also the word stripped from titles when deriving a model
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Apple => "Apple",
            Self::Samsung => "Samsung",
            Self::Google => "Google",
            Self::Xiaomi => "Xiaomi",
            Self::OnePlus => "OnePlus",
            Self::Huawei => "Huawei",
            Self::Oppo => "Oppo",
            Self::Vivo => "Vivo",
            Self::Sony => "Sony",
            Self::Nokia => "Nokia",
            Self::Motorola => "Motorola",
            Self::Realme => "Realme",
            Self::Honor => "Honor",
            Self::Other => "Other",
        }
    }

    pub const fn is_known(self) -> bool {
        !matches!(self, Self::Other)
    }
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_table_covers_every_known_brand_once() {
        let brands: Vec<Brand> = BRAND_KEYWORDS.iter().map(|(brand, _)| *brand).collect();
        assert_eq!(brands.len(), 13);
        assert!(!brands.contains(&Brand::Other));
        for (i, brand) in brands.iter().enumerate() {
            assert!(!brands[i + 1..].contains(brand), "{brand} listed twice");
        }
    }

    #[test]
    fn keywords_are_lowercase() {
        for (_, keywords) in BRAND_KEYWORDS {
            for keyword in *keywords {
                assert_eq!(*keyword, keyword.to_lowercase());
            }
        }
    }

    #[test]
    fn serializes_by_name() {
        assert_eq!(serde_json::to_string(&Brand::OnePlus).unwrap(), "\"OnePlus\"");
        assert_eq!(serde_json::to_string(&Brand::Other).unwrap(), "\"Other\"");
    }
}
