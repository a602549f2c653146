//! Built-in listings returned when the category page cannot be fetched.

use super::brand::Brand;
use super::listing::{Listing, ListingSource};

const FALLBACK_URL: &str = "https://www.fnac.com";
const FALLBACK_IMAGE_BASE: &str = "https://static.fnac-static.com/multimedia/Images/FR/NR/";

struct FallbackEntry {
    title: &'static str,
    brand: Brand,
    model: &'static str,
    storage: &'static str,
    price: &'static str,
    image: &'static str,
}

const FALLBACK_ENTRIES: [FallbackEntry; 5] = [
    FallbackEntry {
        title: "iPhone 15 Pro 128 GB Titanium Blue",
        brand: Brand::Apple,
        model: "15 Pro",
        storage: "128 GB",
        price: "1 229,00 €",
        image: "iphone15pro.jpg",
    },
    FallbackEntry {
        title: "Samsung Galaxy S24 Ultra 256 GB Phantom Black",
        brand: Brand::Samsung,
        model: "Galaxy S24 Ultra",
        storage: "256 GB",
        price: "1 069,00 €",
        image: "galaxys24.jpg",
    },
    FallbackEntry {
        title: "Google Pixel 8 Pro 128 GB Obsidian",
        brand: Brand::Google,
        model: "Pixel 8 Pro",
        storage: "128 GB",
        price: "799,00 €",
        image: "pixel8.jpg",
    },
    FallbackEntry {
        title: "Xiaomi 14 Ultra 512 GB Black",
        brand: Brand::Xiaomi,
        model: "14 Ultra",
        storage: "512 GB",
        price: "1 299,00 €",
        image: "xiaomi14.jpg",
    },
    FallbackEntry {
        title: "OnePlus 12 256 GB Flowy Emerald",
        brand: Brand::OnePlus,
        model: "12",
        storage: "256 GB",
        price: "949,00 €",
        image: "oneplus12.jpg",
    },
];

/// Number of listings in the fallback dataset
pub const FALLBACK_LEN: usize = FALLBACK_ENTRIES.len();

/// Build the fallback dataset, every listing tagged [`ListingSource::Fallback`]
pub fn fallback_listings() -> Vec<Listing> {
    FALLBACK_ENTRIES
        .iter()
        .map(|entry| Listing {
            title: entry.title.to_string(),
            brand: entry.brand,
            model: entry.model.to_string(),
            storage: entry.storage.to_string(),
            price: entry.price.to_string(),
            url: FALLBACK_URL.to_string(),
            image_url: format!("{FALLBACK_IMAGE_BASE}{}", entry.image),
            source: ListingSource::Fallback,
        })
        .collect()
}
