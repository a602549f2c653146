//! Domain module - listing entity, brand table and fallback dataset
//!
//! Everything in here is plain data: no I/O, no HTML.

pub mod brand;
pub mod fallback;
pub mod listing;

pub use brand::{BRAND_KEYWORDS, Brand};
pub use fallback::{FALLBACK_LEN, fallback_listings};
pub use listing::{Listing, ListingSource, MODEL_UNSPECIFIED, PRICE_UNAVAILABLE, STORAGE_UNSPECIFIED};
