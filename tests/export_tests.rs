//! Output file round-trips
use tempfile::tempdir;

use smartphone_scraper_lib::domain::{Brand, Listing, ListingSource, fallback_listings};
use smartphone_scraper_lib::infrastructure::{load_from_json, save_to_json};

fn site_listing() -> Listing {
    Listing {
        title: "Honor Magic6 Lite 256 Go Émeraude".to_string(),
        brand: Brand::Honor,
        model: "Magic6 Lite Émeraude".to_string(),
        storage: "256 GB".to_string(),
        price: "299,99 €".to_string(),
        url: "https://www.fnac.com/a19/honor".to_string(),
        image_url: String::new(),
        source: ListingSource::Site,
    }
}

#[tokio::test]
async fn round_trip_preserves_every_field() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("smartphones.json");

    let mut listings = vec![site_listing()];
    listings.extend(fallback_listings());

    save_to_json(&listings, &path).await.unwrap();
    let loaded = load_from_json(&path).await.unwrap();

    assert_eq!(loaded, listings);
}

#[tokio::test]
async fn non_ascii_text_is_written_unescaped() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("smartphones.json");

    save_to_json(&[site_listing()], &path).await.unwrap();
    let content = std::fs::read_to_string(&path).unwrap();

    assert!(content.contains("Émeraude"));
    assert!(content.contains("299,99 €"));
    assert!(!content.contains("\\u"));
    assert!(content.contains("\"brand\": \"Honor\""));
    assert!(content.contains("\"source\": \"site\""));
}

#[tokio::test]
async fn existing_file_is_replaced() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("smartphones.json");

    save_to_json(&fallback_listings(), &path).await.unwrap();
    save_to_json(&[], &path).await.unwrap();

    assert!(load_from_json(&path).await.unwrap().is_empty());
}
