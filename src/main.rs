use anyhow::Result;
use tracing::{error, info, warn};

use smartphone_scraper_lib::domain::fallback_listings;
use smartphone_scraper_lib::infrastructure::{
    AppConfig, ConfigManager, CrawlOutcome, ListingCrawler, init_logging_with_config,
    log_system_info, save_to_json, summary_lines,
};

#[tokio::main]
async fn main() -> Result<()> {
    let config = load_config().await;

    if let Err(e) = init_logging_with_config(&config.logging) {
        eprintln!("Failed to initialize logging: {e:#}");
    }
    log_system_info();

    println!("🚀 Smartphone scraper starting");
    println!("{}", "=".repeat(60));

    let outcome = match ListingCrawler::from_config(&config.scraper) {
        Ok(crawler) => crawler.crawl().await,
        Err(e) => {
            error!("Failed to build crawler: {:#}", e);
            CrawlOutcome::Fallback {
                listings: fallback_listings(),
                reason: format!("{e:#}"),
            }
        }
    };

    if let CrawlOutcome::Fallback { reason, .. } = &outcome {
        warn!("Live extraction unavailable: {}", reason);
        println!("⚠️  Using fallback data ({reason})");
    }

    let listings = outcome.into_listings();
    let output_path = &config.output.path;

    println!("{}", "=".repeat(60));
    match save_to_json(&listings, output_path).await {
        Ok(()) => println!("✅ {} listings saved to {}", listings.len(), output_path.display()),
        Err(e) => {
            error!("Failed to save listings: {:#}", e);
            println!("❌ Could not write {}: {e:#}", output_path.display());
        }
    }

    for line in summary_lines(&listings) {
        println!("   {line}");
    }

    info!("Done");
    Ok(())
}

// An unreadable config file is reported and replaced by defaults
async fn load_config() -> AppConfig {
    let manager = match ConfigManager::new() {
        Ok(manager) => manager,
        Err(e) => {
            eprintln!("Config directory unavailable, using defaults: {e:#}");
            return AppConfig::default();
        }
    };

    match manager.load_config().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Failed to load {}, using defaults: {e:#}",
                manager.config_path().display()
            );
            AppConfig::default()
        }
    }
}
