mod models;
mod output;
mod regions;
mod scrapers;

use std::path::Path;

use chrono::Local;
use tracing::{info, warn, Level};

use models::{CountSummary, RegionResult, TotalResult};
use regions::REGIONS;
use scrapers::{parse_region_page, StoreMapScraper};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("☕ Starbucks Scout - Korea store map scraper");
    info!("=============================================");

    // One stamp for the whole run; every filename and payload reuses it.
    let today = Local::now().date_naive();
    let run_date = today.to_string();
    let run_year = today.format("%Y").to_string();
    let base = Path::new(output::BASE_DIR);

    output::prepare_output_dirs(base, &run_year).await?;

    let scraper = StoreMapScraper::launch()?;
    if let Err(err) = scraper.open_store_map() {
        // The one tolerated failure: report it and let the browser close.
        println!("Failed to open the store map: {err:#}");
        return Ok(());
    }

    let mut summary = CountSummary::new(run_date.clone());
    let mut all_stores = Vec::new();

    for (index, region) in REGIONS.iter().enumerate() {
        let html = scraper.scrape_region(index + 1, region)?;
        let page = parse_region_page(&html)?;

        info!(
            "{}: {} stores displayed, {} extracted",
            region.korean,
            page.displayed_count,
            page.stores.len()
        );
        if page.displayed_count as usize != page.stores.len() {
            warn!(
                "{}: page header reports {} stores but {} were extracted",
                region.korean,
                page.displayed_count,
                page.stores.len()
            );
        }

        summary.add_region(region.korean, page.displayed_count);
        all_stores.extend(page.stores.iter().cloned());

        let result = RegionResult::new(region.korean.to_string(), run_date.clone(), page.stores);
        let path = output::write_region_result(base, &run_year, region.slug, &result).await?;
        info!("💾 Saved {} {} stores to {}", result.count, region.korean, path.display());
    }

    let count_path = output::write_count_summary(base, &summary).await?;
    info!(
        "💾 Saved per-region counts ({} stores nationwide) to {}",
        summary.total,
        count_path.display()
    );

    let total = TotalResult::new(run_date, all_stores);
    let total_path = output::write_total_result(base, &total).await?;
    info!(
        "💾 Saved the combined list of {} stores to {}",
        total.count,
        total_path.display()
    );

    Ok(())
}
