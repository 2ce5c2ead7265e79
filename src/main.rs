//! # Magazine Catalog Demo
//!
//! Builds a small catalog in the process-wide registry and logs the derived
//! relationship queries.
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

use magazine_catalog::lifecycle::{setup_tracing, Catalog};
use magazine_catalog::model::{Author, Magazine};
use tracing::{info, warn};

fn main() -> Result<(), String> {
    setup_tracing();

    info!("Starting magazine catalog demo");

    let sam = Author::new("Sam").map_err(|e| e.to_string())?;
    let bo = Author::new("Bo").map_err(|e| e.to_string())?;
    let vogue = Magazine::new("Vogue", "Fashion").map_err(|e| e.to_string())?;
    let wired = Magazine::new("Wired", "Technology").map_err(|e| e.to_string())?;

    for title in ["Spring Lines", "Summer Lines", "Autumn Lines"] {
        sam.add_article(&vogue, title).map_err(|e| e.to_string())?;
    }
    sam.add_article(&wired, "Chips and Dips")
        .map_err(|e| e.to_string())?;
    bo.add_article(&vogue, "Runway Notes")
        .map_err(|e| e.to_string())?;

    // A title that is too short is rejected and never registered
    if let Err(e) = bo.add_article(&wired, "Hi") {
        warn!(error = %e, "Expected rejection");
    }

    let topics = sam.topic_areas().unwrap_or_default();
    info!(author = %sam, ?topics, "Topic areas");
    info!(author = %bo, articles = bo.articles().len(), "Articles");

    let titles = vogue.article_titles().unwrap_or_default();
    info!(magazine = %vogue, ?titles, "Article titles");

    match vogue.contributing_authors() {
        Some(authors) => {
            let names: Vec<&str> = authors.iter().map(|a| a.name()).collect();
            info!(magazine = %vogue, ?names, "Contributing authors");
        }
        None => info!(magazine = %vogue, "No contributing authors"),
    }
    if wired.contributing_authors().is_none() {
        info!(magazine = %wired, "No contributing authors");
    }

    let catalog = Catalog::global();
    info!(
        articles = catalog.article_count(),
        magazines = catalog.magazine_count(),
        "Demo complete"
    );
    Ok(())
}
