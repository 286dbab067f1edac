// src/pipeline.rs

use tracing::info;

use crate::config::{Config, ResultEndpoint};
use crate::error::Result;
use crate::extract::{discover_parties, list_municipalities, Ps2017Selectors, SelectorStrategy};
use crate::fetch::{fetch_document, HttpSource, PageSource};
use crate::table::{aggregate, Table};

/// Listing page -> municipalities -> seed parties -> aggregated table.
pub async fn scrape<S: PageSource + ?Sized>(
    source: &S,
    strategy: &dyn SelectorStrategy,
    listing_url: &str,
    endpoint: &ResultEndpoint,
    concurrency: usize,
) -> Result<Table> {
    let listing = {
        let doc = fetch_document(source, listing_url).await?;
        list_municipalities(&doc, strategy)
    };
    let municipalities = listing.into_municipalities()?;
    info!(count = municipalities.len(), "listed municipalities");

    let codes: Vec<String> = municipalities.iter().map(|m| m.code.clone()).collect();
    let parties = discover_parties(source, strategy, endpoint, &codes).await?;

    aggregate(source, strategy, endpoint, &municipalities, &parties, concurrency).await
}

/// `scrape` over HTTP with the 2017 page layout.
pub async fn scrape_with_config(config: &Config) -> Result<Table> {
    let source = HttpSource::with_timeout(config.timeout)?;
    let strategy = Ps2017Selectors::new()?;
    scrape(
        &source,
        &strategy,
        &config.listing_url,
        &config.endpoint,
        config.concurrency,
    )
    .await
}
