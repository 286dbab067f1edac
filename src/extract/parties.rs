// src/extract/parties.rs

use scraper::Html;
use tracing::{debug, info};

use super::selectors::{select_texts, SelectorStrategy};
use crate::config::ResultEndpoint;
use crate::error::Result;
use crate::fetch::{fetch_document, PageSource};

/// Party names on a result page, in ballot (document) order.
pub fn extract_parties(doc: &Html, strategy: &dyn SelectorStrategy) -> Vec<String> {
    select_texts(doc, strategy.party_names())
}

/// Read the party list from the first municipality's result page.
///
/// Every other municipality in the district is assumed to carry the same
/// parties in the same order. No codes means no parties and no request.
pub async fn discover_parties<S: PageSource + ?Sized>(
    source: &S,
    strategy: &dyn SelectorStrategy,
    endpoint: &ResultEndpoint,
    codes: &[String],
) -> Result<Vec<String>> {
    let Some(seed) = codes.first() else {
        debug!("empty district, no parties to discover");
        return Ok(Vec::new());
    };
    let url = endpoint.url_for(seed);
    let doc = fetch_document(source, &url).await?;
    let parties = extract_parties(&doc, strategy);
    info!(seed = %seed, count = parties.len(), "discovered parties");
    Ok(parties)
}
