// src/extract/results.rs

use scraper::Html;
use tracing::debug;

use super::normalize::normalize_number;
use super::selectors::{cell_text, SelectorStrategy, Statistic};
use crate::error::{Result, ScrapeError};
use crate::fetch::{fetch_document, PageSource};

/// Turnout figures and per-party votes for one municipality.
///
/// Every value is a normalized numeric string, not a parsed number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MunicipalityResult {
    pub registered: String,
    pub envelopes: String,
    pub valid: String,
    /// One entry per party, in the page's ballot order.
    pub votes: Vec<String>,
}

impl MunicipalityResult {
    pub fn statistic(&self, stat: Statistic) -> &str {
        match stat {
            Statistic::Registered => &self.registered,
            Statistic::Envelopes => &self.envelopes,
            Statistic::Valid => &self.valid,
        }
    }
}

/// Pull the three statistics and the vote list out of a parsed result page.
/// `url` only labels a `MissingField` error.
pub fn parse_result(
    doc: &Html,
    strategy: &dyn SelectorStrategy,
    url: &str,
) -> Result<MunicipalityResult> {
    let scalar = |stat: Statistic| {
        doc.select(strategy.statistic(stat))
            .next()
            .map(|el| normalize_number(&cell_text(el)))
            .ok_or_else(|| ScrapeError::MissingField {
                field: stat.as_str(),
                url: url.to_string(),
            })
    };

    let registered = scalar(Statistic::Registered)?;
    let envelopes = scalar(Statistic::Envelopes)?;
    let valid = scalar(Statistic::Valid)?;
    let votes = doc
        .select(strategy.party_votes())
        .map(|el| normalize_number(&cell_text(el)))
        .collect();

    Ok(MunicipalityResult {
        registered,
        envelopes,
        valid,
        votes,
    })
}

/// Fetch one municipality's result page and extract it.
pub async fn fetch_result<S: PageSource + ?Sized>(
    source: &S,
    strategy: &dyn SelectorStrategy,
    url: &str,
) -> Result<MunicipalityResult> {
    let doc = fetch_document(source, url).await?;
    let result = parse_result(&doc, strategy, url)?;
    debug!(%url, votes = result.votes.len(), "parsed result page");
    Ok(result)
}
