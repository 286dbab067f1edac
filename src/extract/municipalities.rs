// src/extract/municipalities.rs

use scraper::Html;

use super::selectors::{select_texts, SelectorStrategy};
use crate::error::{Result, ScrapeError};

/// One municipality of the district, as displayed on the listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Municipality {
    /// Code as displayed (e.g. `529303`); appended verbatim to the result URL.
    pub code: String,
    pub name: String,
}

/// Raw output of the two independent listing passes, not yet paired up.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    pub codes: Vec<String>,
    pub names: Vec<String>,
}

impl Listing {
    /// Pair codes with names by position. Unequal lengths are an error, never a
    /// silent truncation.
    pub fn into_municipalities(self) -> Result<Vec<Municipality>> {
        if self.codes.len() != self.names.len() {
            return Err(ScrapeError::AlignmentMismatch {
                what: "municipality codes/names".to_string(),
                left: self.codes.len(),
                right: self.names.len(),
            });
        }
        Ok(self
            .codes
            .into_iter()
            .zip(self.names)
            .map(|(code, name)| Municipality { code, name })
            .collect())
    }
}

/// Collect codes and names from a district listing page, each in document order.
pub fn list_municipalities(doc: &Html, strategy: &dyn SelectorStrategy) -> Listing {
    let trimmed = |v: Vec<String>| -> Vec<String> {
        v.into_iter().map(|s| s.trim().to_string()).collect()
    };
    Listing {
        codes: trimmed(select_texts(doc, strategy.municipality_codes())),
        names: trimmed(select_texts(doc, strategy.municipality_names())),
    }
}
