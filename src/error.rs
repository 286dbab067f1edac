// src/error.rs

use thiserror::Error;

/// Everything that can abort a scrape run.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// DNS, connection, timeout, body read or non-2xx status.
    #[error("fetching {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: BoxError,
    },

    /// A single-valued cell the page is expected to carry is absent.
    #[error("missing field `{field}` on {url}")]
    MissingField { field: &'static str, url: String },

    /// Two sequences that must line up position by position do not.
    #[error("alignment mismatch for {what}: {left} vs {right}")]
    AlignmentMismatch {
        what: String,
        left: usize,
        right: usize,
    },

    #[error("party `{0}` appears more than once on the seed page")]
    DuplicateParty(String),

    #[error("invalid selector `{selector}`: {reason}")]
    InvalidSelector { selector: String, reason: String },
}

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

pub type Result<T> = std::result::Result<T, ScrapeError>;
