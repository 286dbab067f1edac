// src/extract/selectors.rs

use scraper::{ElementRef, Html, Selector};

use crate::error::{Result, ScrapeError};

/// The three turnout figures read from a municipality result page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Statistic {
    Registered,
    Envelopes,
    Valid,
}

impl Statistic {
    pub fn as_str(&self) -> &'static str {
        match self {
            Statistic::Registered => "registered",
            Statistic::Envelopes => "envelopes",
            Statistic::Valid => "valid",
        }
    }
}

/// Where each piece of data lives in the markup. Swap the implementation when
/// the site layout changes; the pipeline never sees raw CSS.
pub trait SelectorStrategy {
    /// Listing page: one cell per municipality holding its name.
    fn municipality_names(&self) -> &Selector;
    /// Listing page: one cell per municipality holding its code.
    fn municipality_codes(&self) -> &Selector;
    /// Result page: party name cells, in ballot order.
    fn party_names(&self) -> &Selector;
    /// Result page: vote cells, in the same order as `party_names`.
    fn party_votes(&self) -> &Selector;
    /// Result page: the single cell holding `stat`.
    fn statistic(&self, stat: Statistic) -> &Selector;
}

/// Layout of the 2017 Chamber of Deputies results (`ps2017nss`).
///
/// Long ballots are split over two tables whose header tokens start with
/// `t1` and `t2`; each repeated selector matches both.
#[derive(Debug, Clone)]
pub struct Ps2017Selectors {
    names: Selector,
    codes: Selector,
    parties: Selector,
    votes: Selector,
    registered: Selector,
    envelopes: Selector,
    valid: Selector,
}

pub const MUNICIPALITY_NAME_CSS: &str = "td.overflow_name";
pub const MUNICIPALITY_CODE_CSS: &str = "td.cislo";
pub const PARTY_NAME_CSS: &str =
    r#"td.overflow_name[headers="t1sa1 t1sb2"], td.overflow_name[headers="t2sa1 t2sb2"]"#;
pub const PARTY_VOTES_CSS: &str =
    r#"td.cislo[headers="t1sa2 t1sb3"], td.cislo[headers="t2sa2 t2sb3"]"#;
pub const REGISTERED_CSS: &str = r#"td.cislo[headers="sa2"]"#;
pub const ENVELOPES_CSS: &str = r#"td.cislo[headers="sa3"]"#;
pub const VALID_CSS: &str = r#"td.cislo[headers="sa6"]"#;

impl Ps2017Selectors {
    pub fn new() -> Result<Self> {
        Ok(Self {
            names: parse(MUNICIPALITY_NAME_CSS)?,
            codes: parse(MUNICIPALITY_CODE_CSS)?,
            parties: parse(PARTY_NAME_CSS)?,
            votes: parse(PARTY_VOTES_CSS)?,
            registered: parse(REGISTERED_CSS)?,
            envelopes: parse(ENVELOPES_CSS)?,
            valid: parse(VALID_CSS)?,
        })
    }
}

impl SelectorStrategy for Ps2017Selectors {
    fn municipality_names(&self) -> &Selector {
        &self.names
    }

    fn municipality_codes(&self) -> &Selector {
        &self.codes
    }

    fn party_names(&self) -> &Selector {
        &self.parties
    }

    fn party_votes(&self) -> &Selector {
        &self.votes
    }

    fn statistic(&self, stat: Statistic) -> &Selector {
        match stat {
            Statistic::Registered => &self.registered,
            Statistic::Envelopes => &self.envelopes,
            Statistic::Valid => &self.valid,
        }
    }
}

/// Parse a CSS selector, keeping the offending text in the error.
pub fn parse(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ScrapeError::InvalidSelector {
        selector: css.to_string(),
        reason: format!("{:?}", e),
    })
}

/// Concatenated text of every descendant text node.
pub fn cell_text(el: ElementRef<'_>) -> String {
    el.text().collect()
}

/// Text of every match, in document order.
pub fn select_texts(doc: &Html, sel: &Selector) -> Vec<String> {
    doc.select(sel).map(cell_text).collect()
}
