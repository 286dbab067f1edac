// src/table/mod.rs

pub mod aggregate;
pub mod write;

pub use aggregate::aggregate;
pub use write::{write_csv, write_csv_file};

use crate::error::{Result, ScrapeError};
use crate::extract::{Municipality, MunicipalityResult, Statistic};

/// Columns every table starts with, before one column per party.
pub const FIXED_COLUMNS: [&str; 5] = ["Code", "Location", "Registered", "Envelopes", "Valid"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub values: Vec<String>,
}

impl Column {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: Vec::new(),
        }
    }
}

/// Column-oriented results, one row per municipality.
///
/// All columns always have the same length; `push_row` checks a row fully
/// before touching any column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    columns: Vec<Column>,
    rows: usize,
}

impl Table {
    /// Empty table whose party columns follow `parties` exactly.
    pub fn new(parties: &[String]) -> Result<Self> {
        let mut columns: Vec<Column> = FIXED_COLUMNS.iter().map(|n| Column::new(*n)).collect();
        for party in parties {
            if columns.iter().any(|c| c.name == *party) {
                return Err(ScrapeError::DuplicateParty(party.clone()));
            }
            columns.push(Column::new(party.clone()));
        }
        Ok(Self { columns, rows: 0 })
    }

    pub fn row_count(&self) -> usize {
        self.rows
    }

    pub fn party_count(&self) -> usize {
        self.columns.len() - FIXED_COLUMNS.len()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn headers(&self) -> impl Iterator<Item = &str> + '_ {
        self.columns.iter().map(|c| c.name.as_str())
    }

    pub fn party_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.headers().skip(FIXED_COLUMNS.len())
    }

    /// Append one municipality. The vote list must line up with the party
    /// columns one to one.
    pub fn push_row(&mut self, municipality: &Municipality, result: &MunicipalityResult) -> Result<()> {
        if result.votes.len() != self.party_count() {
            return Err(ScrapeError::AlignmentMismatch {
                what: format!("votes/parties of municipality {}", municipality.code),
                left: result.votes.len(),
                right: self.party_count(),
            });
        }

        let fixed = [
            municipality.code.as_str(),
            municipality.name.as_str(),
            result.statistic(Statistic::Registered),
            result.statistic(Statistic::Envelopes),
            result.statistic(Statistic::Valid),
        ];
        let values = fixed.into_iter().chain(result.votes.iter().map(String::as_str));
        for (column, value) in self.columns.iter_mut().zip(values) {
            column.values.push(value.to_string());
        }
        self.rows += 1;
        Ok(())
    }

    /// Row-major view, in insertion order.
    pub fn rows(&self) -> impl Iterator<Item = Vec<&str>> + '_ {
        (0..self.rows).map(move |i| {
            self.columns
                .iter()
                .map(|c| c.values[i].as_str())
                .collect()
        })
    }
}
