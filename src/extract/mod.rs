// src/extract/mod.rs

pub mod municipalities;
pub mod normalize;
pub mod parties;
pub mod results;
pub mod selectors;

pub use municipalities::{list_municipalities, Listing, Municipality};
pub use normalize::normalize_number;
pub use parties::{discover_parties, extract_parties};
pub use results::{fetch_result, parse_result, MunicipalityResult};
pub use selectors::{Ps2017Selectors, SelectorStrategy, Statistic};
