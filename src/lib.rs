pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod pipeline;
pub mod table;

#[cfg(test)]
pub(crate) mod fixtures;

pub use config::{Config, ConfigError};
pub use error::ScrapeError;
