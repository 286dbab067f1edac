// src/config.rs

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Every listing URL must live under this prefix.
pub const URL_PREFIX: &str = "https://volby.cz/pls/ps2017nss/";

/// Per-municipality result page, minus the district and municipality parameters.
const RESULT_PAGE: &str = "https://volby.cz/pls/ps2017nss/ps311?xjazyk=CZ";

/// Query parameter carrying the district (kraj) code on volby.cz pages.
const DISTRICT_PARAM: &str = "xkraj";

/// Command-line surface.
#[derive(Debug, Parser)]
#[command(
    name = "volbyscraper",
    version,
    about = "Scrape 2017 Czech parliamentary election results for one district into CSV"
)]
pub struct Args {
    /// District listing page, e.g. https://volby.cz/pls/ps2017nss/ps32?xjazyk=CZ&xkraj=2&xnumnuts=2101
    pub url: String,

    /// Output file name, must end with `.csv`
    pub csv_file: String,

    /// District code used for result pages; defaults to the listing URL's `xkraj`
    #[arg(long, env = "VOLBY_DISTRICT")]
    pub district: Option<String>,

    /// How many municipality pages may be in flight at once
    #[arg(long, env = "VOLBY_CONCURRENCY", default_value_t = 1)]
    pub concurrency: usize,

    /// Per-request timeout; unset means the HTTP client's default
    #[arg(long, env = "VOLBY_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("`{0}` is not a correct URL, it must start with {prefix}", prefix = URL_PREFIX)]
    InvalidUrl(String),

    #[error("`{0}` is not a CSV file name, it must end with .csv")]
    InvalidCsvPath(String),

    #[error("no district code: `{0}` has no `xkraj` parameter, pass --district")]
    MissingDistrict(String),

    #[error("district code `{0}` must be a number")]
    InvalidDistrict(String),
}

/// Builds the per-municipality result URL by appending the code to a fixed base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultEndpoint {
    base: String,
}

impl ResultEndpoint {
    pub fn for_district(district: &str) -> Self {
        Self {
            base: format!("{RESULT_PAGE}&{DISTRICT_PARAM}={district}&xobec="),
        }
    }

    /// Use an arbitrary base; `url_for` appends the code verbatim.
    pub fn from_base(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn url_for(&self, code: &str) -> String {
        format!("{}{}", self.base, code)
    }
}

/// Validated run configuration. Building one never touches the network.
#[derive(Debug, Clone)]
pub struct Config {
    pub listing_url: String,
    pub csv_file: PathBuf,
    pub endpoint: ResultEndpoint,
    pub concurrency: usize,
    pub timeout: Option<Duration>,
}

impl Config {
    pub fn from_args(args: Args) -> Result<Self, ConfigError> {
        if !args.url.starts_with(URL_PREFIX) {
            return Err(ConfigError::InvalidUrl(args.url));
        }
        if !args.csv_file.ends_with(".csv") {
            return Err(ConfigError::InvalidCsvPath(args.csv_file));
        }

        let listing = Url::parse(&args.url).map_err(|_| ConfigError::InvalidUrl(args.url.clone()))?;
        let district = match args.district {
            Some(d) => d,
            None => district_from_url(&listing)
                .ok_or_else(|| ConfigError::MissingDistrict(args.url.clone()))?,
        };
        if district.is_empty() || !district.chars().all(|c| c.is_ascii_digit()) {
            return Err(ConfigError::InvalidDistrict(district));
        }

        Ok(Self {
            listing_url: args.url,
            csv_file: PathBuf::from(args.csv_file),
            endpoint: ResultEndpoint::for_district(&district),
            concurrency: args.concurrency.max(1),
            timeout: args.timeout_secs.map(Duration::from_secs),
        })
    }
}

fn district_from_url(url: &Url) -> Option<String> {
    url.query_pairs()
        .find(|(k, _)| k == DISTRICT_PARAM)
        .map(|(_, v)| v.into_owned())
        .filter(|v| !v.is_empty())
}
