//! Raw wire shapes returned by the betting line API.
//!
//! These mirror the JSON documents as delivered. Fields the reader does not
//! use are ignored; optional fields stay `Option` here and are resolved to
//! concrete values during normalization.

use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{Error, Result};

/// One sport with its regions, from the bulk sports document.
#[derive(Debug, Clone, Deserialize)]
pub struct SportContainer {
    pub name: String,
    #[serde(default)]
    pub regions: Vec<Region>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Region {
    pub name: String,
    #[serde(default)]
    pub leagues: Vec<WireLeague>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WireLeague {
    pub id: u64,
    pub name: String,
    /// Featured/promoted flag.
    #[serde(default)]
    pub top: bool,
}

/// Upcoming events of one league.
///
/// The API lists the earliest event first; the order is never re-sorted.
#[derive(Debug, Clone, Deserialize)]
pub struct EventsWrapper {
    #[serde(default)]
    pub events: Vec<EventModule>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventModule {
    pub id: u64,
}

/// Full detail of one match.
#[derive(Debug, Clone, Deserialize)]
pub struct MatchData {
    pub name: String,
    /// Kickoff as epoch milliseconds.
    pub kickoff: i64,
    pub markets: Option<Vec<MarketData>>,
}

/// A market as delivered. `runners` is required: a market without a runner
/// list is rejected at decode time.
#[derive(Debug, Clone, Deserialize)]
pub struct MarketData {
    pub name: String,
    pub handicap: Option<String>,
    pub runners: Vec<RunnerData>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RunnerData {
    pub id: u64,
    pub name: String,
    pub price: Decimal,
}

/// Decode a response body fetched from `url`.
pub fn decode<T: DeserializeOwned>(url: &str, body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|source| Error::Decode {
        url: url.to_owned(),
        source,
    })
}
