//! Application layer: the fetch-filter-fanout-transform pipeline.
//!
//! - [`extractor`] - top leagues from the bulk sports document
//! - [`resolver`] - first match of one league (two chained fetches)
//! - [`fanout`] - bounded concurrent resolution with per-league isolation
//! - [`normalizer`] - raw markets/runners to domain shapes
//! - [`format`] - text rendering
//! - [`pipeline`] - the whole run

pub mod endpoints;
pub mod extractor;
pub mod fanout;
pub mod format;
pub mod normalizer;
pub mod pipeline;
pub mod reader;
pub mod resolver;

pub use endpoints::Endpoints;
pub use extractor::extract_top_leagues;
pub use fanout::{FanOut, FanOutReport, LeagueFailure, ResultOrder};
pub use format::MatchFormatter;
pub use normalizer::normalize_markets;
pub use pipeline::{Pipeline, RunSummary};
pub use reader::LineReader;
pub use resolver::MatchResolver;
