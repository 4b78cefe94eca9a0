//! Domain model: sports, leagues, matches, markets.

pub mod error;
pub mod fixture;
pub mod id;
pub mod league;
pub mod market;
pub mod sport;

pub use error::DomainError;
pub use fixture::{Match, MatchDetail};
pub use id::{EventId, LeagueId, RunnerId};
pub use league::League;
pub use market::{Market, Runner};
pub use sport::{Locale, Sport, SportCatalog};
