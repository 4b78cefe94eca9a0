//! Resolved matches.

use chrono::{DateTime, Utc};

use super::id::EventId;
use super::league::League;
use super::market::Market;

/// Match detail as fetched, before it is tied to a league.
///
/// The only way to obtain a [`Match`] is [`MatchDetail::into_match`], so a
/// match always carries exactly one league.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchDetail {
    pub id: EventId,
    pub name: String,
    pub kickoff: DateTime<Utc>,
    pub markets: Vec<Market>,
}

impl MatchDetail {
    /// Attach the league this match was resolved from.
    #[must_use]
    pub fn into_match(self, league: League) -> Match {
        Match {
            id: self.id,
            name: self.name,
            kickoff: self.kickoff,
            league,
            markets: self.markets,
        }
    }
}

/// The first upcoming match of a league with its markets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    /// Same as the id of the event it was resolved from.
    pub id: EventId,
    pub name: String,
    pub kickoff: DateTime<Utc>,
    pub league: League,
    pub markets: Vec<Market>,
}
