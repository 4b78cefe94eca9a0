//! Normalized league record.

use super::id::LeagueId;
use super::sport::Sport;

/// A top league under one of the catalog sports.
///
/// Produced by league extraction and read by match resolution, which copies
/// it into the match it resolves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct League {
    pub id: LeagueId,
    pub name: String,
    pub region: String,
    pub sport: Sport,
}

impl League {
    pub fn new(
        id: LeagueId,
        name: impl Into<String>,
        region: impl Into<String>,
        sport: Sport,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            region: region.into(),
            sport,
        }
    }
}
