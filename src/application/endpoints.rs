//! API endpoint set used by the reader.

use std::fmt::Display;

use crate::domain::{EventId, LeagueId};

/// Placeholder substituted with an id in endpoint templates.
pub const ID_PLACEHOLDER: &str = "{id}";

/// The three documents the reader fetches.
///
/// `league_events` and `match_detail` are templates. A template containing
/// `{id}` has the placeholder replaced; one without it has the id appended,
/// which is how the upstream query-string endpoints are usually written
/// (`...&league_id=`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    sports: String,
    league_events: String,
    match_detail: String,
}

impl Endpoints {
    pub fn new(
        sports: impl Into<String>,
        league_events: impl Into<String>,
        match_detail: impl Into<String>,
    ) -> Self {
        Self {
            sports: sports.into(),
            league_events: league_events.into(),
            match_detail: match_detail.into(),
        }
    }

    /// Bulk sports/regions/leagues document.
    #[must_use]
    pub fn sports(&self) -> &str {
        &self.sports
    }

    /// Upcoming events of one league.
    #[must_use]
    pub fn league_events(&self, league_id: LeagueId) -> String {
        expand_template(&self.league_events, league_id)
    }

    /// Full detail of one match.
    #[must_use]
    pub fn match_detail(&self, event_id: EventId) -> String {
        expand_template(&self.match_detail, event_id)
    }
}

/// Substitute `id` into `template`.
pub fn expand_template(template: &str, id: impl Display) -> String {
    if template.contains(ID_PLACEHOLDER) {
        template.replace(ID_PLACEHOLDER, &id.to_string())
    } else {
        format!("{template}{id}")
    }
}
