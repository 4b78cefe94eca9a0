//! First-match resolution for a single league.
//!
//! The listing endpoint only exposes event ids, so every league costs two
//! sequential round-trips: the league's events, then the detail of the
//! first one.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::debug;

use super::endpoints::Endpoints;
use super::normalizer::normalize_markets;
use crate::domain::{EventId, League, Match, MatchDetail};
use crate::error::{Error, Result};
use crate::port::outbound::wire::{decode, EventsWrapper, MatchData};
use crate::port::outbound::Transport;

/// Resolves the earliest upcoming match of a league.
pub struct MatchResolver {
    transport: Arc<dyn Transport>,
    endpoints: Endpoints,
}

impl MatchResolver {
    pub fn new(transport: Arc<dyn Transport>, endpoints: Endpoints) -> Self {
        Self {
            transport,
            endpoints,
        }
    }

    /// Fetch the league's events, take the first one and resolve it to a
    /// full [`Match`] carrying `league`.
    ///
    /// # Errors
    ///
    /// - [`Error::NotFound`] when the league lists no upcoming events
    /// - [`Error::Fetch`] / [`Error::Decode`] when either round-trip fails
    /// - [`Error::InvalidKickoff`] when the kickoff is not a valid date
    pub async fn resolve_first_match(&self, league: &League) -> Result<Match> {
        let event_id = self.first_event(league).await?;
        let detail = self.match_detail(event_id).await?;

        debug!(
            league_id = %league.id,
            match_id = %detail.id,
            markets = detail.markets.len(),
            "Resolved first match"
        );

        Ok(detail.into_match(league.clone()))
    }

    /// Id of the first listed event. The API lists the earliest first.
    async fn first_event(&self, league: &League) -> Result<EventId> {
        let url = self.endpoints.league_events(league.id);
        debug!(league_id = %league.id, url = %url, "Fetching league events");

        let body = self.transport.get(&url).await?;
        let wrapper: EventsWrapper = decode(&url, &body)?;

        wrapper
            .events
            .first()
            .map(|event| EventId::new(event.id))
            .ok_or(Error::NotFound {
                league_id: league.id,
            })
    }

    /// Fetch and normalize the detail of one match.
    ///
    /// The returned detail uses `event_id` as its id rather than anything in
    /// the response body.
    pub async fn match_detail(&self, event_id: EventId) -> Result<MatchDetail> {
        let url = self.endpoints.match_detail(event_id);
        debug!(event_id = %event_id, url = %url, "Fetching match detail");

        let body = self.transport.get(&url).await?;
        let data: MatchData = decode(&url, &body)?;

        Ok(MatchDetail {
            id: event_id,
            name: data.name,
            kickoff: kickoff_time(event_id, data.kickoff)?,
            markets: normalize_markets(data.markets),
        })
    }
}

fn kickoff_time(event_id: EventId, epoch_millis: i64) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp_millis(epoch_millis).ok_or(Error::InvalidKickoff {
        event_id,
        epoch_millis,
    })
}
