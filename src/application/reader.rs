//! Line reader: the top-level read operations against the betting line.

use std::sync::Arc;

use tracing::{debug, info};

use super::endpoints::Endpoints;
use super::extractor::extract_top_leagues;
use super::resolver::MatchResolver;
use crate::domain::{League, Match, SportCatalog};
use crate::error::Result;
use crate::port::outbound::wire::{decode, SportContainer};
use crate::port::outbound::Transport;

/// Reads top leagues and their first matches through a [`Transport`].
pub struct LineReader {
    transport: Arc<dyn Transport>,
    endpoints: Endpoints,
    catalog: SportCatalog,
    resolver: Arc<MatchResolver>,
}

impl LineReader {
    pub fn new(transport: Arc<dyn Transport>, endpoints: Endpoints, catalog: SportCatalog) -> Self {
        let resolver = MatchResolver::new(Arc::clone(&transport), endpoints.clone());
        Self {
            transport,
            endpoints,
            catalog,
            resolver: Arc::new(resolver),
        }
    }

    /// Resolver sharing this reader's transport and endpoints.
    #[must_use]
    pub fn resolver(&self) -> Arc<MatchResolver> {
        Arc::clone(&self.resolver)
    }

    /// Fetch the bulk sports document and extract its top leagues.
    ///
    /// # Errors
    ///
    /// Fetch and decode failures of the bulk document are returned as is;
    /// with no leagues there is nothing to resolve.
    pub async fn top_leagues(&self) -> Result<Vec<League>> {
        let url = self.endpoints.sports();
        info!(url = %url, locale = %self.catalog.locale(), "Fetching sports");

        let body = self.transport.get(url).await?;
        let containers: Vec<SportContainer> = decode(url, &body)?;
        debug!(sports = containers.len(), "Decoded sports");

        let leagues = extract_top_leagues(&containers, self.catalog)?;
        info!(count = leagues.len(), "Extracted top leagues");

        Ok(leagues)
    }

    /// Resolve the first match of each league one after another.
    ///
    /// Unlike [`FanOut`](super::fanout::FanOut) this stops at the first
    /// failing league.
    pub async fn first_matches(&self, leagues: &[League]) -> Result<Vec<Match>> {
        let mut matches = Vec::with_capacity(leagues.len());
        for league in leagues {
            matches.push(self.resolver.resolve_first_match(league).await?);
        }
        Ok(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Locale, Sport};
    use crate::error::Error;
    use crate::testkit::{config, transport::ScriptedTransport, wire};

    fn sports_doc() -> serde_json::Value {
        let premier = wire::league(1, "Премьер-лига", true);
        let second = wire::league(2, "Лига 1", false);
        let england = wire::region("Англия", vec![premier, second]);
        let usa = wire::region("США", vec![wire::league(3, "НБА", true)]);

        serde_json::Value::Array(vec![
            wire::sport("Футбол", vec![england]),
            wire::sport("Баскетбол", vec![usa]),
        ])
    }

    fn reader(transport: ScriptedTransport) -> LineReader {
        LineReader::new(
            Arc::new(transport),
            config::endpoints(),
            SportCatalog::new(Locale::Ru),
        )
    }

    #[tokio::test]
    async fn top_leagues_fetches_and_extracts() {
        let transport = ScriptedTransport::new().with_json(config::SPORTS_URL, sports_doc());
        let reader = reader(transport);

        let leagues = reader.top_leagues().await.unwrap();

        assert_eq!(leagues.len(), 2);
        assert_eq!(leagues[0].name, "Премьер-лига");
        assert_eq!(leagues[1].sport, Sport::Basketball);
    }

    #[tokio::test]
    async fn bulk_decode_failure_is_returned() {
        let reader = reader(ScriptedTransport::new().with_body(config::SPORTS_URL, "{}"));

        let err = reader.top_leagues().await.unwrap_err();

        assert!(matches!(err, Error::Decode { .. }));
    }

    #[tokio::test]
    async fn first_matches_stops_at_first_failure() {
        let transport = ScriptedTransport::new()
            .with_json(config::SPORTS_URL, sports_doc())
            .with_first_match(1, 11, wire::match_doc("A vs B", 0, vec![]))
            .with_json(config::events_url(3), wire::events(&[]));
        let reader = reader(transport);
        let leagues = reader.top_leagues().await.unwrap();

        let err = reader.first_matches(&leagues).await.unwrap_err();
        assert!(err.is_not_found());

        let ok = reader.first_matches(&leagues[..1]).await.unwrap();
        assert_eq!(ok[0].id.value(), 11);
    }
}
