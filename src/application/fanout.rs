//! Concurrent fan-out of match resolution across leagues.
//!
//! One task per league, bounded by a fixed worker budget. A failing league
//! is logged and reported but never aborts its siblings; every task is
//! awaited before the report is returned.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::Deserialize;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, error, info, warn};

use super::resolver::MatchResolver;
use crate::domain::{League, Match};
use crate::error::Error;

/// Order in which resolved matches are returned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultOrder {
    /// As tasks complete.
    #[default]
    Completion,
    /// Same order as the leagues were submitted.
    Submission,
}

impl fmt::Display for ResultOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Completion => write!(f, "completion"),
            Self::Submission => write!(f, "submission"),
        }
    }
}

impl FromStr for ResultOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "completion" => Ok(Self::Completion),
            "submission" => Ok(Self::Submission),
            other => Err(format!(
                "unknown result order '{other}', expected 'completion' or 'submission'"
            )),
        }
    }
}

/// A league whose first match could not be resolved.
#[derive(Debug)]
pub struct LeagueFailure {
    pub league: League,
    pub error: Error,
}

/// Outcome of one fan-out call.
#[derive(Debug, Default)]
pub struct FanOutReport {
    pub matches: Vec<Match>,
    pub failures: Vec<LeagueFailure>,
    /// Leagues whose task panicked before reporting a result, in
    /// submission order.
    pub aborted: Vec<League>,
}

impl FanOutReport {
    /// Number of leagues that had no upcoming events.
    #[must_use]
    pub fn not_found(&self) -> usize {
        self.failures
            .iter()
            .filter(|failure| failure.error.is_not_found())
            .count()
    }

    /// True when every submitted league resolved.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty() && self.aborted.is_empty()
    }
}

/// Resolves many leagues concurrently with a fixed worker budget.
///
/// The permit pool is created once and shared by every call, so the budget
/// bounds in-flight round-trips across overlapping calls too.
pub struct FanOut {
    resolver: Arc<MatchResolver>,
    permits: Arc<Semaphore>,
    workers: usize,
    order: ResultOrder,
}

impl FanOut {
    /// Default number of concurrent workers.
    pub const DEFAULT_WORKERS: usize = 3;

    /// Create a coordinator. A budget of zero is raised to one.
    pub fn new(resolver: Arc<MatchResolver>, workers: usize, order: ResultOrder) -> Self {
        let workers = workers.max(1);
        Self {
            resolver,
            permits: Arc::new(Semaphore::new(workers)),
            workers,
            order,
        }
    }

    #[must_use]
    pub const fn workers(&self) -> usize {
        self.workers
    }

    /// Resolve the first match of every league.
    pub async fn resolve_all(&self, leagues: Vec<League>) -> FanOutReport {
        let submitted = leagues.len();
        let mut pending = BTreeMap::new();
        let mut tasks = JoinSet::new();

        for (index, league) in leagues.into_iter().enumerate() {
            pending.insert(index, league.clone());
            let resolver = Arc::clone(&self.resolver);
            let permits = Arc::clone(&self.permits);
            tasks.spawn(async move {
                // The semaphore is never closed.
                let _permit = permits.acquire_owned().await.ok();
                let outcome = resolver.resolve_first_match(&league).await;
                (index, league, outcome)
            });
        }

        let mut matches = Vec::with_capacity(submitted);
        let mut failures = Vec::new();

        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((index, _, Ok(resolved))) => {
                    pending.remove(&index);
                    debug!(
                        league_id = %resolved.league.id,
                        match_id = %resolved.id,
                        "League resolved"
                    );
                    matches.push((index, resolved));
                }
                Ok((index, league, Err(error))) => {
                    pending.remove(&index);
                    log_failure(&league, &error);
                    failures.push((index, LeagueFailure { league, error }));
                }
                Err(err) => {
                    error!(error = %err, "League resolution task aborted");
                }
            }
        }

        // Whatever is still pending belongs to a task that never returned.
        let aborted: Vec<League> = pending.into_values().collect();
        for league in &aborted {
            error!(
                league_id = %league.id,
                league = %league.name,
                region = %league.region,
                sport = ?league.sport,
                "League left unresolved by an aborted task"
            );
        }

        if self.order == ResultOrder::Submission {
            matches.sort_by_key(|(index, _)| *index);
            failures.sort_by_key(|(index, _)| *index);
        }

        let report = FanOutReport {
            matches: matches.into_iter().map(|(_, m)| m).collect(),
            failures: failures.into_iter().map(|(_, f)| f).collect(),
            aborted,
        };

        info!(
            leagues = submitted,
            resolved = report.matches.len(),
            failed = report.failures.len(),
            aborted = report.aborted.len(),
            "Fan-out complete"
        );

        report
    }
}

fn log_failure(league: &League, err: &Error) {
    if err.is_not_found() {
        info!(
            league_id = %league.id,
            league = %league.name,
            region = %league.region,
            sport = ?league.sport,
            "League has no upcoming events"
        );
    } else {
        warn!(
            league_id = %league.id,
            league = %league.name,
            region = %league.region,
            sport = ?league.sport,
            error = %err,
            "Failed to resolve first match"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Sport;
    use crate::testkit::{config, domain, transport::ScriptedTransport, wire};

    fn coordinator(transport: ScriptedTransport, workers: usize, order: ResultOrder) -> FanOut {
        let resolver = MatchResolver::new(Arc::new(transport), config::endpoints());
        FanOut::new(Arc::new(resolver), workers, order)
    }

    fn leagues(ids: impl IntoIterator<Item = u64>) -> Vec<League> {
        ids.into_iter()
            .map(|id| domain::league(id, "League", "Region", Sport::Tennis))
            .collect()
    }

    fn match_doc(name: &str) -> serde_json::Value {
        wire::match_doc(name, 0, vec![])
    }

    // -------------------------------------------------------------------------
    // ResultOrder
    // -------------------------------------------------------------------------

    #[test]
    fn result_order_parses_and_displays() {
        assert_eq!(
            "Submission".parse::<ResultOrder>(),
            Ok(ResultOrder::Submission)
        );
        assert_eq!(
            "completion".parse::<ResultOrder>(),
            Ok(ResultOrder::Completion)
        );
        assert!("random".parse::<ResultOrder>().is_err());
        assert_eq!(ResultOrder::Submission.to_string(), "submission");
    }

    // -------------------------------------------------------------------------
    // FanOut
    // -------------------------------------------------------------------------

    #[test]
    fn zero_workers_is_raised_to_one() {
        let fan_out = coordinator(ScriptedTransport::new(), 0, ResultOrder::Completion);
        assert_eq!(fan_out.workers(), 1);
    }

    #[tokio::test]
    async fn empty_input_returns_empty_report() {
        let fan_out = coordinator(ScriptedTransport::new(), 3, ResultOrder::Completion);

        let report = fan_out.resolve_all(vec![]).await;

        assert!(report.matches.is_empty());
        assert!(report.is_complete());
    }

    #[tokio::test]
    async fn failures_are_isolated_per_league() {
        let transport = ScriptedTransport::new()
            .with_first_match(1, 101, match_doc("A vs B"))
            .with_failure(config::events_url(2), "timed out")
            .with_json(config::events_url(3), wire::events(&[]))
            .with_first_match(4, 104, match_doc("C vs D"));
        let fan_out = coordinator(transport, 3, ResultOrder::Submission);

        let report = fan_out.resolve_all(leagues(1..=4)).await;

        let resolved: Vec<u64> = report.matches.iter().map(|m| m.id.value()).collect();
        assert_eq!(resolved, vec![101, 104]);
        assert_eq!(report.failures.len(), 2);
        assert_eq!(report.not_found(), 1);
        assert_eq!(report.failures[0].league.id.value(), 2);
        assert!(matches!(report.failures[0].error, Error::Fetch { .. }));
        assert!(report.aborted.is_empty());
        assert!(!report.is_complete());
    }

    #[tokio::test]
    async fn panicking_task_is_reported_with_its_league() {
        let transport = ScriptedTransport::new()
            .with_first_match(1, 101, match_doc("A vs B"))
            .with_panic(config::events_url(2))
            .with_first_match(3, 103, match_doc("C vs D"));
        let fan_out = coordinator(transport, 3, ResultOrder::Submission);

        let report = fan_out.resolve_all(leagues(1..=3)).await;

        let resolved: Vec<u64> = report.matches.iter().map(|m| m.id.value()).collect();
        assert_eq!(resolved, vec![101, 103]);
        assert!(report.failures.is_empty());
        assert_eq!(report.aborted.len(), 1);
        assert_eq!(report.aborted[0].id.value(), 2);
        assert!(!report.is_complete());
    }
}
