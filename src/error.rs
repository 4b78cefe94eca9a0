use thiserror::Error;

use crate::domain::error::DomainError;
use crate::domain::{EventId, LeagueId};

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Transport failure or non-success status. Carries no structured
    /// payload beyond a human-readable reason.
    #[error("fetch failed for {url}: {reason}")]
    Fetch { url: String, reason: String },

    /// Response body does not match the expected wire shape.
    #[error("unexpected response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// The league has no upcoming events.
    #[error("no upcoming events for league {league_id}")]
    NotFound { league_id: LeagueId },

    #[error("internal defect: {0}")]
    Defect(#[from] DomainError),

    /// Kickoff timestamp outside the representable date range.
    #[error("kickoff {epoch_millis} of event {event_id} is out of range")]
    InvalidKickoff {
        event_id: EventId,
        epoch_millis: i64,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Build a [`Error::Fetch`] from any displayable transport failure.
    pub fn fetch(url: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        Self::Fetch {
            url: url.into(),
            reason: reason.to_string(),
        }
    }

    /// True for the expected "league has nothing scheduled" outcome.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
