//! Worker pool configuration for the league fan-out.

use serde::Deserialize;

use crate::application::fanout::{FanOut, ResultOrder};

/// Fan-out worker budget and result ordering.
#[derive(Debug, Clone, Deserialize)]
pub struct FanOutConfig {
    /// Maximum leagues resolved concurrently. Static, never auto-scaled.
    #[serde(default = "default_workers")]
    pub workers: usize,
    /// Order of printed matches.
    #[serde(default)]
    pub order: ResultOrder,
}

const fn default_workers() -> usize {
    FanOut::DEFAULT_WORKERS
}

impl Default for FanOutConfig {
    fn default() -> Self {
        Self {
            workers: default_workers(),
            order: ResultOrder::default(),
        }
    }
}
