//! Mock [`Transport`] answering from a URL-keyed script.
//!
//! Unscripted URLs fail the way an upstream 404 would. An optional per-call
//! latency runs on the tokio clock, so tests under `start_paused` can measure
//! how many rounds a fan-out takes without real waiting.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;

use super::config;
use super::wire;
use crate::error::{Error, Result};
use crate::port::Transport;

#[derive(Debug, Clone)]
enum Reply {
    Body(String),
    Fail(String),
    Panic,
}

/// Scripted transport with request recording and in-flight tracking.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    replies: HashMap<String, Reply>,
    latency: Option<Duration>,
    requests: Mutex<Vec<String>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_body(mut self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.replies.insert(url.into(), Reply::Body(body.into()));
        self
    }

    pub fn with_json(self, url: impl Into<String>, doc: Value) -> Self {
        self.with_body(url, doc.to_string())
    }

    pub fn with_failure(mut self, url: impl Into<String>, reason: impl Into<String>) -> Self {
        self.replies.insert(url.into(), Reply::Fail(reason.into()));
        self
    }

    /// Requests to `url` panic, taking down the calling task.
    pub fn with_panic(mut self, url: impl Into<String>) -> Self {
        self.replies.insert(url.into(), Reply::Panic);
        self
    }

    /// Every `get` sleeps this long before answering.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Script both hops for a league: its events list holds only `event_id`,
    /// whose detail is `match_doc`.
    pub fn with_first_match(self, league_id: u64, event_id: u64, match_doc: Value) -> Self {
        self.with_json(config::events_url(league_id), wire::events(&[event_id]))
            .with_json(config::match_url(event_id), match_doc)
    }

    /// URLs requested so far, in call order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }

    /// Highest number of concurrent `get` calls observed.
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn get(&self, url: &str) -> Result<String> {
        self.requests.lock().push(url.to_string());
        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(current, Ordering::SeqCst);

        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }

        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        match self.replies.get(url) {
            Some(Reply::Body(body)) => Ok(body.clone()),
            Some(Reply::Fail(reason)) => Err(Error::fetch(url, reason)),
            Some(Reply::Panic) => panic!("scripted panic for {url}"),
            None => Err(Error::fetch(url, "HTTP status 404 Not Found")),
        }
    }
}
