//! Betting line API configuration.

use std::collections::BTreeMap;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::Deserialize;

use crate::application::endpoints::Endpoints;
use crate::domain::Locale;
use crate::error::ConfigError;

/// Endpoints and locale of the betting line.
///
/// The default URLs request the Russian line (`ctag=ru-RU`); when switching
/// `locale` to `en` the URLs should be switched to `ctag=en-US` as well so
/// sport names match.
#[derive(Debug, Clone, Deserialize)]
pub struct BetlineConfig {
    /// Language sport names are matched and printed in.
    #[serde(default)]
    pub locale: Locale,
    /// Bulk sports/regions/leagues document.
    #[serde(default = "default_sports_url")]
    pub sports_url: String,
    /// Events of one league; `{id}` is replaced by the league id, or the id
    /// is appended when the placeholder is absent.
    #[serde(default = "default_league_events_url")]
    pub league_events_url: String,
    /// Detail of one match; `{id}` is replaced by the event id.
    #[serde(default = "default_match_url")]
    pub match_url: String,
}

fn default_sports_url() -> String {
    "https://leon.bet/api-2/betline/sports?ctag=ru-RU&flags=urlv2".into()
}

fn default_league_events_url() -> String {
    "https://leon.bet/api-2/betline/events/all?ctag=ru-RU&league_id={id}&hideClosed=true&flags=reg,urlv2,mm2,rrc,nodup".into()
}

fn default_match_url() -> String {
    "https://leon.bet/api-2/betline/event/all?ctag=ru-RU&eventId={id}&flags=reg,urlv2,mm2,rrc,nodup,smg,outv2".into()
}

impl Default for BetlineConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            sports_url: default_sports_url(),
            league_events_url: default_league_events_url(),
            match_url: default_match_url(),
        }
    }
}

impl BetlineConfig {
    #[must_use]
    pub fn endpoints(&self) -> Endpoints {
        Endpoints::new(
            self.sports_url.clone(),
            self.league_events_url.clone(),
            self.match_url.clone(),
        )
    }
}

/// HTTP client settings and the header profile sent with every request.
#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    /// Request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Connect timeout in milliseconds.
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
    /// Honour `HTTP_PROXY`/`HTTPS_PROXY` from the environment.
    #[serde(default = "default_system_proxy")]
    pub system_proxy: bool,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Extra request headers. Replaces the default set when given.
    #[serde(default = "default_headers")]
    pub headers: BTreeMap<String, String>,
}

const fn default_timeout_ms() -> u64 {
    10_000
}

const fn default_connect_timeout_ms() -> u64 {
    5_000
}

const fn default_system_proxy() -> bool {
    true
}

const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 6.3; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/100.0.4896.160 YaBrowser/22.5.4.904 Yowser/2.5 Safari/537.36";

const DEFAULT_ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8,application/signed-exchange;v=b3;q=0.9";

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.into()
}

fn default_headers() -> BTreeMap<String, String> {
    [
        ("Accept", DEFAULT_ACCEPT),
        ("Accept-Language", "ru,en;q=0.9"),
        ("Cache-Control", "max-age=0"),
        ("Connection", "keep-alive"),
        ("Content-Type", "application/json"),
        ("Sec-Fetch-Dest", "document"),
    ]
    .into_iter()
    .map(|(name, value)| (name.to_owned(), value.to_owned()))
    .collect()
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
            connect_timeout_ms: default_connect_timeout_ms(),
            system_proxy: default_system_proxy(),
            user_agent: default_user_agent(),
            headers: default_headers(),
        }
    }
}

impl HttpConfig {
    /// Build the header map for the HTTP client.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a header name or value that
    /// is not valid HTTP.
    pub fn header_map(&self) -> Result<HeaderMap, ConfigError> {
        let mut map = HeaderMap::with_capacity(self.headers.len());
        for (name, value) in &self.headers {
            let header_name =
                HeaderName::from_bytes(name.as_bytes()).map_err(|e| invalid_header(name, e))?;
            let header_value = HeaderValue::from_str(value).map_err(|e| invalid_header(name, e))?;
            map.insert(header_name, header_value);
        }
        Ok(map)
    }
}

fn invalid_header(name: &str, err: impl std::fmt::Display) -> ConfigError {
    ConfigError::InvalidValue {
        field: "http.headers",
        reason: format!("{name}: {err}"),
    }
}
