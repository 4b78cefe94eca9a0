//! Application configuration loading and validation.
//!
//! Every section is optional; an empty file yields the defaults, which read
//! the Russian line from leon.bet with three workers.
//!
//! # Example
//!
//! ```no_run
//! use topline::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::Deserialize;
use url::Url;

use super::logging::LoggingConfig;
use super::pool::FanOutConfig;
use crate::adapter::outbound::betline::settings::{BetlineConfig, HttpConfig};
use crate::application::endpoints::{expand_template, Endpoints};
use crate::error::{ConfigError, Result};

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Betting line endpoints and locale.
    #[serde(default)]
    pub catalog: BetlineConfig,

    /// HTTP client timeouts and header profile.
    #[serde(default)]
    pub http: HttpConfig,

    /// Concurrent league resolution.
    #[serde(default)]
    pub fan_out: FanOutConfig,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML content is
    /// malformed, or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load `path` if it exists, otherwise fall back to the defaults.
    #[allow(clippy::result_large_err)]
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            let config = Self::default();
            config.validate()?;
            Ok(config)
        }
    }

    /// Validate configuration values.
    ///
    /// Checks that every endpoint is a usable http(s) URL once an id is
    /// substituted, and that the worker budget and timeouts are non-zero.
    #[allow(clippy::result_large_err)]
    pub fn validate(&self) -> Result<()> {
        validate_url("sports_url", &self.catalog.sports_url)?;
        validate_url(
            "league_events_url",
            &expand_template(&self.catalog.league_events_url, 1),
        )?;
        validate_url("match_url", &expand_template(&self.catalog.match_url, 1))?;

        if self.fan_out.workers == 0 {
            return Err(ConfigError::InvalidValue {
                field: "workers",
                reason: "must be at least 1".to_string(),
            }
            .into());
        }
        if self.http.timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "timeout_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.http.connect_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "connect_timeout_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        self.http.header_map()?;

        Ok(())
    }

    /// Initialize logging based on configuration.
    pub fn init_logging(&self) {
        self.logging.init();
    }

    #[must_use]
    pub fn endpoints(&self) -> Endpoints {
        self.catalog.endpoints()
    }
}

#[allow(clippy::result_large_err)]
fn validate_url(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ConfigError::MissingField { field }.into());
    }
    let url = Url::parse(value).map_err(|e| ConfigError::InvalidValue {
        field,
        reason: e.to_string(),
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidValue {
            field,
            reason: format!("unsupported scheme '{}'", url.scheme()),
        }
        .into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::fanout::ResultOrder;
    use crate::domain::{EventId, Locale};
    use crate::error::Error;

    #[test]
    fn empty_document_yields_valid_defaults() {
        let config = Config::parse_toml("").unwrap();

        assert_eq!(config.catalog.locale, Locale::Ru);
        assert_eq!(config.fan_out.workers, 3);
        assert_eq!(config.fan_out.order, ResultOrder::Completion);
        assert_eq!(config.http.timeout_ms, 10_000);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn sections_override_defaults() {
        let document = r#"
[catalog]
locale = "en"
sports_url = "https://line.test/sports?ctag=en-US"
league_events_url = "https://line.test/events?league_id="
match_url = "https://line.test/event/{id}"

[http]
timeout_ms = 2500
headers = { "Accept" = "application/json" }

[fan_out]
workers = 8
order = "submission"

[logging]
format = "json"
"#;

        let config = Config::parse_toml(document).unwrap();

        assert_eq!(config.catalog.locale, Locale::En);
        assert_eq!(config.fan_out.workers, 8);
        assert_eq!(config.fan_out.order, ResultOrder::Submission);
        assert_eq!(config.http.timeout_ms, 2500);
        assert_eq!(config.http.connect_timeout_ms, 5_000);
        assert_eq!(config.http.headers.len(), 1);
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.level, "info");
        assert_eq!(
            config.endpoints().match_detail(EventId::new(5)),
            "https://line.test/event/5"
        );
    }

    #[test]
    fn zero_workers_is_rejected() {
        let result = Config::parse_toml("[fan_out]\nworkers = 0\n");

        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "workers",
                ..
            }))
        ));
    }

    #[test]
    fn empty_url_is_missing() {
        let result = Config::parse_toml("[catalog]\nsports_url = \"\"\n");

        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::MissingField {
                field: "sports_url"
            }))
        ));
    }

    #[test]
    fn non_http_url_is_rejected() {
        let result = Config::parse_toml("[catalog]\nmatch_url = \"ftp://line.test/{id}\"\n");

        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "match_url",
                ..
            }))
        ));
    }

    #[test]
    fn unknown_order_is_a_parse_error() {
        let result = Config::parse_toml("[fan_out]\norder = \"random\"\n");
        assert!(matches!(result, Err(Error::Config(ConfigError::Parse(_)))));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = Config::load_or_default("/nonexistent/topline.toml").unwrap();
        assert_eq!(config.fan_out.workers, 3);
    }
}
