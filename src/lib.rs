//! Topline - first upcoming match of every top league.
//!
//! Reads a bookmaker's public betting line in three stages: one bulk fetch
//! of the sports catalog, a filter down to the top leagues of four sports,
//! then two chained fetches per league (events list, then the first event's
//! detail) fanned out over a fixed pool of workers. Each resolved match is
//! rendered as an indented text block.
//!
//! # Modules
//!
//! - [`domain`] - Sports, leagues, markets, runners and matches
//! - [`port`] - The [`Transport`](port::Transport) seam to the upstream API
//! - [`application`] - Extraction, resolution, fan-out, normalization, formatting
//! - [`adapter`] - HTTP transport and the command-line entry point
//! - [`infrastructure`] - Configuration, logging and wiring
//! - [`error`] - Error types for the crate
//!
//! # Features
//!
//! - `testkit` - Scripted transport and builders for integration tests
//!
//! # Example
//!
//! ```no_run
//! use topline::infrastructure::bootstrap::build_pipeline;
//! use topline::infrastructure::config::settings::Config;
//!
//! # async fn run() -> topline::error::Result<()> {
//! let config = Config::load_or_default("config.toml")?;
//! let pipeline = build_pipeline(&config)?;
//! let mut stdout = std::io::stdout();
//! pipeline.run(&mut stdout).await?;
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
