//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`transport`]: `ScriptedTransport`, a URL-keyed mock [`Transport`](crate::port::Transport).
//! - [`wire`]: JSON builders for sports, events and match documents.
//! - [`domain`]: Builders for leagues and matches.
//! - [`config`]: Canonical test endpoints.

pub mod config;
pub mod domain;
pub mod transport;
pub mod wire;
