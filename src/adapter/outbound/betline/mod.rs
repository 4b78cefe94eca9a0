//! Betting line API integration: HTTP transport and its settings.

pub mod settings;
pub mod transport;

pub use settings::{BetlineConfig, HttpConfig};
pub use transport::HttpTransport;
