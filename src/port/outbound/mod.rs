//! Outbound ports: interfaces the core calls into.

pub mod transport;
pub mod wire;

pub use transport::Transport;
