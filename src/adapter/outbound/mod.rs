//! Outbound adapters: implementations of the outbound ports.

pub mod betline;
