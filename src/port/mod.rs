//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! The application reaches the betting line only through [`Transport`];
//! the HTTP adapter and the scripted test double both implement it.
//!
//! ```text
//!     ┌─────────────┐       ┌───────────┐       ┌──────────────┐
//!     │ Application ├──────►│ Transport │◄──────┤ HTTP adapter │
//!     └─────────────┘       └───────────┘       └──────────────┘
//! ```

pub mod outbound;

pub use outbound::Transport;
