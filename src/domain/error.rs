//! Domain invariant violations.

use thiserror::Error;

/// Errors that signal a broken internal invariant rather than bad input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A sport name passed the interest filter but did not resolve to a
    /// catalog entry when the league was built.
    #[error("sport '{name}' matched the catalog but could not be resolved")]
    UnresolvedSport {
        /// The wire sport name.
        name: String,
    },
}
