//! Plain-text rendering of resolved matches.
//!
//! Each match renders as one block: a `<sport>, <region> <league>` line, a
//! `<name>, <kickoff>, <id>` line, then every market name indented by one
//! tab with its runners (`<tag>, <price>, <id>`) indented by two.

use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::domain::{Match, SportCatalog};

/// `strftime` pattern for kickoff times.
pub const KICKOFF_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// Renders matches using the sport names of one catalog locale.
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchFormatter {
    catalog: SportCatalog,
}

impl MatchFormatter {
    #[must_use]
    pub const fn new(catalog: SportCatalog) -> Self {
        Self { catalog }
    }

    /// Render one match block, ending with a newline.
    #[must_use]
    pub fn format(&self, m: &Match) -> String {
        let mut out = String::new();

        let _ = writeln!(
            out,
            "{}, {} {}",
            self.catalog.display_name(m.league.sport),
            m.league.region,
            m.league.name
        );
        let _ = writeln!(out, "{}, {}, {}", m.name, format_kickoff(m.kickoff), m.id);

        for market in &m.markets {
            let _ = writeln!(out, "\t{}", market.name);
            for runner in &market.runners {
                let _ = writeln!(
                    out,
                    "\t\t{}, {}, {}",
                    runner.tag,
                    format_price(runner.price),
                    runner.id
                );
            }
        }

        out
    }
}

#[must_use]
pub fn format_kickoff(kickoff: DateTime<Utc>) -> String {
    kickoff.format(KICKOFF_FORMAT).to_string()
}

/// Two decimal places, half away from zero.
#[must_use]
pub fn format_price(price: Decimal) -> String {
    let rounded = price.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.2}")
}
