//! Canonical test endpoints.
//!
//! Single source of truth for the URLs scripted transports answer on.

use crate::application::endpoints::{expand_template, Endpoints};

pub const SPORTS_URL: &str = "https://line.test/sports";
pub const LEAGUE_EVENTS_TEMPLATE: &str = "https://line.test/events?league_id={id}";
pub const MATCH_TEMPLATE: &str = "https://line.test/event?eventId={id}";

pub fn endpoints() -> Endpoints {
    Endpoints::new(SPORTS_URL, LEAGUE_EVENTS_TEMPLATE, MATCH_TEMPLATE)
}

pub fn events_url(league_id: u64) -> String {
    expand_template(LEAGUE_EVENTS_TEMPLATE, league_id)
}

pub fn match_url(event_id: u64) -> String {
    expand_template(MATCH_TEMPLATE, event_id)
}
