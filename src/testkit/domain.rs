//! Builders for domain primitives: leagues and matches.

use chrono::{DateTime, Utc};
use rust_decimal_macros::dec;

use crate::domain::{EventId, League, LeagueId, Market, Match, Runner, RunnerId, Sport};

pub fn league(id: u64, name: &str, region: &str, sport: Sport) -> League {
    League::new(LeagueId::new(id), name, region, sport)
}

pub fn premier_league() -> League {
    league(
        1_970_324_836_974_595,
        "Premier League",
        "England",
        Sport::Football,
    )
}

/// 2023-11-14 22:13:20 UTC.
pub fn kickoff() -> DateTime<Utc> {
    DateTime::from_timestamp_millis(1_700_000_000_000).expect("kickoff within chrono range")
}

/// A fully-populated match with one 1X2 market.
pub fn sample_match() -> Match {
    Match {
        id: EventId::new(1_970_324_845_293_337),
        name: "Team A vs Team B".to_string(),
        kickoff: kickoff(),
        league: premier_league(),
        markets: vec![Market::new(
            "1X2",
            vec![
                Runner::new(RunnerId::new(1), "1", dec!(1.85)),
                Runner::new(RunnerId::new(2), "2", dec!(3.40)),
            ],
        )],
    }
}
