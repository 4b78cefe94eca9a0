//! Market/runner normalization.
//!
//! The single place where optional wire fields become concrete values. The
//! API's order and values are trusted verbatim: nothing is filtered,
//! deduplicated or sorted.

use crate::domain::{Market, Runner, RunnerId};
use crate::port::outbound::wire::{MarketData, RunnerData};

/// Normalize a possibly absent market list. Absent and empty both yield an
/// empty list.
#[must_use]
pub fn normalize_markets(markets: Option<Vec<MarketData>>) -> Vec<Market> {
    markets
        .unwrap_or_default()
        .into_iter()
        .map(normalize_market)
        .collect()
}

fn normalize_market(market: MarketData) -> Market {
    let name = market_name(&market.name, market.handicap.as_deref());
    let runners = market.runners.into_iter().map(normalize_runner).collect();
    Market::new(name, runners)
}

fn normalize_runner(runner: RunnerData) -> Runner {
    Runner::new(RunnerId::new(runner.id), runner.name, runner.price)
}

/// `"<name> <handicap>"` when the handicap is present and non-empty,
/// otherwise `name` unchanged.
#[must_use]
pub fn market_name(name: &str, handicap: Option<&str>) -> String {
    match handicap {
        Some(handicap) if !handicap.is_empty() => format!("{name} {handicap}"),
        _ => name.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn runner(id: u64, name: &str, price: rust_decimal::Decimal) -> RunnerData {
        RunnerData {
            id,
            name: name.into(),
            price,
        }
    }

    #[test]
    fn absent_or_empty_markets_normalize_to_empty() {
        assert!(normalize_markets(None).is_empty());
        assert!(normalize_markets(Some(vec![])).is_empty());
    }

    #[test]
    fn handicap_is_appended_only_when_non_empty() {
        assert_eq!(market_name("Тотал", Some("2.5")), "Тотал 2.5");
        assert_eq!(market_name("Фора", Some("-1.5")), "Фора -1.5");
        assert_eq!(market_name("1X2", None), "1X2");
        assert_eq!(market_name("1X2", Some("")), "1X2");
    }

    #[test]
    fn runners_keep_order_ids_and_prices() {
        let markets = normalize_markets(Some(vec![MarketData {
            name: "1X2".into(),
            handicap: None,
            runners: vec![
                runner(3, "2", dec!(4.20)),
                runner(1, "1", dec!(1.85)),
                runner(1, "1", dec!(1.85)),
                runner(2, "X", dec!(3.40)),
            ],
        }]));

        let runners = &markets[0].runners;
        let ids: Vec<u64> = runners.iter().map(|r| r.id.value()).collect();
        assert_eq!(ids, vec![3, 1, 1, 2], "no sorting or deduplication");
        assert_eq!(runners[0].tag, "2");
        assert_eq!(runners[3].price, dec!(3.40));
    }

    #[test]
    fn markets_keep_input_order() {
        let markets = normalize_markets(Some(vec![
            MarketData {
                name: "Тотал".into(),
                handicap: Some("3.5".into()),
                runners: vec![],
            },
            MarketData {
                name: "1X2".into(),
                handicap: None,
                runners: vec![runner(1, "1", dec!(2))],
            },
        ]));

        assert_eq!(markets.len(), 2);
        assert_eq!(markets[0].name, "Тотал 3.5");
        assert!(markets[0].runners.is_empty());
        assert_eq!(markets[1].name, "1X2");
    }
}
