//! A small scripted betting line shared by the integration tests.

use std::sync::Arc;

use serde_json::Value;
use topline::application::fanout::ResultOrder;
use topline::application::pipeline::Pipeline;
use topline::domain::{Locale, SportCatalog};
use topline::testkit::config;
use topline::testkit::transport::ScriptedTransport;
use topline::testkit::wire;

/// Top league ids in document order.
pub const TOP_LEAGUES: [u64; 4] = [1, 2, 3, 4];

/// Russian sports document: four top leagues of interest, plus one
/// non-top football league and one top league of an ignored sport.
pub fn sports_doc() -> Value {
    let premier = wire::league(1, "Премьер-лига", true);
    let championship = wire::league(10, "Чемпионшип", false);
    let england = wire::region("Англия", vec![premier, championship]);
    let spain = wire::region("Испания", vec![wire::league(2, "Ла Лига", true)]);
    let russia = wire::region("Россия", vec![wire::league(3, "КХЛ", true)]);
    let india = wire::region("Индия", vec![wire::league(20, "IPL", true)]);
    let usa = wire::region("США", vec![wire::league(4, "НБА", true)]);

    Value::Array(vec![
        wire::sport("Футбол", vec![england, spain]),
        wire::sport("Хоккей", vec![russia]),
        wire::sport("Крикет", vec![india]),
        wire::sport("Баскетбол", vec![usa]),
    ])
}

/// Match document with one totals market and one plain market.
pub fn match_doc(name: &str) -> Value {
    let totals = vec![
        wire::runner(11, "Больше", 1.9),
        wire::runner(12, "Меньше", 1.9),
    ];
    let markets = vec![
        wire::market("Тотал", Some("2.5"), totals),
        wire::market("Победитель", None, vec![wire::runner(13, "1", 2.05)]),
    ];
    wire::match_doc(name, 1_700_000_000_000, markets)
}

/// Every top league resolves to event `league_id * 100`.
pub fn full_line() -> ScriptedTransport {
    let mut transport = ScriptedTransport::new().with_json(config::SPORTS_URL, sports_doc());
    for id in TOP_LEAGUES {
        let doc = match_doc(&format!("Match {id}"));
        transport = transport.with_first_match(id, id * 100, doc);
    }
    transport
}

pub fn pipeline(transport: ScriptedTransport, workers: usize, order: ResultOrder) -> Pipeline {
    Pipeline::new(
        Arc::new(transport),
        config::endpoints(),
        SportCatalog::new(Locale::Ru),
        workers,
        order,
    )
}
