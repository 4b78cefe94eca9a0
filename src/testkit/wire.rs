//! JSON builders for upstream documents.
//!
//! Shapes mirror what the betting line API returns, keyed by the field
//! names the wire DTOs deserialize.

use serde_json::{json, Value};

pub fn sport(name: &str, regions: Vec<Value>) -> Value {
    json!({ "name": name, "regions": regions })
}

pub fn region(name: &str, leagues: Vec<Value>) -> Value {
    json!({ "name": name, "leagues": leagues })
}

pub fn league(id: u64, name: &str, top: bool) -> Value {
    json!({ "id": id, "name": name, "top": top })
}

/// League events document listing `ids` in order.
pub fn events(ids: &[u64]) -> Value {
    let events: Vec<Value> = ids.iter().map(|id| json!({ "id": id })).collect();
    json!({ "events": events })
}

pub fn match_doc(name: &str, kickoff: i64, markets: Vec<Value>) -> Value {
    json!({ "name": name, "kickoff": kickoff, "markets": markets })
}

pub fn market(name: &str, handicap: Option<&str>, runners: Vec<Value>) -> Value {
    let mut market = json!({ "name": name, "runners": runners });
    if let Some(handicap) = handicap {
        market["handicap"] = json!(handicap);
    }
    market
}

pub fn runner(id: u64, name: &str, price: f64) -> Value {
    json!({ "id": id, "name": name, "price": price })
}
