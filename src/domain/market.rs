//! Betting markets and their runners.

use rust_decimal::Decimal;

use super::id::RunnerId;

/// A single selectable outcome with decimal odds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Runner {
    pub id: RunnerId,
    /// Display label, e.g. `"1"`, `"X"`, `"Over"`.
    pub tag: String,
    pub price: Decimal,
}

impl Runner {
    pub fn new(id: RunnerId, tag: impl Into<String>, price: Decimal) -> Self {
        Self {
            id,
            tag: tag.into(),
            price,
        }
    }
}

/// A named betting proposition grouping its runners in API order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Market {
    /// Market name with the handicap already appended, if it had one.
    pub name: String,
    pub runners: Vec<Runner>,
}

impl Market {
    pub fn new(name: impl Into<String>, runners: Vec<Runner>) -> Self {
        Self {
            name: name.into(),
            runners,
        }
    }
}
