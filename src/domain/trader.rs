//! Trader participants
//!
//! Traders are the identities able to hold commodities. Records refer to
//! them by id; the participant record itself stays in whatever store the
//! host keeps participants in.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Reference to a trader, as carried on owned records and transactions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TraderId(String);

impl TraderId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TraderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TraderId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for TraderId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A participant in the trading network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trader {
    pub id: TraderId,
    pub first_name: String,
    pub last_name: String,
}

impl Trader {
    /// Fully qualified type name of the participant record.
    pub const TYPE_NAME: &'static str = "com.basaki.network.Trader";

    pub fn new(
        id: impl Into<TraderId>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trader_id_displays_inner_value() {
        let id = TraderId::new("alice");

        assert_eq!(id.as_str(), "alice");
        assert_eq!(id.to_string(), "alice");
    }

    #[test]
    fn test_trader_new_sets_fields() {
        let trader = Trader::new("alice", "Alice", "Appleton");

        assert_eq!(trader.id, TraderId::new("alice"));
        assert_eq!(trader.first_name, "Alice");
        assert_eq!(trader.last_name, "Appleton");
    }
}
