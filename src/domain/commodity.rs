//! Commodity assets
//!
//! A commodity is the network's owned record. It lives in a registry under
//! its trading symbol and carries the owner reference that trade processing
//! rewrites.

use serde::{Deserialize, Serialize};

use super::TraderId;

/// A tradable asset held in a commodity registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Commodity {
    /// Identifier the owning registry keys this record by.
    pub trading_symbol: String,
    pub description: String,
    pub main_exchange: String,
    pub quantity: f64,
    /// Trader currently holding the asset.
    pub owner: TraderId,
}

impl Commodity {
    /// Fully qualified type name, used to resolve the owning registry.
    pub const TYPE_NAME: &'static str = "com.basaki.network.Commodity";

    /// Create a commodity with the given trading symbol and holder.
    pub fn new(trading_symbol: impl Into<String>, owner: impl Into<TraderId>) -> Self {
        Self {
            trading_symbol: trading_symbol.into(),
            description: String::new(),
            main_exchange: String::new(),
            quantity: 0.0,
            owner: owner.into(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_main_exchange(mut self, main_exchange: impl Into<String>) -> Self {
        self.main_exchange = main_exchange.into();
        self
    }

    pub fn with_quantity(mut self, quantity: f64) -> Self {
        self.quantity = quantity;
        self
    }

    /// Identifier under which registries store and update this record.
    pub fn id(&self) -> &str {
        &self.trading_symbol
    }
}
