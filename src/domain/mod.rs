//! Domain module
//!
//! Record types of the trading network: commodity assets and the traders
//! who hold them.

pub mod commodity;
pub mod trader;

pub use commodity::Commodity;
pub use trader::{Trader, TraderId};
