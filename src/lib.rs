//! trade-network Library
//!
//! Transaction logic for a commodity trading network. The execution host
//! decodes submitted transactions, resolves the records they reference,
//! and invokes the matching handler; handlers rewrite the affected records
//! and persist them through host-supplied registries. Collaborators are
//! injected, so the same handlers run against the bundled in-memory
//! network or any registry the host owns.

pub mod domain;
pub mod handlers;
pub mod registry;

mod error;

pub use domain::{Commodity, Trader, TraderId};
pub use error::{TransactionError, TxResult};
pub use handlers::{Trade, TradeHandler, TransactionProcessor};
pub use registry::{
    AssetRegistry, InMemoryNetwork, InMemoryRegistry, RegistryError, RegistryProvider,
};
