//! Transaction handlers module
//!
//! Handlers execute submitted transactions against the registries the host
//! supplies. Each handler is the named entry point for one transaction type.

mod trade_handler;
mod transactions;


pub use trade_handler::TradeHandler;
pub use transactions::Trade;

use async_trait::async_trait;

use crate::error::TxResult;

/// Entry point the host invokes with a decoded transaction.
///
/// The transaction is borrowed mutably: handlers work on the caller's
/// value, so record mutations stay visible after the call returns.
#[async_trait]
pub trait TransactionProcessor<T>: Send + Sync {
    /// Execute the transaction against the host-supplied collaborators.
    async fn process(&self, transaction: &mut T) -> TxResult<()>;
}
