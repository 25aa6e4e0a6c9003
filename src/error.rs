//! Error handling module
//!
//! Failures a host observes from transaction processing. Registry errors
//! cross this boundary transparently so the host sees the collaborator's
//! own message, not a handler paraphrase.

use crate::registry::RegistryError;

/// Transaction-wide Result type
pub type TxResult<T> = Result<T, TransactionError>;

/// Transaction processing error types
#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum TransactionError {
    /// The trade does not reference a commodity.
    #[error("trade references no commodity")]
    MissingCommodity,

    /// Collaborator failure, passed through unchanged.
    #[error(transparent)]
    Registry(#[from] RegistryError),
}
