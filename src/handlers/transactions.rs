//! Transaction definitions
//!
//! Transactions are one-shot instructions submitted to the network. The
//! host decodes them from its wire format, resolves the records they
//! reference, and hands them to the matching handler. None of them outlive
//! the call that processes them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Commodity, TraderId};

/// Instruction to move a commodity to a new owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trade {
    /// Identifier assigned when the transaction is submitted.
    pub transaction_id: Uuid,
    /// Submission time.
    pub timestamp: DateTime<Utc>,
    /// The commodity changing hands, resolved by the caller. `None` when
    /// the submitted reference did not resolve to a record.
    pub commodity: Option<Commodity>,
    /// Trader taking ownership.
    pub new_owner: TraderId,
}

impl Trade {
    /// Fully qualified type name hosts dispatch on.
    pub const TYPE_NAME: &'static str = "com.basaki.network.Trade";

    /// Create a trade with fresh system fields.
    pub fn new(commodity: Commodity, new_owner: impl Into<TraderId>) -> Self {
        Self {
            transaction_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            commodity: Some(commodity),
            new_owner: new_owner.into(),
        }
    }
}
