//! Trade handler
//!
//! Moves a commodity to its new owner and writes the changed record back
//! through the commodity registry.

use async_trait::async_trait;

use crate::domain::Commodity;
use crate::error::{TransactionError, TxResult};
use crate::registry::RegistryProvider;

use super::{Trade, TransactionProcessor};

/// Handler for `Trade` transactions.
pub struct TradeHandler<P> {
    provider: P,
}

impl<P: RegistryProvider> TradeHandler<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl<P: RegistryProvider> TransactionProcessor<Trade> for TradeHandler<P> {
    async fn process(&self, trade: &mut Trade) -> TxResult<()> {
        let commodity = trade
            .commodity
            .as_mut()
            .ok_or(TransactionError::MissingCommodity)?;

        // The owner changes on the trade's copy before the registry is
        // reached. A failed write leaves that copy already reassigned.
        commodity.owner = trade.new_owner.clone();

        let registry = self.provider.registry_for(Commodity::TYPE_NAME).await?;

        registry.update(commodity).await?;

        Ok(())
    }
}
