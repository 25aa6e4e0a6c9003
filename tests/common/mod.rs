//! Common test utilities

use std::sync::Arc;

use trade_network::{Commodity, InMemoryNetwork, InMemoryRegistry};

/// Set up an in-memory network whose commodity registry holds the given
/// records. The registry handle is returned alongside the network so tests
/// can seed further records and inspect stored state.
pub async fn seeded_network(
    commodities: Vec<Commodity>,
) -> (Arc<InMemoryNetwork>, Arc<InMemoryRegistry>) {
    let network = Arc::new(InMemoryNetwork::new());
    let registry = network.add_registry(Commodity::TYPE_NAME).await;
    for commodity in commodities {
        registry.add(commodity).await;
    }
    (network, registry)
}
