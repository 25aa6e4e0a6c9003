//! In-memory registries
//!
//! A self-contained registry provider for tests and embedded hosts. Records
//! live in process memory behind async locks and nothing persists across a
//! restart. The write lock serializes conflicting updates, which is all the
//! ordering the handler contract asks of a registry.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::Commodity;

use super::{AssetRegistry, RegistryError, RegistryProvider};

/// Map-backed commodity registry.
#[derive(Debug, Default)]
pub struct InMemoryRegistry {
    records: RwLock<HashMap<String, Commodity>>,
    updates: AtomicU64,
}

impl InMemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a record, replacing any previous record under the same id.
    pub async fn add(&self, commodity: Commodity) {
        tracing::debug!(id = %commodity.id(), "adding record");
        let key = commodity.id().to_string();
        let mut records = self.records.write().await;
        records.insert(key, commodity);
    }

    /// Cloned view of a stored record.
    pub async fn get(&self, id: &str) -> Option<Commodity> {
        let records = self.records.read().await;
        records.get(id).cloned()
    }

    /// Number of update calls this registry has received.
    pub fn update_count(&self) -> u64 {
        self.updates.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl AssetRegistry for InMemoryRegistry {
    async fn update(&self, commodity: &Commodity) -> Result<(), RegistryError> {
        self.updates.fetch_add(1, Ordering::Relaxed);

        let mut records = self.records.write().await;
        match records.get_mut(commodity.id()) {
            Some(stored) => {
                *stored = commodity.clone();
                tracing::debug!(id = %commodity.id(), owner = %commodity.owner, "record updated");
                Ok(())
            }
            None => {
                tracing::warn!(id = %commodity.id(), "update rejected, record not held");
                Err(RegistryError::unknown_record(commodity.id()))
            }
        }
    }
}

/// Registry provider backed by in-memory registries, one per type name.
#[derive(Debug, Default)]
pub struct InMemoryNetwork {
    registries: RwLock<HashMap<String, Arc<InMemoryRegistry>>>,
}

impl InMemoryNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the registry for a type, or return the existing one. The
    /// returned handle stays valid for seeding and assertions while the
    /// network itself is handed to a processor.
    pub async fn add_registry(&self, type_name: &str) -> Arc<InMemoryRegistry> {
        let mut registries = self.registries.write().await;
        Arc::clone(
            registries
                .entry(type_name.to_string())
                .or_insert_with(|| Arc::new(InMemoryRegistry::new())),
        )
    }
}

#[async_trait]
impl RegistryProvider for InMemoryNetwork {
    async fn registry_for(
        &self,
        type_name: &str,
    ) -> Result<Arc<dyn AssetRegistry>, RegistryError> {
        let registries = self.registries.read().await;
        registries
            .get(type_name)
            .cloned()
            .map(|registry| registry as Arc<dyn AssetRegistry>)
            .ok_or_else(|| RegistryError::Unavailable(type_name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_add_then_get_returns_stored_record() {
        let registry = InMemoryRegistry::new();
        registry.add(Commodity::new("COCOA", "alice")).await;

        let stored = registry.get("COCOA").await;

        assert_eq!(stored, Some(Commodity::new("COCOA", "alice")));
        assert_eq!(registry.get("GOLD").await, None);
    }

    #[tokio::test]
    async fn test_update_replaces_existing_record() {
        let registry = InMemoryRegistry::new();
        registry.add(Commodity::new("COCOA", "alice")).await;

        let changed = Commodity::new("COCOA", "bob").with_quantity(10.0);
        registry.update(&changed).await.unwrap();

        assert_eq!(registry.get("COCOA").await, Some(changed));
        assert_eq!(registry.update_count(), 1);
    }

    #[tokio::test]
    async fn test_update_of_unknown_record_is_rejected() {
        let registry = InMemoryRegistry::new();

        let err = registry
            .update(&Commodity::new("GHOST", "alice"))
            .await
            .unwrap_err();

        assert!(err.is_update_failure());
        match err {
            RegistryError::UpdateFailed { id, .. } => assert_eq!(id, "GHOST"),
            other => panic!("expected UpdateFailed, got {:?}", other),
        }
        assert_eq!(registry.update_count(), 1);
    }

    #[tokio::test]
    async fn test_network_serves_only_registered_types() {
        let network = InMemoryNetwork::new();

        match network.registry_for(Commodity::TYPE_NAME).await {
            Err(err) => assert!(err.is_unavailable()),
            Ok(_) => panic!("expected no registry for an unregistered type"),
        }

        network.add_registry(Commodity::TYPE_NAME).await;
        assert!(network.registry_for(Commodity::TYPE_NAME).await.is_ok());
    }

    #[tokio::test]
    async fn test_add_registry_returns_same_registry_per_type() {
        let network = InMemoryNetwork::new();

        let first = network.add_registry(Commodity::TYPE_NAME).await;
        first.add(Commodity::new("COCOA", "alice")).await;

        let second = network.add_registry(Commodity::TYPE_NAME).await;
        assert!(second.get("COCOA").await.is_some());
    }
}
