//! Registry module
//!
//! Registries are the host-owned stores that keep network records.
//! Transaction handlers reach them through the traits below and never
//! assume a concrete engine; `InMemoryNetwork` supplies a self-contained
//! implementation for tests and embedded hosts.

mod error;
mod memory;

pub use error::RegistryError;
pub use memory::{InMemoryNetwork, InMemoryRegistry};

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::Commodity;

/// A store of commodity records, addressable by record identifier.
#[async_trait]
pub trait AssetRegistry: Send + Sync {
    /// Persist the new state of an existing record, keyed by its identifier.
    async fn update(&self, commodity: &Commodity) -> Result<(), RegistryError>;
}

/// Hands out registry handles by fully qualified type name.
#[async_trait]
pub trait RegistryProvider: Send + Sync {
    /// Resolve the registry responsible for records of the given type.
    async fn registry_for(&self, type_name: &str) -> Result<Arc<dyn AssetRegistry>, RegistryError>;
}

#[async_trait]
impl<P: RegistryProvider + ?Sized> RegistryProvider for Arc<P> {
    async fn registry_for(
        &self,
        type_name: &str,
    ) -> Result<Arc<dyn AssetRegistry>, RegistryError> {
        (**self).registry_for(type_name).await
    }
}
