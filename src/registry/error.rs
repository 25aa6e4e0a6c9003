//! Registry errors
//!
//! Failure kinds surfaced by registry collaborators. Transaction handlers
//! pass these through to the host without wrapping or rewording them.

use thiserror::Error;

/// Errors produced by a registry provider or registry.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RegistryError {
    /// No registry could be resolved for the requested type name.
    #[error("no registry available for `{0}`")]
    Unavailable(String),

    /// The registry refused or failed to persist the record.
    #[error("update of `{id}` rejected: {reason}")]
    UpdateFailed { id: String, reason: String },
}

impl RegistryError {
    /// Update rejection for a record the registry does not hold.
    pub fn unknown_record(id: impl Into<String>) -> Self {
        Self::UpdateFailed {
            id: id.into(),
            reason: "no record under this id".to_string(),
        }
    }

    /// Check if this error means no registry handle could be obtained.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, RegistryError::Unavailable(_))
    }

    /// Check if this error came from a rejected update.
    pub fn is_update_failure(&self) -> bool {
        matches!(self, RegistryError::UpdateFailed { .. })
    }
}
