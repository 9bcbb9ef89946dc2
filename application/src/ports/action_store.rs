//! Action config store port.
//!
//! Defines the keyed-lookup interface for stored [`ActionConfig`]
//! entities. Infrastructure adapters implement this over whatever
//! key-value mechanism they like; the resolution engine depends only
//! on this contract.

use async_trait::async_trait;
use pagemod_domain::{ActionConfig, ActionConfigId};
use std::sync::Arc;

use super::StoreError;

/// Shared handle to an action config store.
pub type DynActionConfigStore = Arc<dyn ActionConfigStore>;

/// Port for durable keyed lookup of [`ActionConfig`] entities.
///
/// Each operation is individually atomic: a `get` never observes a
/// partially written entity. No cross-entity transaction is offered.
#[async_trait]
pub trait ActionConfigStore: Send + Sync {
    /// Stores the entity, assigning an id if it has none. Returns the
    /// id under which the entity is retrievable.
    async fn put(&self, action: ActionConfig) -> Result<ActionConfigId, StoreError>;

    /// Looks up one entity. `Ok(None)` means not found.
    async fn get(&self, id: &ActionConfigId) -> Result<Option<ActionConfig>, StoreError>;

    /// All stored entities, in unspecified order. Callers must not
    /// depend on this order; the resolver's sorting stage is the only
    /// place order is guaranteed.
    async fn list_all(&self) -> Result<Vec<ActionConfig>, StoreError>;
}
