//! Context rule set store port.

use async_trait::async_trait;
use pagemod_domain::{ContextRuleSet, RuleSetId};
use std::sync::Arc;

use super::StoreError;

/// Shared handle to a rule set store.
pub type DynContextRuleSetStore = Arc<dyn ContextRuleSetStore>;

/// Port for durable keyed lookup of [`ContextRuleSet`] entities.
///
/// Same contract shape as [`super::ActionConfigStore`]: per-operation
/// atomicity, no multi-key transactions, unspecified listing order.
#[async_trait]
pub trait ContextRuleSetStore: Send + Sync {
    /// Stores the entity, assigning an id if it has none.
    async fn put(&self, rule_set: ContextRuleSet) -> Result<RuleSetId, StoreError>;

    /// Looks up one entity. `Ok(None)` means not found.
    async fn get(&self, id: &RuleSetId) -> Result<Option<ContextRuleSet>, StoreError>;

    /// All stored entities, in unspecified order.
    async fn list_all(&self) -> Result<Vec<ContextRuleSet>, StoreError>;
}
