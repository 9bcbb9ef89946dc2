//! In-memory store adapters.
//!
//! Process-local implementations of the two store ports, backed by an
//! RwLock'd map. Ids are assigned on `put` when the entity carries
//! none; entities go out as cloned snapshots, so callers never observe
//! a partial write and cannot mutate stored state through a returned
//! value.

use async_trait::async_trait;
use pagemod_application::ports::{
    ActionConfigStore, ContextRuleSetStore, StoreError,
};
use pagemod_domain::{ActionConfig, ActionConfigId, ContextRuleSet, RuleSetId};
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

/// In-memory [`ActionConfigStore`].
#[derive(Default)]
pub struct InMemoryActionConfigStore {
    entries: RwLock<HashMap<ActionConfigId, ActionConfig>>,
}

impl InMemoryActionConfigStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ActionConfigStore for InMemoryActionConfigStore {
    async fn put(&self, mut action: ActionConfig) -> Result<ActionConfigId, StoreError> {
        let id = match &action.id {
            Some(id) => id.clone(),
            None => {
                let id = ActionConfigId::new(Uuid::new_v4().to_string());
                action.id = Some(id.clone());
                id
            }
        };
        self.entries.write().await.insert(id.clone(), action);
        info!(action_id = %id, "Stored action config");
        Ok(id)
    }

    async fn get(&self, id: &ActionConfigId) -> Result<Option<ActionConfig>, StoreError> {
        Ok(self.entries.read().await.get(id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<ActionConfig>, StoreError> {
        Ok(self.entries.read().await.values().cloned().collect())
    }
}

/// In-memory [`ContextRuleSetStore`].
#[derive(Default)]
pub struct InMemoryContextRuleSetStore {
    entries: RwLock<HashMap<RuleSetId, ContextRuleSet>>,
}

impl InMemoryContextRuleSetStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContextRuleSetStore for InMemoryContextRuleSetStore {
    async fn put(&self, mut rule_set: ContextRuleSet) -> Result<RuleSetId, StoreError> {
        let id = match &rule_set.id {
            Some(id) => id.clone(),
            None => {
                let id = RuleSetId::new(Uuid::new_v4().to_string());
                rule_set.id = Some(id.clone());
                id
            }
        };
        self.entries.write().await.insert(id.clone(), rule_set);
        info!(rule_set_id = %id, "Stored context rule set");
        Ok(id)
    }

    async fn get(&self, id: &RuleSetId) -> Result<Option<ContextRuleSet>, StoreError> {
        Ok(self.entries.read().await.get(id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<ContextRuleSet>, StoreError> {
        Ok(self.entries.read().await.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagemod_domain::ConfigPriority;

    #[tokio::test]
    async fn test_put_assigns_id_when_absent() {
        let store = InMemoryActionConfigStore::new();
        let id = store.put(ActionConfig::remove(".ad")).await.unwrap();
        assert!(!id.as_str().is_empty());

        let stored = store.get(&id).await.unwrap().unwrap();
        assert_eq!(stored.id.as_ref(), Some(&id));
    }

    #[tokio::test]
    async fn test_put_keeps_existing_id_and_replaces() {
        let store = InMemoryActionConfigStore::new();
        let first = ActionConfig::remove(".ad").with_id("a1");
        let id = store.put(first).await.unwrap();
        assert_eq!(id.as_str(), "a1");

        // Full replacement under the same id
        let second = ActionConfig::remove(".banner")
            .with_id("a1")
            .with_priority(ConfigPriority::Host);
        store.put(second).await.unwrap();

        let stored = store.get(&id).await.unwrap().unwrap();
        assert_eq!(stored.selector.as_deref(), Some(".banner"));
        assert_eq!(stored.priority, ConfigPriority::Host);
        assert_eq!(store.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_get_missing_is_none_not_error() {
        let store = InMemoryActionConfigStore::new();
        let found = store.get(&ActionConfigId::from("nope")).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_returned_entity_is_a_snapshot() {
        let store = InMemoryActionConfigStore::new();
        let id = store.put(ActionConfig::remove(".ad")).await.unwrap();

        let mut snapshot = store.get(&id).await.unwrap().unwrap();
        snapshot.selector = Some(".mutated".to_string());

        let stored = store.get(&id).await.unwrap().unwrap();
        assert_eq!(stored.selector.as_deref(), Some(".ad"));
    }

    #[tokio::test]
    async fn test_rule_set_store_round_trip() {
        let store = InMemoryContextRuleSetStore::new();
        let rule_set = ContextRuleSet::new()
            .with_host("example.com", vec![ActionConfigId::from("a1")]);
        let id = store.put(rule_set).await.unwrap();

        let stored = store.get(&id).await.unwrap().unwrap();
        assert!(stored.hosts.contains_key("example.com"));
        assert_eq!(store.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_distinct_puts_get_distinct_ids() {
        let store = InMemoryActionConfigStore::new();
        let a = store.put(ActionConfig::remove(".a")).await.unwrap();
        let b = store.put(ActionConfig::remove(".b")).await.unwrap();
        assert_ne!(a, b);
        assert_eq!(store.list_all().await.unwrap().len(), 2);
    }
}
