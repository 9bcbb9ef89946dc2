//! Match Context use case.
//!
//! The matching stage of the resolution pipeline: given a browsing
//! context, find every stored rule set that applies and report which
//! axis and key it matched on.

use pagemod_domain::{ContextCategory, ContextMatch, ContextRuleSet, ResolveContext};
use tracing::debug;

use crate::ports::DynContextRuleSetStore;
use crate::use_cases::resolve_actions::ResolveError;

/// Use case implementing `MatchContextRuleSets(context)`.
///
/// Matching rules:
///
/// - A populated axis matches a rule set when the rule set's map for
///   that axis contains a key exactly equal to the supplied value. No
///   glob or regex expansion happens here.
/// - Axes combine with OR: a rule set matching only on host still
///   contributes even when the supplied url and page match nothing.
/// - A rule set matching on several axes yields one [`ContextMatch`]
///   per axis; the multiplicity feeds the priority floor downstream
///   and must not be collapsed.
/// - An empty context yields an empty match list, not an error.
///
/// Rule sets are visited sorted by id and axes are checked in host,
/// url, page order, so the match sequence is deterministic regardless
/// of store iteration order.
pub struct MatchContextUseCase {
    rule_sets: DynContextRuleSetStore,
}

impl MatchContextUseCase {
    pub fn new(rule_sets: DynContextRuleSetStore) -> Self {
        Self { rule_sets }
    }

    /// Finds all matching rule sets for the given context.
    pub async fn execute(&self, context: &ResolveContext) -> Result<Vec<ContextMatch>, ResolveError> {
        if context.is_empty() {
            debug!("Empty context, nothing to match");
            return Ok(Vec::new());
        }

        let mut rule_sets = self.rule_sets.list_all().await?;
        rule_sets.sort_by(|a, b| a.id.cmp(&b.id));

        let mut matches = Vec::new();
        for rule_set in rule_sets {
            Self::match_axes(&mut matches, &rule_set, context);
        }

        debug!(count = matches.len(), "Context matching finished");
        Ok(matches)
    }

    fn match_axes(matches: &mut Vec<ContextMatch>, rule_set: &ContextRuleSet, context: &ResolveContext) {
        let axes = [
            (ContextCategory::Host, context.host.as_deref()),
            (ContextCategory::Url, context.url.as_deref()),
            (ContextCategory::Page, context.page.as_deref()),
        ];
        for (category, value) in axes {
            if let Some(key) = value
                && rule_set.bindings(category).contains_key(key)
            {
                matches.push(ContextMatch::new(rule_set.clone(), category, key));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{ContextRuleSetStore, StoreError};
    use async_trait::async_trait;
    use pagemod_domain::{ActionConfigId, RuleSetId};
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    /// Minimal in-memory fake over the rule set port.
    struct FakeRuleSetStore {
        entries: Mutex<HashMap<RuleSetId, ContextRuleSet>>,
    }

    impl FakeRuleSetStore {
        fn with(rule_sets: Vec<ContextRuleSet>) -> Arc<Self> {
            let entries = rule_sets
                .into_iter()
                .map(|r| (r.id.clone().expect("test rule sets carry ids"), r))
                .collect();
            Arc::new(Self {
                entries: Mutex::new(entries),
            })
        }
    }

    #[async_trait]
    impl ContextRuleSetStore for FakeRuleSetStore {
        async fn put(&self, rule_set: ContextRuleSet) -> Result<RuleSetId, StoreError> {
            let id = rule_set.id.clone().expect("test rule sets carry ids");
            self.entries.lock().await.insert(id.clone(), rule_set);
            Ok(id)
        }

        async fn get(&self, id: &RuleSetId) -> Result<Option<ContextRuleSet>, StoreError> {
            Ok(self.entries.lock().await.get(id).cloned())
        }

        async fn list_all(&self) -> Result<Vec<ContextRuleSet>, StoreError> {
            Ok(self.entries.lock().await.values().cloned().collect())
        }
    }

    fn ids(raw: &[&str]) -> Vec<ActionConfigId> {
        raw.iter().map(|s| ActionConfigId::from(*s)).collect()
    }

    #[tokio::test]
    async fn test_empty_context_matches_nothing() {
        let store = FakeRuleSetStore::with(vec![
            ContextRuleSet::new().with_id("r1").with_host("example.com", ids(&["a1"])),
        ]);
        let use_case = MatchContextUseCase::new(store);

        let matches = use_case.execute(&ResolveContext::new()).await.unwrap();
        assert!(matches.is_empty());
    }

    #[tokio::test]
    async fn test_exact_key_match_per_axis() {
        let store = FakeRuleSetStore::with(vec![
            ContextRuleSet::new().with_id("r1").with_host("example.com", ids(&["a1"])),
        ]);
        let use_case = MatchContextUseCase::new(store);

        let matches = use_case
            .execute(&ResolveContext::new().with_host("example.com"))
            .await
            .unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].category, ContextCategory::Host);
        assert_eq!(matches[0].key, "example.com");

        // No substring or prefix matching
        let use_case = MatchContextUseCase::new(FakeRuleSetStore::with(vec![
            ContextRuleSet::new().with_id("r1").with_host("example.com", ids(&["a1"])),
        ]));
        let matches = use_case
            .execute(&ResolveContext::new().with_host("sub.example.com"))
            .await
            .unwrap();
        assert!(matches.is_empty());
    }

    #[tokio::test]
    async fn test_or_semantics_across_axes() {
        // r1 matches only on host; supplied url and page match nothing
        let store = FakeRuleSetStore::with(vec![
            ContextRuleSet::new().with_id("r1").with_host("example.com", ids(&["a1"])),
        ]);
        let use_case = MatchContextUseCase::new(store);

        let context = ResolveContext::new()
            .with_host("example.com")
            .with_url("other.example/x")
            .with_page("unknown-page");
        let matches = use_case.execute(&context).await.unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].category, ContextCategory::Host);
    }

    #[tokio::test]
    async fn test_double_match_yields_two_tuples() {
        let store = FakeRuleSetStore::with(vec![
            ContextRuleSet::new()
                .with_id("r1")
                .with_host("example.com", ids(&["a1"]))
                .with_url("example.com/x", ids(&["a2"])),
        ]);
        let use_case = MatchContextUseCase::new(store);

        let context = ResolveContext::new()
            .with_host("example.com")
            .with_url("example.com/x");
        let matches = use_case.execute(&context).await.unwrap();
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].category, ContextCategory::Host);
        assert_eq!(matches[1].category, ContextCategory::Url);
    }

    #[tokio::test]
    async fn test_match_order_is_deterministic_across_rule_sets() {
        let rule = |id: &str| {
            ContextRuleSet::new().with_id(id).with_host("example.com", ids(&["a1"]))
        };
        let store = FakeRuleSetStore::with(vec![rule("r3"), rule("r1"), rule("r2")]);
        let use_case = MatchContextUseCase::new(store);

        let context = ResolveContext::new().with_host("example.com");
        let matches = use_case.execute(&context).await.unwrap();
        let order: Vec<_> = matches
            .iter()
            .map(|m| m.rule_set.id.clone().unwrap().to_string())
            .collect();
        assert_eq!(order, ["r1", "r2", "r3"]);
    }

    #[tokio::test]
    async fn test_no_match_is_empty_not_error() {
        let store = FakeRuleSetStore::with(vec![]);
        let use_case = MatchContextUseCase::new(store);
        let matches = use_case
            .execute(&ResolveContext::new().with_host("example.com"))
            .await
            .unwrap();
        assert!(matches.is_empty());
    }
}
