//! The `ContextRuleSet` entity and the match tuple it produces.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::category::ContextCategory;
use crate::action::config::ActionConfigId;

/// Opaque identifier of a stored [`ContextRuleSet`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleSetId(String);

impl RuleSetId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RuleSetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for RuleSetId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for RuleSetId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Bindings from context keys to ordered lists of action ids.
///
/// Each of the three maps binds keys on one context axis: host names,
/// URL patterns, or page identifiers. A given action id may legally
/// appear under multiple keys and multiple axes at once; the resolver
/// stabilizes its final position, it never deduplicates at this level.
///
/// `BTreeMap` keeps key iteration deterministic, which the matching
/// stage relies on for reproducible output ordering.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ContextRuleSet {
    /// Store-assigned identifier; absent until the entity is stored
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RuleSetId>,

    /// Host name -> bound action ids
    #[serde(default)]
    pub hosts: BTreeMap<String, Vec<ActionConfigId>>,

    /// URL pattern -> bound action ids
    #[serde(default)]
    pub urls: BTreeMap<String, Vec<ActionConfigId>>,

    /// Page identifier -> bound action ids
    #[serde(default)]
    pub pages: BTreeMap<String, Vec<ActionConfigId>>,
}

impl ContextRuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: impl Into<RuleSetId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Binds action ids under a host key.
    pub fn with_host(mut self, host: impl Into<String>, actions: Vec<ActionConfigId>) -> Self {
        self.hosts.insert(host.into(), actions);
        self
    }

    /// Binds action ids under a URL key.
    pub fn with_url(mut self, url: impl Into<String>, actions: Vec<ActionConfigId>) -> Self {
        self.urls.insert(url.into(), actions);
        self
    }

    /// Binds action ids under a page key.
    pub fn with_page(mut self, page: impl Into<String>, actions: Vec<ActionConfigId>) -> Self {
        self.pages.insert(page.into(), actions);
        self
    }

    /// The bindings for one context axis.
    pub fn bindings(&self, category: ContextCategory) -> &BTreeMap<String, Vec<ActionConfigId>> {
        match category {
            ContextCategory::Host => &self.hosts,
            ContextCategory::Url => &self.urls,
            ContextCategory::Page => &self.pages,
        }
    }
}

/// One (rule set, matched axis, matched key) tuple from the matching
/// stage.
///
/// A rule set matching on two axes yields two tuples; the multiplicity
/// feeds the priority floor computation and must not be collapsed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContextMatch {
    /// The rule set that matched
    pub rule_set: ContextRuleSet,
    /// Which axis matched
    pub category: ContextCategory,
    /// The key that matched on that axis
    pub key: String,
}

impl ContextMatch {
    pub fn new(rule_set: ContextRuleSet, category: ContextCategory, key: impl Into<String>) -> Self {
        Self {
            rule_set,
            category,
            key: key.into(),
        }
    }

    /// The action ids this match contributes, in their bound order.
    pub fn bound_actions(&self) -> &[ActionConfigId] {
        self.rule_set
            .bindings(self.category)
            .get(&self.key)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
