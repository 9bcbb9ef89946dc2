//! Shared handler state.

use pagemod_application::{DynActionConfigStore, DynContextRuleSetStore};

/// Store handles injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub actions: DynActionConfigStore,
    pub rule_sets: DynContextRuleSetStore,
}

impl AppState {
    pub fn new(actions: DynActionConfigStore, rule_sets: DynContextRuleSetStore) -> Self {
        Self { actions, rule_sets }
    }
}
