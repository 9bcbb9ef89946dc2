//! Resolve Actions use case.
//!
//! The full resolution pipeline: match rule sets against a context,
//! dereference the bound action ids, merge the priority floors, and
//! produce one flat, deterministically ordered action list.

use pagemod_domain::{ActionConfig, ActionConfigId, ConfigPriority, ResolveContext};
use serde::Serialize;
use std::collections::HashMap;
use thiserror::Error;
use tracing::{debug, warn};

use crate::ports::{DynActionConfigStore, DynContextRuleSetStore, StoreError};
use crate::use_cases::match_context::MatchContextUseCase;

/// Errors that abort a resolution call.
///
/// Dangling action references are deliberately not represented here:
/// they degrade the result (the action is skipped and reported) but
/// never fail the call.
#[derive(Error, Debug)]
pub enum ResolveError {
    /// The backing store could not serve a lookup. Fatal for the call.
    #[error("resolution failed: {0}")]
    StoreUnavailable(#[from] StoreError),
}

/// Output of a resolution: the ordered actions plus any rule-set
/// references that no longer dereference.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ResolvedActions {
    /// Actions in application order
    pub actions: Vec<ActionConfig>,
    /// Referenced ids the action store no longer knows
    pub dangling: Vec<ActionConfigId>,
}

/// Entry for one discovered action while merging matches.
struct Discovered {
    action: ActionConfig,
    effective: ConfigPriority,
    discovery: usize,
}

/// Use case implementing `Resolve(context)`.
///
/// Ordering contract:
///
/// 1. Every match contributes its bound action ids with a priority
///    floor implied by the matched axis (host > url > page).
/// 2. An action's effective priority is the maximum of its stored
///    priority and every floor it was discovered under; the floor
///    never lowers an explicitly stronger stored priority.
/// 3. An id reachable through several matches appears once, at its
///    maximum effective priority and earliest discovery position.
/// 4. Final order: effective priority descending, then `load_order`
///    ascending, then discovery order. Resolving the same stores and
///    context twice yields identical output.
///
/// The pipeline is read-only over both stores and holds no state of
/// its own; concurrent calls need no coordination.
pub struct ResolveActionsUseCase {
    actions: DynActionConfigStore,
    matcher: MatchContextUseCase,
}

impl ResolveActionsUseCase {
    pub fn new(actions: DynActionConfigStore, rule_sets: DynContextRuleSetStore) -> Self {
        Self {
            actions,
            matcher: MatchContextUseCase::new(rule_sets),
        }
    }

    /// Resolves the ordered action list for the given context.
    ///
    /// An empty context resolves to an empty list; a dangling action
    /// reference is skipped with a warning; a store failure aborts the
    /// call with [`ResolveError::StoreUnavailable`].
    pub async fn execute(&self, context: &ResolveContext) -> Result<ResolvedActions, ResolveError> {
        let matches = self.matcher.execute(context).await?;

        let mut discovered: Vec<Discovered> = Vec::new();
        let mut by_id: HashMap<ActionConfigId, usize> = HashMap::new();
        let mut dangling: Vec<ActionConfigId> = Vec::new();

        for matched in &matches {
            let floor = matched.category.priority();
            for id in matched.bound_actions() {
                if let Some(&slot) = by_id.get(id) {
                    // Already dereferenced through another match; keep
                    // the maximum effective priority and the earliest
                    // discovery position.
                    let entry = &mut discovered[slot];
                    entry.effective = entry.effective.max(floor);
                    continue;
                }
                if dangling.contains(id) {
                    continue;
                }
                match self.actions.get(id).await? {
                    Some(action) => {
                        by_id.insert(id.clone(), discovered.len());
                        let effective = action.priority.max(floor);
                        discovered.push(Discovered {
                            action,
                            effective,
                            discovery: discovered.len(),
                        });
                    }
                    None => {
                        warn!(action_id = %id, "Skipping dangling action reference");
                        dangling.push(id.clone());
                    }
                }
            }
        }

        discovered.sort_by(|a, b| {
            b.effective
                .cmp(&a.effective)
                .then(a.action.load_order.cmp(&b.action.load_order))
                .then(a.discovery.cmp(&b.discovery))
        });

        debug!(
            actions = discovered.len(),
            dangling = dangling.len(),
            "Resolution finished"
        );
        Ok(ResolvedActions {
            actions: discovered.into_iter().map(|d| d.action).collect(),
            dangling,
        })
    }
}
