//! Port definitions implemented by infrastructure adapters.

pub mod action_store;
pub mod rule_set_store;

pub use action_store::{ActionConfigStore, DynActionConfigStore};
pub use rule_set_store::{ContextRuleSetStore, DynContextRuleSetStore};

use thiserror::Error;

/// Transport-level store failure.
///
/// A missing entity is not an error at this level; lookups return
/// `Ok(None)` for that. `StoreError` means the backing store itself
/// could not serve the request.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
}
