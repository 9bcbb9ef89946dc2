//! Store adapters.

mod memory;

pub use memory::{InMemoryActionConfigStore, InMemoryContextRuleSetStore};
