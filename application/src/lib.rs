//! Application layer for pagemod
//!
//! This crate contains the resolution use cases and the store port
//! definitions. It depends only on the domain layer.
//!
//! The two entry points:
//!
//! - [`ResolveActionsUseCase`]: the full matching and ordering
//!   pipeline, producing a deterministically ordered action list.
//! - [`MatchContextUseCase`]: the matching stage alone, for
//!   diagnostics and testing.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    ActionConfigStore, ContextRuleSetStore, DynActionConfigStore, DynContextRuleSetStore,
    StoreError,
};
pub use use_cases::match_context::MatchContextUseCase;
pub use use_cases::resolve_actions::{ResolveActionsUseCase, ResolveError, ResolvedActions};
