//! Domain layer for pagemod
//!
//! This crate contains the core entities and value objects for the
//! page-modification configuration system. It has no dependencies on
//! infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Actions
//!
//! An [`ActionConfig`] is a single typed DOM mutation instruction
//! (insert / replace / remove / alter) carrying a target selector, an
//! override priority class and a numeric load order.
//!
//! ## Rule sets
//!
//! A [`ContextRuleSet`] binds context keys (host names, URL patterns,
//! page identifiers) to ordered lists of action ids. Several rule sets
//! may overlap on the same context; the resolution engine in the
//! application layer decides which actions apply and in what order.

pub mod action;
pub mod context;
pub mod error;
pub mod ruleset;

// Re-export commonly used types
pub use action::{
    config::{ActionConfig, ActionConfigId},
    kind::{ActionKind, InsertPosition},
    priority::ConfigPriority,
};
pub use context::ResolveContext;
pub use error::DomainError;
pub use ruleset::{ContextCategory, ContextMatch, ContextRuleSet, RuleSetId};
