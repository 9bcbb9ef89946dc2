//! Route modules, one per resource.

pub mod actions;
pub mod resolve;
pub mod rule_sets;
