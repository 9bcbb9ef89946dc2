//! Context rule sets - bindings from context keys to action ids.

mod category;
mod rule_set;

pub use category::ContextCategory;
pub use rule_set::{ContextMatch, ContextRuleSet, RuleSetId};
