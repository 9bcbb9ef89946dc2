//! Context categories - the three axes a rule set can match on.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::action::priority::ConfigPriority;
use crate::error::DomainError;

/// The axis on which a rule set matched a browsing context.
///
/// Each category implies a priority floor for the actions it binds:
/// a host-level match carries more weight than a URL-level one, which
/// carries more than a page-level one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContextCategory {
    Host,
    Url,
    Page,
}

impl ContextCategory {
    /// The priority floor this category establishes for actions it
    /// contributed to a resolution.
    pub fn priority(&self) -> ConfigPriority {
        match self {
            ContextCategory::Host => ConfigPriority::Host,
            ContextCategory::Url => ConfigPriority::Url,
            ContextCategory::Page => ConfigPriority::Page,
        }
    }
}

impl std::fmt::Display for ContextCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ContextCategory::Host => "host",
            ContextCategory::Url => "url",
            ContextCategory::Page => "page",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for ContextCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "host" => Ok(ContextCategory::Host),
            "url" => Ok(ContextCategory::Url),
            "page" => Ok(ContextCategory::Page),
            other => Err(DomainError::UnknownCategory(other.to_string())),
        }
    }
}
