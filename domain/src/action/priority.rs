//! Override priority classes for page-modification actions.
//!
//! Priorities form a strict total order by weight. Higher weight always
//! wins a conflict on the same target: an action bound at host level
//! overrides one bound at URL level, and so on down to `Default`.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::DomainError;

/// Priority class of a page-modification action.
///
/// Ordered by weight: `Host` (3) > `Url` (2) > `Page` (1) > `Default` (0).
/// The derived `Ord` relies on the variant declaration order, so the
/// variants are declared lowest weight first.
///
/// # Example
///
/// ```
/// use pagemod_domain::ConfigPriority;
///
/// assert!(ConfigPriority::Host > ConfigPriority::Url);
/// assert!(ConfigPriority::Page > ConfigPriority::Default);
/// assert_eq!(ConfigPriority::default(), ConfigPriority::Default);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum ConfigPriority {
    /// Fallback priority when none is declared
    #[default]
    #[serde(rename = "default", alias = "DEFAULT")]
    Default,

    /// Bound to a specific page identifier
    #[serde(rename = "page", alias = "PAGE")]
    Page,

    /// Bound to a specific URL pattern
    #[serde(rename = "url", alias = "URL")]
    Url,

    /// Bound to a whole host
    #[serde(rename = "host", alias = "HOST")]
    Host,
}

impl ConfigPriority {
    /// Numeric weight of this priority class.
    pub fn weight(&self) -> u8 {
        match self {
            ConfigPriority::Host => 3,
            ConfigPriority::Url => 2,
            ConfigPriority::Page => 1,
            ConfigPriority::Default => 0,
        }
    }
}

impl std::fmt::Display for ConfigPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ConfigPriority::Host => "host",
            ConfigPriority::Url => "url",
            ConfigPriority::Page => "page",
            ConfigPriority::Default => "default",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for ConfigPriority {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "host" => Ok(ConfigPriority::Host),
            "url" => Ok(ConfigPriority::Url),
            "page" => Ok(ConfigPriority::Page),
            "default" => Ok(ConfigPriority::Default),
            other => Err(DomainError::UnknownPriority(other.to_string())),
        }
    }
}
