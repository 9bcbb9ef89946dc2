//! The browsing context a resolution is asked about.

use serde::{Deserialize, Serialize};

/// A tuple of optional (host, url, page) values describing where a
/// page modification might apply.
///
/// Each axis is independently present-or-absent; absent means "not
/// constrained on this axis". A context with no populated axis matches
/// nothing (there are no universal matches through this path).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResolveContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
}

impl ResolveContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_page(mut self, page: impl Into<String>) -> Self {
        self.page = Some(page.into());
        self
    }

    /// True when no axis is populated.
    pub fn is_empty(&self) -> bool {
        self.host.is_none() && self.url.is_none() && self.page.is_none()
    }
}
