//! The `ActionConfig` entity - a single stored mutation instruction.

use serde::{Deserialize, Serialize};

use super::kind::{ActionKind, InsertPosition};
use super::priority::ConfigPriority;

/// Opaque identifier of a stored [`ActionConfig`].
///
/// Assigned by the store on creation, immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionConfigId(String);

impl ActionConfigId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ActionConfigId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ActionConfigId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ActionConfigId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// A single typed page-modification instruction.
///
/// Only the fields relevant to the action's [`ActionKind`] are set:
///
/// - `insert`: `selector` (anchor), `new_element`, `position` (the
///   original wire shape also carried `target`/`element`, kept for
///   round-tripping)
/// - `replace`: `selector`, `new_element`
/// - `remove`: `selector`
/// - `alter`: `old_value`, `new_value`
///
/// `priority` and `load_order` drive the resolution ordering: higher
/// priority first, and within one priority tier lower `load_order`
/// first. An `ActionConfig` is immutable once stored except via full
/// replacement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionConfig {
    /// Store-assigned identifier; absent until the entity is stored
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ActionConfigId>,

    /// What kind of mutation to perform
    #[serde(rename = "type")]
    pub kind: ActionKind,

    /// DOM target; required for replace/remove, anchor for insert
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selector: Option<String>,

    /// Markup to insert or to replace the target with
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_element: Option<String>,

    /// Where to insert relative to the anchor (insert only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<InsertPosition>,

    /// Anchor selector in the original insert wire shape
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,

    /// Inserted markup in the original insert wire shape
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element: Option<String>,

    /// Text to search for (alter)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_value: Option<String>,

    /// Replacement text (alter)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_value: Option<String>,

    /// Override priority class; `default` when unset
    #[serde(default)]
    pub priority: ConfigPriority,

    /// Tie-break within a priority tier; lower executes earlier
    #[serde(default)]
    pub load_order: i64,
}

impl ActionConfig {
    /// Creates an action of the given kind with no fields set.
    pub fn new(kind: ActionKind) -> Self {
        Self {
            id: None,
            kind,
            selector: None,
            new_element: None,
            position: None,
            target: None,
            element: None,
            old_value: None,
            new_value: None,
            priority: ConfigPriority::Default,
            load_order: 0,
        }
    }

    /// Creates a `remove` action for the given selector.
    pub fn remove(selector: impl Into<String>) -> Self {
        Self::new(ActionKind::Remove).with_selector(selector)
    }

    /// Creates a `replace` action swapping the selector's matches for
    /// the given markup.
    pub fn replace(selector: impl Into<String>, new_element: impl Into<String>) -> Self {
        let mut action = Self::new(ActionKind::Replace).with_selector(selector);
        action.new_element = Some(new_element.into());
        action
    }

    /// Creates an `insert` action placing markup relative to an anchor.
    pub fn insert(
        selector: impl Into<String>,
        new_element: impl Into<String>,
        position: InsertPosition,
    ) -> Self {
        let mut action = Self::new(ActionKind::Insert).with_selector(selector);
        action.new_element = Some(new_element.into());
        action.position = Some(position);
        action
    }

    /// Creates an `alter` action substituting text across the page.
    pub fn alter(old_value: impl Into<String>, new_value: impl Into<String>) -> Self {
        let mut action = Self::new(ActionKind::Alter);
        action.old_value = Some(old_value.into());
        action.new_value = Some(new_value.into());
        action
    }

    pub fn with_selector(mut self, selector: impl Into<String>) -> Self {
        self.selector = Some(selector.into());
        self
    }

    pub fn with_priority(mut self, priority: ConfigPriority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_load_order(mut self, load_order: i64) -> Self {
        self.load_order = load_order;
        self
    }

    pub fn with_id(mut self, id: impl Into<ActionConfigId>) -> Self {
        self.id = Some(id.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_fields_absent() {
        let json = r#"{"type": "remove", "selector": ".ad-banner"}"#;
        let action: ActionConfig = serde_json::from_str(json).unwrap();
        assert_eq!(action.kind, ActionKind::Remove);
        assert_eq!(action.selector.as_deref(), Some(".ad-banner"));
        assert_eq!(action.priority, ConfigPriority::Default);
        assert_eq!(action.load_order, 0);
        assert!(action.id.is_none());
    }

    #[test]
    fn test_camel_case_wire_names() {
        let action = ActionConfig::replace("h1", "<h2>less shouty</h2>")
            .with_priority(ConfigPriority::Url)
            .with_load_order(7);
        let value = serde_json::to_value(&action).unwrap();
        assert_eq!(value["type"], "replace");
        assert_eq!(value["newElement"], "<h2>less shouty</h2>");
        assert_eq!(value["loadOrder"], 7);
        assert_eq!(value["priority"], "url");
        // unset optionals are not serialized
        assert!(value.get("oldValue").is_none());
    }

    #[test]
    fn test_json_round_trip() {
        let action = ActionConfig::insert("#nav", "<li>extra</li>", InsertPosition::BeforeEnd)
            .with_priority(ConfigPriority::Host)
            .with_id("a-1");
        let json = serde_json::to_string(&action).unwrap();
        let back: ActionConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, action);
    }

    #[test]
    fn test_yaml_round_trip() {
        let action = ActionConfig::alter("Studio", "Atelier").with_load_order(-3);
        let yaml = serde_yaml::to_string(&action).unwrap();
        let back: ActionConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back, action);
    }

    #[test]
    fn test_accepts_original_backend_payload() {
        // Shape the Java backend accepted: uppercase priority, camelCase fields
        let json = r#"{
            "type": "insert",
            "position": "afterbegin",
            "target": "body",
            "element": "<div>banner</div>",
            "priority": "HOST",
            "loadOrder": 2
        }"#;
        let action: ActionConfig = serde_json::from_str(json).unwrap();
        assert_eq!(action.kind, ActionKind::Insert);
        assert_eq!(action.position, Some(InsertPosition::AfterBegin));
        assert_eq!(action.target.as_deref(), Some("body"));
        assert_eq!(action.priority, ConfigPriority::Host);
        assert_eq!(action.load_order, 2);
    }
}
