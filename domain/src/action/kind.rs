//! Action kinds and insert positions.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::DomainError;

/// Kind of DOM mutation an action performs.
///
/// - `Insert`: insert new markup relative to an anchor element
/// - `Replace`: replace the elements matched by a selector
/// - `Remove`: remove the elements matched by a selector
/// - `Alter`: global text substitution (old value -> new value)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Insert,
    Replace,
    Remove,
    Alter,
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ActionKind::Insert => "insert",
            ActionKind::Replace => "replace",
            ActionKind::Remove => "remove",
            ActionKind::Alter => "alter",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for ActionKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "insert" => Ok(ActionKind::Insert),
            "replace" => Ok(ActionKind::Replace),
            "remove" => Ok(ActionKind::Remove),
            "alter" => Ok(ActionKind::Alter),
            other => Err(DomainError::UnknownActionKind(other.to_string())),
        }
    }
}

/// Position of inserted markup relative to its anchor element.
///
/// Names follow the DOM `insertAdjacentElement` convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsertPosition {
    /// Before the anchor element itself
    BeforeBegin,
    /// Inside the anchor, before its first child
    AfterBegin,
    /// Inside the anchor, after its last child
    BeforeEnd,
    /// After the anchor element itself
    AfterEnd,
}

impl std::fmt::Display for InsertPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            InsertPosition::BeforeBegin => "beforebegin",
            InsertPosition::AfterBegin => "afterbegin",
            InsertPosition::BeforeEnd => "beforeend",
            InsertPosition::AfterEnd => "afterend",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for InsertPosition {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "beforebegin" => Ok(InsertPosition::BeforeBegin),
            "afterbegin" => Ok(InsertPosition::AfterBegin),
            "beforeend" => Ok(InsertPosition::BeforeEnd),
            "afterend" => Ok(InsertPosition::AfterEnd),
            other => Err(DomainError::UnknownInsertPosition(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_round_trip() {
        for kind in [
            ActionKind::Insert,
            ActionKind::Replace,
            ActionKind::Remove,
            ActionKind::Alter,
        ] {
            let parsed: ActionKind = kind.to_string().parse().unwrap();
            assert_eq!(parsed, kind);
        }
    }

    #[test]
    fn test_kind_serde_lowercase() {
        assert_eq!(serde_json::to_string(&ActionKind::Remove).unwrap(), "\"remove\"");
        let parsed: ActionKind = serde_json::from_str("\"insert\"").unwrap();
        assert_eq!(parsed, ActionKind::Insert);
    }

    #[test]
    fn test_unknown_kind_is_error() {
        assert!("explode".parse::<ActionKind>().is_err());
    }

    #[test]
    fn test_position_parse() {
        assert_eq!(
            "beforeBegin".parse::<InsertPosition>().unwrap(),
            InsertPosition::BeforeBegin
        );
        assert_eq!(
            "afterend".parse::<InsertPosition>().unwrap(),
            InsertPosition::AfterEnd
        );
        assert!("inside".parse::<InsertPosition>().is_err());
    }

    #[test]
    fn test_position_serde_matches_dom_names() {
        assert_eq!(
            serde_json::to_string(&InsertPosition::AfterBegin).unwrap(),
            "\"afterbegin\""
        );
    }
}
