//! Conversation turns and input normalization
//!
//! The transport layer hands the engine an arbitrary JSON value that is
//! supposed to be a list of `{role, content}` pairs. Normalization turns
//! that into a typed conversation, silently dropping anything malformed.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Speaker role for a conversation turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
}

impl Role {
    /// Parse a raw role tag; anything outside the three recognized tags is rejected
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "user" => Some(Role::User),
            "assistant" => Some(Role::Assistant),
            "system" => Some(Role::System),
            _ => None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Assistant => write!(f, "assistant"),
            Role::System => write!(f, "system"),
        }
    }
}

/// One message in a conversation
///
/// Invariant: once produced by [`normalize`], `content` is trimmed and
/// non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub content: String,
}

impl Turn {
    /// Create a turn from a role and content
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Whether this turn was spoken by the user
    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }
}

/// Normalize an arbitrary JSON value into a typed conversation
///
/// A non-array value yields an empty conversation. Array elements are
/// dropped unless they are objects with a recognized `role` tag and a
/// string `content` that is non-empty after trimming. Relative order of
/// retained turns is preserved. This never fails; malformed input is not
/// an error condition.
pub fn normalize(raw: &Value) -> Vec<Turn> {
    let Some(items) = raw.as_array() else {
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| {
            let obj = item.as_object()?;
            let role = Role::parse(obj.get("role")?.as_str()?)?;
            let content = obj.get("content")?.as_str()?.trim();
            if content.is_empty() {
                return None;
            }
            Some(Turn::new(role, content))
        })
        .collect()
}
