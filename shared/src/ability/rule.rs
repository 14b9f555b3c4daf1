//! Rule primitives

use serde::{Deserialize, Serialize};

/// Wildcard subject matching every subject
pub const SUBJECT_ALL: &str = "all";

/// Wildcard action matching every action
pub const ACTION_MANAGE: &str = "manage";

/// Whether a rule grants or withholds an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Allow,
    Deny,
}

/// Single authorization statement.
///
/// Serialized in the packed form UI code consumes:
/// `{"action":"use","subject":"Edit","inverted":true}`.
/// `inverted` is omitted for allow rules.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rule {
    pub action: String,
    pub subject: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub inverted: bool,
}

impl Rule {
    /// Create an allow rule
    pub fn allow(action: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            subject: subject.into(),
            inverted: false,
        }
    }

    /// Create a deny rule
    pub fn deny(action: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            subject: subject.into(),
            inverted: true,
        }
    }

    pub fn effect(&self) -> Effect {
        if self.inverted {
            Effect::Deny
        } else {
            Effect::Allow
        }
    }

    /// Whether this rule applies to `(action, subject)`.
    ///
    /// A rule on `all` applies to every subject, a rule on `manage` to every
    /// action. The reverse does not hold: asking about subject `all` only
    /// matches rules written against `all`.
    pub fn matches(&self, action: &str, subject: &str) -> bool {
        let action_ok = self.action == action || self.action == ACTION_MANAGE;
        let subject_ok = self.subject == subject || self.subject == SUBJECT_ALL;
        action_ok && subject_ok
    }
}

/// Ordered rule list for one role; later rules take precedence.
pub type RuleSet = Vec<Rule>;
