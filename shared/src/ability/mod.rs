//! Role-based abilities
//!
//! An [`Ability`] is an ordered list of allow/deny [`Rule`]s built for one
//! role. UI code asks it `can(action, subject)` before rendering or enabling
//! an element.
//!
//! ## Evaluation
//! - Rules are scanned from the most recently added to the oldest
//! - The first rule matching `(action, subject)` decides the answer
//! - A rule on subject `all` matches every subject
//! - No matching rule means no permission
//!
//! ```
//! use shared::ability::define_abilities_for;
//!
//! let ability = define_abilities_for("admin");
//! assert!(ability.can("view", "all"));
//! assert!(ability.cannot("use", "Edit"));
//! ```

mod roles;
mod rule;

pub use roles::{Role, define_abilities_for};
pub use rule::{ACTION_MANAGE, Effect, Rule, RuleSet, SUBJECT_ALL};

use serde::{Deserialize, Serialize};

/// Built authorization object for one role
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ability {
    rules: RuleSet,
}

impl Ability {
    /// Build from an already ordered rule set
    pub fn from_rules(rules: RuleSet) -> Self {
        Self { rules }
    }

    /// Ability granting nothing
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rules applying to `(action, subject)`, highest precedence first
    pub fn rules_for<'s, 'q>(
        &'s self,
        action: &'q str,
        subject: &'q str,
    ) -> impl Iterator<Item = &'s Rule> + use<'s, 'q> {
        self.rules
            .iter()
            .rev()
            .filter(move |rule| rule.matches(action, subject))
    }

    /// The rule that decides `(action, subject)`, if any
    pub fn relevant_rule(&self, action: &str, subject: &str) -> Option<&Rule> {
        self.rules_for(action, subject).next()
    }

    pub fn can(&self, action: &str, subject: &str) -> bool {
        self.relevant_rule(action, subject)
            .is_some_and(|rule| rule.effect() == Effect::Allow)
    }

    pub fn cannot(&self, action: &str, subject: &str) -> bool {
        !self.can(action, subject)
    }

    /// Parse a packed rule list (`[{"action":..,"subject":..,"inverted":..}]`)
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Ordered builder for an [`Ability`]
#[derive(Debug, Default)]
pub struct AbilityBuilder {
    rules: RuleSet,
}

impl AbilityBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an allow rule
    pub fn can(&mut self, action: impl Into<String>, subject: impl Into<String>) -> &mut Self {
        self.rules.push(Rule::allow(action, subject));
        self
    }

    /// Append a deny rule; overrides earlier allows for the same pair
    pub fn cannot(&mut self, action: impl Into<String>, subject: impl Into<String>) -> &mut Self {
        self.rules.push(Rule::deny(action, subject));
        self
    }

    pub fn build(self) -> Ability {
        Ability::from_rules(self.rules)
    }
}
