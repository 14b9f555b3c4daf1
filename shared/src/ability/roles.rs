//! Role Definitions
//!
//! Rule tables per role. Order matters: deny entries listed after an
//! allow on `all` carve exceptions out of it.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use super::Effect::{self, Allow, Deny};
use super::{Ability, AbilityBuilder};

/// Admin: sees and uses everything except catalog editing controls
pub const ADMIN_RULES: &[(Effect, &str, &str)] = &[
    (Allow, "access", "admin"),
    (Allow, "view", "all"),
    (Allow, "use", "all"),
    (Deny, "use", "Create Category"),
    (Deny, "use", "Create Product"),
    (Deny, "use", "Edit"),
    (Deny, "use", "Remove"),
    (Deny, "view", "Actions"),
];

/// Cashier: access to the till only, no stock balances or role screens
pub const KASSA_RULES: &[(Effect, &str, &str)] = &[
    (Allow, "access", "kassa"),
    (Deny, "view", "qoldiqlar"),
    (Deny, "view", "RoliComponent"),
    (Deny, "view", "Actions"),
    (Deny, "delete", "anything"),
];

/// User role
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    /// Cashier
    Kassa,
    /// Any role without a rule table
    Other(String),
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Role::Admin => "admin",
            Role::Kassa => "kassa",
            Role::Other(name) => name,
        }
    }

    /// Rule table for this role (empty for unknown roles)
    pub fn rule_table(&self) -> &'static [(Effect, &'static str, &'static str)] {
        match self {
            Role::Admin => ADMIN_RULES,
            Role::Kassa => KASSA_RULES,
            Role::Other(_) => &[],
        }
    }

    pub fn ability(&self) -> Ability {
        let table = self.rule_table();
        if table.is_empty() {
            tracing::debug!(role = %self, "No rules defined for role, granting nothing");
        }

        let mut builder = AbilityBuilder::new();
        for &(effect, action, subject) in table {
            match effect {
                Allow => builder.can(action, subject),
                Deny => builder.cannot(action, subject),
            };
        }
        builder.build()
    }
}

impl From<&str> for Role {
    fn from(name: &str) -> Self {
        match name {
            "admin" => Role::Admin,
            "kassa" => Role::Kassa,
            other => Role::Other(other.to_string()),
        }
    }
}

impl FromStr for Role {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Role::from(s))
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build the ability for a role name
pub fn define_abilities_for(role: &str) -> Ability {
    Role::from(role).ability()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_abilities() {
        let ability = define_abilities_for("admin");
        assert!(ability.can("access", "admin"));
        assert!(ability.can("view", "all"));
        assert!(ability.can("view", "qoldiqlar"));
        assert!(ability.can("use", "Print Receipt"));
        assert!(ability.cannot("use", "Edit"));
        assert!(ability.cannot("use", "Remove"));
        assert!(ability.cannot("use", "Create Category"));
        assert!(ability.cannot("use", "Create Product"));
        assert!(ability.cannot("view", "Actions"));
        assert!(ability.cannot("access", "kassa"));
    }

    #[test]
    fn test_kassa_abilities() {
        let ability = define_abilities_for("kassa");
        assert!(ability.can("access", "kassa"));
        assert!(ability.cannot("view", "qoldiqlar"));
        assert!(ability.cannot("view", "RoliComponent"));
        assert!(ability.cannot("view", "Actions"));
        assert!(ability.cannot("delete", "anything"));
        assert!(ability.cannot("access", "admin"));
        assert!(ability.cannot("view", "all"));
    }

    #[test]
    fn test_unknown_role_grants_nothing() {
        let ability = define_abilities_for("guest");
        assert!(ability.is_empty());
        for (action, subject) in [
            ("access", "admin"),
            ("access", "kassa"),
            ("view", "all"),
            ("use", "all"),
            ("delete", "anything"),
        ] {
            assert!(ability.cannot(action, subject), "{action} {subject}");
        }
    }

    #[test]
    fn test_role_names_are_case_sensitive() {
        assert_eq!(Role::from("Admin"), Role::Other("Admin".into()));
        assert!(define_abilities_for("ADMIN").is_empty());
    }

    #[test]
    fn test_resolver_is_idempotent() {
        for role in ["admin", "kassa", "guest"] {
            assert_eq!(define_abilities_for(role), define_abilities_for(role));
        }
    }

    #[test]
    fn test_role_parse_roundtrip() {
        for name in ["admin", "kassa", "omborchi"] {
            let role: Role = name.parse().unwrap();
            assert_eq!(role.as_str(), name);
            assert_eq!(role.to_string(), name);
        }
    }
}
