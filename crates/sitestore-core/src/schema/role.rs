use crate::{Error, Result};

/// Caller role, as far as field visibility is concerned.
///
/// Roles are ordered: an admin satisfies every maintain requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Role {
    /// No update rights in the current tenant
    Guest,

    /// Update rights in the current tenant
    Maintain,

    /// Update rights in the reserved admin tenant
    Admin,
}

impl Role {
    /// Returns `true` if a caller with this role may see or write a field
    /// restricted to `required`.
    pub fn satisfies(self, required: Role) -> bool {
        self >= required
    }

    pub(crate) fn parse(src: &str) -> Result<Role> {
        match src {
            "admin" => Ok(Role::Admin),
            "maintain" => Ok(Role::Maintain),
            _ => Err(Error::invalid_model(format!("unknown role `{src}`"))),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Guest => "guest",
            Role::Maintain => "maintain",
            Role::Admin => "admin",
        }
    }
}
