use serde::{Deserialize, Serialize};

use super::errors::AuthError;
use crate::domain::shared::value_objects::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    User,
    Manager,
}

impl Role {
    /// Managers hold every permission a plain user has.
    pub fn satisfies(self, required: Role) -> bool {
        match required {
            Role::User => true,
            Role::Manager => self == Role::Manager,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::User => write!(f, "USER"),
            Role::Manager => write!(f, "MANAGER"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "USER" => Ok(Role::User),
            "MANAGER" => Ok(Role::Manager),
            _ => Err(AuthError::Unauthorized),
        }
    }
}

/// Identity resolved from a verified bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub role: Role,
}

impl AuthenticatedUser {
    pub fn new(user_id: UserId, role: Role) -> Self {
        Self { user_id, role }
    }
}

/// Allow or deny an identity for an operation that needs `required`.
pub fn authorize(user: &AuthenticatedUser, required: Role) -> Result<(), AuthError> {
    if user.role.satisfies(required) {
        Ok(())
    } else {
        Err(AuthError::Forbidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_with(role: Role) -> AuthenticatedUser {
        AuthenticatedUser::new(UserId::new("user-A"), role)
    }

    #[test]
    fn should_allow_manager_on_manager_operations() {
        assert!(authorize(&user_with(Role::Manager), Role::Manager).is_ok());
    }

    #[test]
    fn should_forbid_user_on_manager_operations() {
        let result = authorize(&user_with(Role::User), Role::Manager);
        assert_eq!(result, Err(AuthError::Forbidden));
    }

    #[test]
    fn should_allow_any_role_on_user_operations() {
        assert!(authorize(&user_with(Role::User), Role::User).is_ok());
        assert!(authorize(&user_with(Role::Manager), Role::User).is_ok());
    }

    #[test]
    fn should_parse_roles_from_claims() {
        assert_eq!("MANAGER".parse::<Role>(), Ok(Role::Manager));
        assert_eq!("USER".parse::<Role>(), Ok(Role::User));
        assert_eq!("ADMIN".parse::<Role>(), Err(AuthError::Unauthorized));
    }
}
