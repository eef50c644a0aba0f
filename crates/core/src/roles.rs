//! Well-known role name constants.
//!
//! These must match the CHECK constraint on `users.role` in the
//! `create_users_table` migration.

use crate::error::CoreError;

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_AGENT: &str = "agent";
pub const ROLE_CUSTOMER: &str = "customer";

/// All valid user roles.
pub const VALID_ROLES: &[&str] = &[ROLE_ADMIN, ROLE_AGENT, ROLE_CUSTOMER];

/// Roles an administrator may assign when creating staff accounts.
///
/// Customer accounts are provisioned through a separate sign-up flow and
/// cannot be created via the admin endpoint.
pub const STAFF_ROLES: &[&str] = &[ROLE_ADMIN, ROLE_AGENT];

/// Validate that a role string is one of the known roles.
pub fn validate_role(role: &str) -> Result<(), CoreError> {
    if VALID_ROLES.contains(&role) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid role '{}'. Must be one of: {:?}",
            role, VALID_ROLES
        )))
    }
}

/// Validate that a role may be assigned by the admin user-creation endpoint.
pub fn validate_staff_role(role: &str) -> Result<(), CoreError> {
    if STAFF_ROLES.contains(&role) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid account type '{}'. Must be one of: {:?}",
            role, STAFF_ROLES
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_roles_are_valid() {
        for r in VALID_ROLES {
            assert!(validate_role(r).is_ok(), "role '{r}' should be valid");
        }
    }

    #[test]
    fn unknown_role_is_invalid() {
        assert!(validate_role("superuser").is_err());
        assert!(validate_role("").is_err());
    }

    #[test]
    fn customer_is_not_a_staff_role() {
        assert!(validate_staff_role(ROLE_ADMIN).is_ok());
        assert!(validate_staff_role(ROLE_AGENT).is_ok());
        assert!(validate_staff_role(ROLE_CUSTOMER).is_err());
    }
}
