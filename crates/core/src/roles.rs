//! Well-known role name constants.
//!
//! Job seekers live in the `users` table and always carry [`ROLE_USER`].
//! Staff live in the `admins` table with either [`ROLE_ADMIN`] or
//! [`ROLE_SUPER_ADMIN`]; the `chk_admins_role` constraint in the schema
//! must stay in sync with [`ADMIN_ROLES`].

use crate::error::CoreError;

pub const ROLE_USER: &str = "user";
pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_SUPER_ADMIN: &str = "super_admin";

/// Roles that may be assigned to a row in the `admins` table.
pub const ADMIN_ROLES: &[&str] = &[ROLE_ADMIN, ROLE_SUPER_ADMIN];

/// Whether the role grants access to the admin console.
pub fn is_admin_role(role: &str) -> bool {
    ADMIN_ROLES.contains(&role)
}

/// Validate a role name supplied when creating or updating an admin.
pub fn validate_admin_role(role: &str) -> Result<(), CoreError> {
    if is_admin_role(role) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid admin role '{role}'. Must be one of: {}",
            ADMIN_ROLES.join(", ")
        )))
    }
}

/// Which table a notification recipient or session subject lives in.
///
/// Both admin roles collapse to [`ROLE_ADMIN`] because they share a table.
pub fn principal_kind(role: &str) -> &'static str {
    if is_admin_role(role) {
        ROLE_ADMIN
    } else {
        ROLE_USER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_roles_are_recognised() {
        assert!(is_admin_role("admin"));
        assert!(is_admin_role("super_admin"));
        assert!(!is_admin_role("user"));
        assert!(!is_admin_role("Admin"));
    }

    #[test]
    fn validate_admin_role_rejects_user() {
        let err = validate_admin_role("user").unwrap_err();
        assert!(err.to_string().contains("Invalid admin role 'user'"));
    }

    #[test]
    fn principal_kind_collapses_admin_roles() {
        assert_eq!(principal_kind("super_admin"), ROLE_ADMIN);
        assert_eq!(principal_kind("admin"), ROLE_ADMIN);
        assert_eq!(principal_kind("user"), ROLE_USER);
    }
}
