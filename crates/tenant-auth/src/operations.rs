//! # Operations
//!
//! The admin operations that pass through the authorization gate.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Operations exposed by the org-user admin API.
///
/// Every operation is admin-only; the variant exists so denials and logs
/// can name what was attempted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AdminOperation {
    /// Create a user inside an organization
    CreateOrgUser,

    /// List the users of an organization
    ListOrgUsers,

    /// Read a single org user
    GetOrgUser,

    /// Change an org user's active flag or profile fields
    UpdateOrgUser,

    /// Remove a user from an organization
    DeleteOrgUser,
}

impl AdminOperation {
    /// All operations, in declaration order.
    pub const ALL: [AdminOperation; 5] = [
        AdminOperation::CreateOrgUser,
        AdminOperation::ListOrgUsers,
        AdminOperation::GetOrgUser,
        AdminOperation::UpdateOrgUser,
        AdminOperation::DeleteOrgUser,
    ];

    /// Get the `resource:action` form used in logs and error messages.
    ///
    /// # Examples
    ///
    /// ```
    /// use tenant_auth::AdminOperation;
    ///
    /// assert_eq!(AdminOperation::UpdateOrgUser.as_str(), "org_user:update");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            AdminOperation::CreateOrgUser => "org_user:create",
            AdminOperation::ListOrgUsers => "org_user:list",
            AdminOperation::GetOrgUser => "org_user:read",
            AdminOperation::UpdateOrgUser => "org_user:update",
            AdminOperation::DeleteOrgUser => "org_user:delete",
        }
    }
}

impl fmt::Display for AdminOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
