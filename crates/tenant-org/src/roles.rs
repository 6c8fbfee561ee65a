//! Roles of a user inside an organization

use serde::{Deserialize, Serialize};

/// User role within an organization.
///
/// The hierarchy is: Member < Staff < Creator
///
/// - **Member**: Ordinary user of the organization
/// - **Staff**: Organization-level administrator
/// - **Creator**: The user who provisioned the organization; cannot be removed
///
/// # Examples
///
/// ```
/// use tenant_org::OrgUserRole;
///
/// assert!(OrgUserRole::Member.is_removable());
/// assert!(!OrgUserRole::Creator.is_removable());
/// assert!(OrgUserRole::Staff.is_staff());
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum OrgUserRole {
    /// Ordinary member
    Member = 0,

    /// Organization staff
    Staff = 1,

    /// Organization creator
    Creator = 2,
}

impl OrgUserRole {
    /// Check if this role carries organization staff privileges.
    ///
    /// # Returns
    ///
    /// `true` for Staff and Creator roles
    pub fn is_staff(&self) -> bool {
        *self >= OrgUserRole::Staff
    }

    /// Check if a user with this role may be removed from the organization.
    pub fn is_removable(&self) -> bool {
        *self != OrgUserRole::Creator
    }

    /// Get string representation of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Member => "member",
            Self::Staff => "staff",
            Self::Creator => "creator",
        }
    }
}

impl Default for OrgUserRole {
    fn default() -> Self {
        Self::Member
    }
}
