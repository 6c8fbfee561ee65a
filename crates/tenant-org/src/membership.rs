//! Org user domain model
//!
//! An [`OrgUser`] links a user (by email) to an organization. The pair is
//! unique inside the directory, and the record cannot outlive its
//! organization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::organization::OrgId;
use crate::roles::OrgUserRole;

/// A user's membership in an organization.
///
/// # Examples
///
/// ```
/// use tenant_org::{OrgUser, OrgUserRole};
///
/// let user = OrgUser::new(3, "dev@acme.io", OrgUserRole::Member);
/// assert!(user.is_active);
/// assert_eq!(user.org_id, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrgUser {
    /// Unique record ID
    pub id: Uuid,

    /// Organization ID
    pub org_id: OrgId,

    /// User email (the identifier within the directory)
    pub email: String,

    /// Role within the organization
    pub role: OrgUserRole,

    /// Whether the user may sign in to the organization
    pub is_active: bool,

    /// Display name within the organization
    pub name: Option<String>,

    /// Address used for notifications, if different from `email`
    pub contact_email: Option<String>,

    /// When the user joined
    pub created_at: DateTime<Utc>,

    /// When the record was last changed
    pub updated_at: DateTime<Utc>,
}

impl OrgUser {
    /// Creates a new, active org user.
    ///
    /// # Arguments
    ///
    /// * `org_id` - The organization ID
    /// * `email` - The user's email
    /// * `role` - The user's role in the organization
    pub fn new(org_id: OrgId, email: impl Into<String>, role: OrgUserRole) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            org_id,
            email: email.into(),
            role,
            is_active: true,
            name: None,
            contact_email: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Change the active flag, bumping `updated_at` when it actually changes.
    ///
    /// # Returns
    ///
    /// `true` if the stored flag changed
    pub fn set_active(&mut self, active: bool) -> bool {
        if self.is_active == active {
            return false;
        }
        self.is_active = active;
        self.touch();
        true
    }

    /// Mark the record as modified now.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
