//! Directory service contract
//!
//! The directory is the system of record for organizations, accounts and
//! org memberships. The lifecycle service only talks to it through the
//! [`Directory`] trait, so deployments plug in their identity store and
//! tests plug in [`MemoryDirectory`](crate::memory::MemoryDirectory).

use async_trait::async_trait;
use tenant_auth::PasswordDigest;
use tenant_org::{OrgId, OrgUser, OrgUserRole, Organization};
use thiserror::Error;

/// Directory error types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    /// The record would violate a uniqueness constraint
    #[error("Conflict: {0}")]
    Conflict(String),

    /// A record the mutation depends on is missing
    #[error("Not found: {0}")]
    NotFound(String),

    /// The directory refused the record as malformed
    #[error("Rejected: {0}")]
    Rejected(String),

    /// The directory could not be reached or failed internally
    #[error("Directory unavailable: {0}")]
    Unavailable(String),
}

/// Result type for directory operations.
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// A user to create inside an organization, together with its account.
#[derive(Debug, Clone)]
pub struct NewOrgUser {
    /// Organization to join
    pub org_id: OrgId,
    /// Account email
    pub email: String,
    /// Digest of the initial password
    pub password: PasswordDigest,
    /// Role inside the organization
    pub role: OrgUserRole,
}

/// Field changes for an existing org user. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrgUserChanges {
    /// New active flag
    pub active: Option<bool>,
    /// New display name
    pub name: Option<String>,
    /// New contact email
    pub contact_email: Option<String>,
}

impl OrgUserChanges {
    /// Check if no field would change.
    pub fn is_empty(&self) -> bool {
        self.active.is_none() && self.name.is_none() && self.contact_email.is_none()
    }

    /// Apply the changes to `user`, bumping its modification time.
    pub fn apply_to(&self, user: &mut OrgUser) {
        if let Some(active) = self.active {
            user.set_active(active);
        }
        if let Some(name) = &self.name {
            user.name = Some(name.clone());
        }
        if let Some(contact_email) = &self.contact_email {
            user.contact_email = Some(contact_email.clone());
        }
        user.touch();
    }
}

/// Directory verbs used by the org-user lifecycle service.
///
/// Emails are matched case-insensitively. Each mutating call is atomic on
/// its own; the service never needs two mutations to commit together.
#[async_trait]
pub trait Directory: Send + Sync {
    /// Look up an organization.
    async fn get_org(&self, org_id: OrgId) -> DirectoryResult<Option<Organization>>;

    /// Check whether an account exists for `email`, in any organization.
    async fn account_exists(&self, email: &str) -> DirectoryResult<bool>;

    /// Look up a user's membership in an organization.
    async fn get_org_user(&self, org_id: OrgId, email: &str) -> DirectoryResult<Option<OrgUser>>;

    /// List an organization's users ordered by email.
    async fn list_org_users(
        &self,
        org_id: OrgId,
        offset: usize,
        limit: usize,
    ) -> DirectoryResult<Vec<OrgUser>>;

    /// Count an organization's users.
    async fn count_org_users(&self, org_id: OrgId) -> DirectoryResult<u32>;

    /// Create an account and add it to an organization.
    ///
    /// Fails with [`DirectoryError::Conflict`] if the account exists and
    /// [`DirectoryError::NotFound`] if the organization does not.
    async fn add_org_user(&self, new_user: NewOrgUser) -> DirectoryResult<OrgUser>;

    /// Remove a user from an organization.
    ///
    /// # Returns
    ///
    /// `true` if a membership was removed
    async fn remove_org_user(&self, org_id: OrgId, email: &str) -> DirectoryResult<bool>;

    /// Apply changes to an org user and return the stored result.
    async fn update_org_user(
        &self,
        org_id: OrgId,
        email: &str,
        changes: OrgUserChanges,
    ) -> DirectoryResult<OrgUser>;
}
