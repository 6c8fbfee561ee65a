//! Organization domain model
//!
//! Organizations are the tenant boundaries. They are provisioned outside of
//! the admin API and only ever referenced by it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Integer identifier of an organization.
pub type OrgId = i64;

/// An organization groups users under a single creator.
///
/// # Examples
///
/// ```
/// use tenant_org::Organization;
///
/// let org = Organization::new(1, "Acme Corp", "acme", "founder@acme.io");
/// assert_eq!(org.name, "Acme Corp");
/// assert!(org.member_quota.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    /// Unique identifier for the organization
    pub id: OrgId,

    /// Human-readable name
    pub name: String,

    /// URL-safe prefix (unique across the directory)
    pub url_prefix: String,

    /// Email of the user who provisioned the organization
    pub creator: String,

    /// Member ceiling for this organization, overriding the configured default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_quota: Option<u32>,

    /// When the organization was created
    pub created_at: DateTime<Utc>,
}

impl Organization {
    /// Creates a new organization without its own member quota.
    ///
    /// # Arguments
    ///
    /// * `id` - The organization id assigned by the directory
    /// * `name` - Display name
    /// * `url_prefix` - URL-safe prefix
    /// * `creator` - Email of the creating user
    pub fn new(
        id: OrgId,
        name: impl Into<String>,
        url_prefix: impl Into<String>,
        creator: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            url_prefix: url_prefix.into(),
            creator: creator.into(),
            member_quota: None,
            created_at: Utc::now(),
        }
    }

    /// Check whether `email` is the organization's creator.
    ///
    /// Emails are compared case-insensitively.
    pub fn is_creator(&self, email: &str) -> bool {
        self.creator.eq_ignore_ascii_case(email.trim())
    }

    /// Resolve the member ceiling, preferring the organization's own quota.
    ///
    /// # Returns
    ///
    /// The ceiling to enforce, or `None` when membership is unbounded
    ///
    /// # Examples
    ///
    /// ```
    /// use tenant_org::Organization;
    ///
    /// let mut org = Organization::new(1, "Acme", "acme", "founder@acme.io");
    /// assert_eq!(org.member_ceiling(Some(50)), Some(50));
    ///
    /// org.member_quota = Some(5);
    /// assert_eq!(org.member_ceiling(Some(50)), Some(5));
    /// ```
    pub fn member_ceiling(&self, default: Option<u32>) -> Option<u32> {
        self.member_quota.or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_organization_creation() {
        let org = Organization::new(42, "Acme Corp", "acme-corp", "founder@acme.io");

        assert_eq!(org.id, 42);
        assert_eq!(org.name, "Acme Corp");
        assert_eq!(org.url_prefix, "acme-corp");
        assert_eq!(org.creator, "founder@acme.io");
        assert!(org.member_quota.is_none());
    }

    #[test]
    fn test_is_creator_ignores_case() {
        let org = Organization::new(1, "Acme", "acme", "Founder@Acme.io");

        assert!(org.is_creator("founder@acme.io"));
        assert!(org.is_creator(" FOUNDER@ACME.IO "));
        assert!(!org.is_creator("someone@acme.io"));
    }

    #[test]
    fn test_member_ceiling() {
        let mut org = Organization::new(1, "Acme", "acme", "founder@acme.io");
        assert_eq!(org.member_ceiling(None), None);
        assert_eq!(org.member_ceiling(Some(10)), Some(10));

        org.member_quota = Some(3);
        assert_eq!(org.member_ceiling(None), Some(3));
        assert_eq!(org.member_ceiling(Some(10)), Some(3));
    }

    #[test]
    fn test_member_quota_omitted_when_unset() {
        let org = Organization::new(1, "Acme", "acme", "founder@acme.io");
        let json = serde_json::to_value(&org).unwrap();

        assert!(json.get("member_quota").is_none());
        assert_eq!(json["url_prefix"], "acme");
    }
}
