//! Request and response shapes for the org-user admin API.
//!
//! Request types deserialize from the wire field names so an adapter can
//! hand a decoded form or JSON body straight to the service. Validation
//! lives here too; nothing is coerced.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tenant_org::{is_valid_email, OrgId, OrgUser, OrgUserRole};

use crate::directory::OrgUserChanges;
use crate::error::{AdminError, AdminResult};

const MAX_NAME_LEN: usize = 64;

/// Body of a create request.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrgUser {
    /// Email of the account to create
    pub email: String,
    /// Initial password
    pub password: String,
}

impl CreateOrgUser {
    /// Build a create request.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Check the email and password, returning the trimmed email.
    pub fn validate(&self) -> AdminResult<String> {
        let email = self.email.trim();
        if !is_valid_email(email) {
            return Err(AdminError::invalid("email", format!("{} is not a valid email", email)));
        }
        if self.password.is_empty() {
            return Err(AdminError::invalid("password", "password must not be empty"));
        }
        Ok(email.to_string())
    }
}

/// Body of an update request. Every field is optional, but at least one
/// must be present.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrgUserUpdate {
    /// Literal `true` or `false`
    #[serde(default)]
    pub active: Option<String>,
    /// New display name
    #[serde(default)]
    pub name: Option<String>,
    /// New contact email
    #[serde(default)]
    pub contact_email: Option<String>,
}

impl OrgUserUpdate {
    /// An update that only sets the active flag token.
    pub fn active(token: impl Into<String>) -> Self {
        Self {
            active: Some(token.into()),
            ..Self::default()
        }
    }

    /// Validate the update into directory changes.
    ///
    /// # Errors
    ///
    /// [`AdminError::InvalidArgument`] for an unrecognized `active` token, a
    /// blank or oversized name, a malformed contact email, or an update that
    /// names no field.
    pub fn into_changes(self) -> AdminResult<OrgUserChanges> {
        let active = self.active.as_deref().map(parse_active_token).transpose()?;

        let name = match self.name {
            Some(name) => {
                let name = name.trim();
                if name.is_empty() || name.chars().count() > MAX_NAME_LEN || name.contains('/') {
                    return Err(AdminError::invalid(
                        "name",
                        format!("must be 1 to {} characters without '/'", MAX_NAME_LEN),
                    ));
                }
                Some(name.to_string())
            }
            None => None,
        };

        let contact_email = match self.contact_email {
            Some(contact_email) => {
                let contact_email = contact_email.trim();
                if !is_valid_email(contact_email) {
                    return Err(AdminError::invalid(
                        "contact_email",
                        format!("{} is not a valid email", contact_email),
                    ));
                }
                Some(contact_email.to_string())
            }
            None => None,
        };

        let changes = OrgUserChanges {
            active,
            name,
            contact_email,
        };
        if changes.is_empty() {
            return Err(AdminError::invalid("active", "no field to update"));
        }
        Ok(changes)
    }
}

/// Parse the `active` token. Only the exact, case-sensitive literals
/// `true` and `false` are accepted.
///
/// # Examples
///
/// ```
/// use tenant_users::model::parse_active_token;
///
/// assert!(!parse_active_token("false").unwrap());
/// assert!(parse_active_token("fals").is_err());
/// assert!(parse_active_token("True").is_err());
/// ```
pub fn parse_active_token(token: &str) -> AdminResult<bool> {
    match token {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(AdminError::invalid(
            "active",
            format!("{:?} must be true or false", other),
        )),
    }
}

/// Paging parameters for a list request.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ListQuery {
    /// 1-based page number (default 1)
    #[serde(default)]
    pub page: Option<u32>,
    /// Page size (default from configuration)
    #[serde(default)]
    pub per_page: Option<u32>,
}

impl ListQuery {
    /// Build a query for a specific page.
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            page: Some(page),
            per_page: Some(per_page),
        }
    }
}

/// An org user as returned by the admin API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrgUserInfo {
    /// Organization ID
    pub org_id: OrgId,
    /// Account email
    pub email: String,
    /// Display name, falling back to the local part of the email
    pub name: String,
    /// Contact email, falling back to the account email
    pub contact_email: String,
    /// Whether the user is active
    pub active: bool,
    /// Role inside the organization
    pub role: OrgUserRole,
    /// Whether the user is organization staff
    pub is_org_staff: bool,
    /// When the user joined
    pub created_at: DateTime<Utc>,
}

impl From<&OrgUser> for OrgUserInfo {
    fn from(user: &OrgUser) -> Self {
        let default_name = user
            .email
            .split_once('@')
            .map(|(local, _)| local)
            .unwrap_or(user.email.as_str());

        Self {
            org_id: user.org_id,
            email: user.email.clone(),
            name: user.name.clone().unwrap_or_else(|| default_name.to_string()),
            contact_email: user
                .contact_email
                .clone()
                .unwrap_or_else(|| user.email.clone()),
            active: user.is_active,
            role: user.role,
            is_org_staff: user.role.is_staff(),
            created_at: user.created_at,
        }
    }
}

impl From<OrgUser> for OrgUserInfo {
    fn from(user: OrgUser) -> Self {
        Self::from(&user)
    }
}

/// One page of an organization's users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrgUserPage {
    /// Users on this page, ordered by email
    pub users: Vec<OrgUserInfo>,
    /// 1-based page number
    pub page: u32,
    /// Page size
    pub per_page: u32,
    /// Total users in the organization
    pub total: u32,
    /// Whether a further page exists
    pub has_next_page: bool,
}

/// Body returned by a successful delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResponse {
    /// Always `true`
    pub success: bool,
}

impl Default for DeleteResponse {
    fn default() -> Self {
        Self { success: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_active_token_is_strict() {
        assert!(parse_active_token("true").unwrap());
        assert!(!parse_active_token("false").unwrap());

        for bad in ["fals", "False", "TRUE", "0", "1", "", " true", "yes"] {
            let err = parse_active_token(bad).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::BadInput, "token {:?}", bad);
        }
    }

    #[test]
    fn test_update_from_form_fields() {
        let update: OrgUserUpdate =
            serde_json::from_value(serde_json::json!({ "active": "false" })).unwrap();
        let changes = update.into_changes().unwrap();
        assert_eq!(changes.active, Some(false));
        assert!(changes.name.is_none());
    }

    #[test]
    fn test_update_requires_a_field() {
        let err = OrgUserUpdate::default().into_changes().unwrap_err();
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn test_update_validates_profile_fields() {
        let update = OrgUserUpdate {
            name: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(update.into_changes().is_err());

        let update = OrgUserUpdate {
            name: Some("a/b".to_string()),
            ..Default::default()
        };
        assert!(update.into_changes().is_err());

        let update = OrgUserUpdate {
            contact_email: Some("nope".to_string()),
            ..Default::default()
        };
        assert!(update.into_changes().is_err());

        let update = OrgUserUpdate {
            name: Some(" Dev Ops ".to_string()),
            contact_email: Some("ops@contact.io".to_string()),
            ..Default::default()
        };
        let changes = update.into_changes().unwrap();
        assert_eq!(changes.name.as_deref(), Some("Dev Ops"));
        assert_eq!(changes.contact_email.as_deref(), Some("ops@contact.io"));
    }

    #[test]
    fn test_bad_token_fails_even_with_valid_fields() {
        let update = OrgUserUpdate {
            active: Some("fals".to_string()),
            name: Some("Dev".to_string()),
            contact_email: None,
        };
        assert!(update.into_changes().is_err());
    }

    #[test]
    fn test_create_validation() {
        assert_eq!(
            CreateOrgUser::new(" dev@acme.io ", "pw").validate().unwrap(),
            "dev@acme.io"
        );
        assert!(CreateOrgUser::new("dev", "pw").validate().is_err());
        assert!(CreateOrgUser::new("dev@acme.io", "").validate().is_err());
    }

    #[test]
    fn test_info_defaults() {
        let user = OrgUser::new(4, "dev@acme.io", OrgUserRole::Staff);
        let info = OrgUserInfo::from(&user);

        assert_eq!(info.name, "dev");
        assert_eq!(info.contact_email, "dev@acme.io");
        assert!(info.active);
        assert!(info.is_org_staff);

        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["email"], "dev@acme.io");
        assert_eq!(json["active"], true);
        assert_eq!(json["role"], "staff");
    }

    #[test]
    fn test_delete_response() {
        let json = serde_json::to_value(DeleteResponse::default()).unwrap();
        assert_eq!(json, serde_json::json!({ "success": true }));
    }
}
