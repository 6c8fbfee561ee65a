//! The authenticated caller of the admin API

use serde::{Deserialize, Serialize};

/// The authenticated caller.
///
/// Session handling happens upstream; by the time a principal reaches the
/// admin API it only carries an identity and the admin capability bit.
///
/// # Example
///
/// ```
/// use tenant_auth::AdminPrincipal;
///
/// let admin = AdminPrincipal::admin("root@example.com");
/// assert!(admin.is_admin);
///
/// let user = AdminPrincipal::user("someone@example.com");
/// assert!(!user.is_admin);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminPrincipal {
    /// Caller email
    pub email: String,

    /// Whether the caller holds the system administrator capability
    #[serde(default)]
    pub is_admin: bool,
}

impl AdminPrincipal {
    /// Create a principal with an explicit admin bit.
    pub fn new(email: impl Into<String>, is_admin: bool) -> Self {
        Self {
            email: email.into(),
            is_admin,
        }
    }

    /// Create an administrator principal.
    pub fn admin(email: impl Into<String>) -> Self {
        Self::new(email, true)
    }

    /// Create an ordinary, non-admin principal.
    pub fn user(email: impl Into<String>) -> Self {
        Self::new(email, false)
    }
}
