//! Error types for org-user administration
//!
//! [`AdminError`] is what every service operation returns. Each variant maps
//! to one [`ErrorKind`] and one HTTP status code, so the request adapter
//! never has to interpret messages.

use serde_json::json;
use tenant_auth::AuthError;
use tenant_org::OrgId;
use thiserror::Error;

use crate::directory::DirectoryError;

/// Coarse classification of an [`AdminError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Caller lacks admin capability
    Unauthorized,
    /// Organization or user absent
    NotFound,
    /// Duplicate user or malformed input
    BadInput,
    /// Organization member quota reached
    CapacityExceeded,
    /// The target is protected from the operation (the org creator)
    Protected,
    /// Directory or internal failure
    Internal,
}

/// Org-user administration errors.
#[derive(Debug, Error)]
pub enum AdminError {
    /// Authorization failed at the gate
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// No organization with this id
    #[error("Organization {0} not found")]
    OrgNotFound(OrgId),

    /// The user is not a member of the organization
    #[error("User {email} not found in organization {org_id}")]
    UserNotFound {
        /// Organization ID
        org_id: OrgId,
        /// Email that was looked up
        email: String,
    },

    /// An account with this email already exists
    #[error("User {0} already exists")]
    UserExists(String),

    /// Request field failed validation
    #[error("Invalid argument {field}: {message}")]
    InvalidArgument {
        /// Offending field
        field: &'static str,
        /// What was wrong with it
        message: String,
    },

    /// The organization's member quota is reached
    #[error("The number of users in organization {0} exceeds the limit")]
    QuotaExceeded(OrgId),

    /// Attempt to remove the organization's creator
    #[error("Can not delete the creator of organization {org_id}")]
    CreatorProtected {
        /// Organization ID
        org_id: OrgId,
    },

    /// The directory failed
    #[error("Directory error: {0}")]
    Directory(DirectoryError),
}

/// Result type for org-user administration.
pub type AdminResult<T> = Result<T, AdminError>;

impl AdminError {
    /// Build an [`AdminError::InvalidArgument`].
    pub fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        AdminError::InvalidArgument {
            field,
            message: message.into(),
        }
    }

    /// Classify the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            AdminError::Auth(AuthError::Forbidden { .. }) => ErrorKind::Unauthorized,
            AdminError::Auth(AuthError::InvalidCredential(_)) => ErrorKind::BadInput,
            AdminError::Auth(AuthError::Internal(_)) => ErrorKind::Internal,
            AdminError::OrgNotFound(_) | AdminError::UserNotFound { .. } => ErrorKind::NotFound,
            AdminError::UserExists(_) | AdminError::InvalidArgument { .. } => ErrorKind::BadInput,
            AdminError::QuotaExceeded(_) => ErrorKind::CapacityExceeded,
            AdminError::CreatorProtected { .. } => ErrorKind::Protected,
            AdminError::Directory(DirectoryError::Conflict(_))
            | AdminError::Directory(DirectoryError::Rejected(_)) => ErrorKind::BadInput,
            AdminError::Directory(DirectoryError::NotFound(_)) => ErrorKind::NotFound,
            AdminError::Directory(DirectoryError::Unavailable(_)) => ErrorKind::Internal,
        }
    }

    /// Check if this error should be logged at error level.
    pub fn is_server_error(&self) -> bool {
        self.kind() == ErrorKind::Internal
    }

    /// Get HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        match self.kind() {
            ErrorKind::Unauthorized | ErrorKind::CapacityExceeded | ErrorKind::Protected => 403,
            ErrorKind::NotFound => 404,
            ErrorKind::BadInput => 400,
            ErrorKind::Internal => 500,
        }
    }

    /// Get error code for API responses.
    pub fn error_code(&self) -> &'static str {
        match self {
            AdminError::Auth(err) => err.error_code(),
            AdminError::OrgNotFound(_) => "ORG_NOT_FOUND",
            AdminError::UserNotFound { .. } => "USER_NOT_FOUND",
            AdminError::UserExists(_) => "USER_EXISTS",
            AdminError::InvalidArgument { .. } => "INVALID_ARGUMENT",
            AdminError::QuotaExceeded(_) => "QUOTA_EXCEEDED",
            AdminError::CreatorProtected { .. } => "CREATOR_PROTECTED",
            AdminError::Directory(DirectoryError::Conflict(_)) => "DIRECTORY_CONFLICT",
            AdminError::Directory(DirectoryError::NotFound(_)) => "DIRECTORY_NOT_FOUND",
            AdminError::Directory(DirectoryError::Rejected(_)) => "DIRECTORY_REJECTED",
            AdminError::Directory(DirectoryError::Unavailable(_)) => "DIRECTORY_UNAVAILABLE",
        }
    }

    /// JSON body for the error response.
    ///
    /// Server errors hide their message.
    pub fn error_body(&self) -> serde_json::Value {
        let message = if self.is_server_error() {
            "Internal Server Error".to_string()
        } else {
            self.to_string()
        };
        json!({
            "error_code": self.error_code(),
            "error_msg": message,
        })
    }
}

impl From<DirectoryError> for AdminError {
    fn from(err: DirectoryError) -> Self {
        AdminError::Directory(err)
    }
}
