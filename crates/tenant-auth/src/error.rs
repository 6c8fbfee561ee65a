//! Error types for authorization and credential handling

use thiserror::Error;

use crate::operations::AdminOperation;

/// Authorization error types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Caller lacks the admin capability required for the operation
    #[error("Forbidden: {operation} requires administrator privileges")]
    Forbidden {
        /// The operation that was refused
        operation: AdminOperation,
    },

    /// A credential could not be accepted (e.g. an empty password)
    #[error("Invalid credential: {0}")]
    InvalidCredential(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type for authorization operations.
pub type AuthResult<T> = Result<T, AuthError>;

impl AuthError {
    /// Check if this error should be logged at error level.
    pub fn is_server_error(&self) -> bool {
        matches!(self, AuthError::Internal(_))
    }

    /// Get HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            AuthError::Forbidden { .. } => 403,
            AuthError::InvalidCredential(_) => 400,
            AuthError::Internal(_) => 500,
        }
    }

    /// Get error code for API responses.
    pub fn error_code(&self) -> &'static str {
        match self {
            AuthError::Forbidden { .. } => "FORBIDDEN",
            AuthError::InvalidCredential(_) => "INVALID_CREDENTIAL",
            AuthError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let forbidden = AuthError::Forbidden {
            operation: AdminOperation::CreateOrgUser,
        };
        assert_eq!(forbidden.status_code(), 403);
        assert_eq!(forbidden.error_code(), "FORBIDDEN");
        assert!(!forbidden.is_server_error());

        assert_eq!(AuthError::InvalidCredential("empty".into()).status_code(), 400);
        assert!(AuthError::Internal("boom".into()).is_server_error());
    }

    #[test]
    fn test_forbidden_message_names_operation() {
        let err = AuthError::Forbidden {
            operation: AdminOperation::DeleteOrgUser,
        };
        assert_eq!(
            err.to_string(),
            "Forbidden: org_user:delete requires administrator privileges"
        );
    }
}
