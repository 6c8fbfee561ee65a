//! Admin authorization gate
//!
//! The gate wraps every admin operation. It only looks at the caller, never
//! at the request, so a non-admin is refused the same way whether or not
//! the organization, user, or payload it named is valid.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{AuthError, AuthResult};
use crate::operations::AdminOperation;
use crate::principal::AdminPrincipal;

/// Outcome of a gate check.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    /// The caller may proceed
    Permit,

    /// The caller is refused
    Deny,
}

impl Decision {
    /// Check if the decision permits the operation.
    pub fn is_permit(&self) -> bool {
        matches!(self, Decision::Permit)
    }
}

/// Admin-only authorization gate.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdminGate;

impl AdminGate {
    /// Create a new gate.
    pub fn new() -> Self {
        Self
    }

    /// Decide whether `principal` may perform `operation`.
    ///
    /// Pure: no logging, no state.
    pub fn decide(&self, principal: &AdminPrincipal, _operation: AdminOperation) -> Decision {
        if principal.is_admin {
            Decision::Permit
        } else {
            Decision::Deny
        }
    }

    /// Authorize `principal` for `operation`.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Forbidden`] when the caller is not an administrator.
    pub fn authorize(&self, principal: &AdminPrincipal, operation: AdminOperation) -> AuthResult<()> {
        match self.decide(principal, operation) {
            Decision::Permit => {
                debug!(caller = %principal.email, operation = %operation, "Admin operation permitted");
                Ok(())
            }
            Decision::Deny => {
                warn!(caller = %principal.email, operation = %operation, "Admin operation denied");
                Err(AuthError::Forbidden { operation })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_is_permitted_everything() {
        let gate = AdminGate::new();
        let admin = AdminPrincipal::admin("root@example.com");

        for op in AdminOperation::ALL {
            assert_eq!(gate.decide(&admin, op), Decision::Permit);
            assert!(gate.authorize(&admin, op).is_ok());
        }
    }

    #[test]
    fn test_non_admin_is_denied_everything() {
        let gate = AdminGate::new();
        let user = AdminPrincipal::user("someone@example.com");

        for op in AdminOperation::ALL {
            assert!(!gate.decide(&user, op).is_permit());
            assert_eq!(
                gate.authorize(&user, op),
                Err(AuthError::Forbidden { operation: op })
            );
        }
    }
}
