//! # Tenant Authorization
//!
//! This crate provides the caller-facing half of tenant administration:
//! who is calling, what they may do, and how new account credentials are
//! stored.
//!
//! ## Overview
//!
//! The tenant-auth crate handles:
//! - **Principals**: The authenticated caller and its admin capability
//! - **Operations**: The admin operations the gate decides on
//! - **Gate**: A uniform admin-only authorization check, evaluated before
//!   any resource lookup or input validation
//! - **Credentials**: Argon2id password hashes for accounts created by admins
//!
//! ## Usage
//!
//! ```rust
//! use tenant_auth::{AdminGate, AdminOperation, AdminPrincipal, Decision};
//!
//! let gate = AdminGate::new();
//!
//! let admin = AdminPrincipal::admin("root@example.com");
//! assert_eq!(gate.decide(&admin, AdminOperation::CreateOrgUser), Decision::Permit);
//!
//! let user = AdminPrincipal::user("someone@example.com");
//! assert!(gate.authorize(&user, AdminOperation::DeleteOrgUser).is_err());
//! ```

pub mod error;
pub mod gate;
pub mod operations;
pub mod password;
pub mod principal;

// Re-export main types
pub use error::{AuthError, AuthResult};
pub use gate::{AdminGate, Decision};
pub use operations::AdminOperation;
pub use password::PasswordDigest;
pub use principal::AdminPrincipal;
