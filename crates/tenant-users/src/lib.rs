//! # Tenant Users
//!
//! This crate provides the org-user lifecycle service: admin-only creation,
//! listing, update and removal of users inside tenant organizations.
//!
//! ## Overview
//!
//! The tenant-users crate handles:
//! - **Directory**: The narrow async contract for the external identity
//!   store, plus an in-memory implementation
//! - **Quota**: An injectable guard bounding organization membership
//! - **Service**: Gate → organization lookup → preconditions → one
//!   directory mutation
//! - **Errors**: Every failure carries its HTTP status code
//!
//! ## Architecture
//!
//! ```text
//! request ─→ AdminGate ─→ OrgUserService ─┬─→ QuotaGuard
//!                                          └─→ Directory
//! ```
//!
//! ## Status Codes
//!
//! | Failure                         | Status |
//! |---------------------------------|--------|
//! | caller is not an admin          | 403    |
//! | organization or user missing    | 404    |
//! | duplicate user, malformed input | 400    |
//! | member quota reached            | 403    |
//! | deleting the org creator        | 403    |
//!
//! ## Configuration
//!
//! See [`AdminConfig::from_env`] for the environment variables read.

pub mod config;
pub mod directory;
pub mod error;
pub mod memory;
pub mod model;
pub mod quota;
pub mod service;

// Re-export main types
pub use config::{AdminConfig, ConfigError};
pub use directory::{Directory, DirectoryError, DirectoryResult, NewOrgUser, OrgUserChanges};
pub use error::{AdminError, AdminResult, ErrorKind};
pub use memory::{MemoryDirectory, MemoryDirectoryStats};
pub use model::{CreateOrgUser, DeleteResponse, ListQuery, OrgUserInfo, OrgUserPage, OrgUserUpdate};
pub use quota::{MemberCeilingGuard, QuotaGuard};
pub use service::OrgUserService;
