//! # Tenant Organization Model
//!
//! This crate provides the domain types for administering users inside
//! tenant organizations.
//!
//! ## Overview
//!
//! The tenant-org crate handles:
//! - **Organizations**: Tenant boundaries identified by an integer id, each
//!   with exactly one creator
//! - **Org users**: The (organization, email) pairing with an active flag
//! - **Roles**: Member, staff and creator roles inside an organization
//! - **Identifiers**: Validation for emails and URL prefixes
//!
//! ## Architecture
//!
//! ```text
//! Organization (id, url_prefix, creator)
//!   └─ OrgUser (org_id, email, role, is_active)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use tenant_org::{Organization, OrgUser, OrgUserRole};
//!
//! let org = Organization::new(7, "Acme Corp", "acme", "founder@acme.io");
//! let user = OrgUser::new(org.id, "dev@acme.io", OrgUserRole::Member);
//!
//! assert!(org.is_creator("founder@acme.io"));
//! assert!(user.is_active);
//! ```

pub mod identifiers;
pub mod membership;
pub mod organization;
pub mod roles;

// Re-export main types for convenience
pub use identifiers::{is_valid_email, is_valid_url_prefix, normalize_email};
pub use membership::OrgUser;
pub use organization::{OrgId, Organization};
pub use roles::OrgUserRole;
