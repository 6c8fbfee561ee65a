//! Member quota guard
//!
//! The guard answers one question, "has this organization reached its
//! member ceiling?", and is injected into the lifecycle service as a trait
//! object so callers can substitute their own policy.

use async_trait::async_trait;
use std::sync::Arc;
use tenant_org::OrgId;
use tracing::debug;

use crate::directory::{Directory, DirectoryError, DirectoryResult};

/// Capacity check for organization membership.
#[async_trait]
pub trait QuotaGuard: Send + Sync {
    /// Report whether `org_id` has reached its member ceiling.
    ///
    /// Must not modify any state.
    async fn over_limit(&self, org_id: OrgId) -> DirectoryResult<bool>;
}

/// Compares the directory's member count with a ceiling.
///
/// The ceiling is the organization's own `member_quota` when set, else the
/// configured default. Without either, membership is unbounded.
pub struct MemberCeilingGuard {
    directory: Arc<dyn Directory>,
    default_ceiling: Option<u32>,
}

impl std::fmt::Debug for MemberCeilingGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemberCeilingGuard")
            .field("default_ceiling", &self.default_ceiling)
            .finish()
    }
}

impl MemberCeilingGuard {
    /// Create a guard over `directory` with an optional default ceiling.
    pub fn new(directory: Arc<dyn Directory>, default_ceiling: Option<u32>) -> Self {
        Self {
            directory,
            default_ceiling,
        }
    }
}

#[async_trait]
impl QuotaGuard for MemberCeilingGuard {
    async fn over_limit(&self, org_id: OrgId) -> DirectoryResult<bool> {
        let org = self
            .directory
            .get_org(org_id)
            .await?
            .ok_or_else(|| DirectoryError::NotFound(format!("organization {}", org_id)))?;

        let Some(ceiling) = org.member_ceiling(self.default_ceiling) else {
            return Ok(false);
        };

        let count = self.directory.count_org_users(org_id).await?;
        debug!(org_id, count, ceiling, "Checked organization member quota");
        Ok(count >= ceiling)
    }
}
