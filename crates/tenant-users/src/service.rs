//! Org-user lifecycle service
//!
//! [`OrgUserService`] orchestrates create, list, get, update and delete of
//! users inside an organization. Every operation runs the admin gate first,
//! then checks that the organization exists, then applies its own
//! preconditions before making at most one mutating directory call.

use std::sync::Arc;
use tenant_auth::{AdminGate, AdminOperation, AdminPrincipal, PasswordDigest};
use tenant_org::{OrgId, OrgUser, OrgUserRole, Organization};
use tracing::{error, info, instrument, warn};

use crate::config::{AdminConfig, ConfigError};
use crate::directory::{Directory, NewOrgUser};
use crate::error::{AdminError, AdminResult};
use crate::model::{
    CreateOrgUser, DeleteResponse, ListQuery, OrgUserInfo, OrgUserPage, OrgUserUpdate,
};
use crate::quota::{MemberCeilingGuard, QuotaGuard};

/// Org-user lifecycle service.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use tenant_auth::AdminPrincipal;
/// use tenant_users::{AdminConfig, CreateOrgUser, MemoryDirectory, OrgUserService};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let directory = MemoryDirectory::new();
/// directory.create_account("founder@acme.io", "pw").await?;
/// let org_id = directory.create_org("Acme", "acme", "founder@acme.io").await?;
///
/// let service = OrgUserService::new(Arc::new(directory), AdminConfig::default())?;
/// let admin = AdminPrincipal::admin("root@example.com");
///
/// let user = service
///     .create(&admin, org_id, CreateOrgUser::new("dev@acme.io", "s3cret"))
///     .await?;
/// assert!(user.active);
/// # Ok(())
/// # }
/// ```
pub struct OrgUserService {
    directory: Arc<dyn Directory>,
    quota: Arc<dyn QuotaGuard>,
    gate: AdminGate,
    config: AdminConfig,
}

impl std::fmt::Debug for OrgUserService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrgUserService")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl OrgUserService {
    /// Create a service that enforces member quotas with
    /// [`MemberCeilingGuard`] over the same directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `config` fails [`AdminConfig::validate`].
    pub fn new(directory: Arc<dyn Directory>, config: AdminConfig) -> Result<Self, ConfigError> {
        let quota = Arc::new(MemberCeilingGuard::new(
            directory.clone(),
            config.default_member_quota,
        ));
        Self::with_quota_guard(directory, quota, config)
    }

    /// Create a service with an explicit quota guard.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `config` fails [`AdminConfig::validate`].
    pub fn with_quota_guard(
        directory: Arc<dyn Directory>,
        quota: Arc<dyn QuotaGuard>,
        config: AdminConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            directory,
            quota,
            gate: AdminGate::new(),
            config,
        })
    }

    /// The active configuration.
    pub fn config(&self) -> &AdminConfig {
        &self.config
    }

    /// Create a user inside an organization.
    ///
    /// # Errors
    ///
    /// - 403 if the caller is not an admin
    /// - 404 if the organization does not exist
    /// - 400 for a malformed email or empty password
    /// - 403 if the organization's member quota is reached
    /// - 400 if an account with this email already exists
    #[instrument(skip(self, principal, request), fields(caller = %principal.email))]
    pub async fn create(
        &self,
        principal: &AdminPrincipal,
        org_id: OrgId,
        request: CreateOrgUser,
    ) -> AdminResult<OrgUserInfo> {
        self.gate.authorize(principal, AdminOperation::CreateOrgUser)?;
        self.require_org(org_id).await?;

        let email = request.validate()?;

        if self.quota.over_limit(org_id).await.map_err(log_directory_error)? {
            warn!(org_id, "Organization member quota reached");
            return Err(AdminError::QuotaExceeded(org_id));
        }

        if self
            .directory
            .account_exists(&email)
            .await
            .map_err(log_directory_error)?
        {
            return Err(AdminError::UserExists(email));
        }

        let password = PasswordDigest::derive(&request.password)?;
        let user = self
            .directory
            .add_org_user(NewOrgUser {
                org_id,
                email,
                password,
                role: OrgUserRole::Member,
            })
            .await
            .map_err(log_directory_error)?;

        info!(org_id, email = %user.email, "Created org user");
        Ok(OrgUserInfo::from(user))
    }

    /// List an organization's users, one page at a time.
    ///
    /// # Errors
    ///
    /// - 403 if the caller is not an admin
    /// - 404 if the organization does not exist
    /// - 400 for a zero page, zero page size, or a page size over the maximum
    #[instrument(skip(self, principal), fields(caller = %principal.email))]
    pub async fn list(
        &self,
        principal: &AdminPrincipal,
        org_id: OrgId,
        query: ListQuery,
    ) -> AdminResult<OrgUserPage> {
        self.gate.authorize(principal, AdminOperation::ListOrgUsers)?;
        self.require_org(org_id).await?;

        let page = query.page.unwrap_or(1);
        let per_page = query.per_page.unwrap_or(self.config.default_per_page);
        if page == 0 {
            return Err(AdminError::invalid("page", "must be at least 1"));
        }
        if per_page == 0 || per_page > self.config.max_per_page {
            return Err(AdminError::invalid(
                "per_page",
                format!("must be between 1 and {}", self.config.max_per_page),
            ));
        }

        let offset = (page as usize - 1)
            .checked_mul(per_page as usize)
            .ok_or_else(|| AdminError::invalid("page", "page is out of range"))?;
        let total = self
            .directory
            .count_org_users(org_id)
            .await
            .map_err(log_directory_error)?;
        let users = self
            .directory
            .list_org_users(org_id, offset, per_page as usize)
            .await
            .map_err(log_directory_error)?;

        Ok(OrgUserPage {
            users: users.iter().map(OrgUserInfo::from).collect(),
            page,
            per_page,
            total,
            has_next_page: offset.saturating_add(users.len()) < total as usize,
        })
    }

    /// Get a single org user.
    ///
    /// # Errors
    ///
    /// - 403 if the caller is not an admin
    /// - 404 if the organization or user does not exist
    #[instrument(skip(self, principal), fields(caller = %principal.email))]
    pub async fn get(
        &self,
        principal: &AdminPrincipal,
        org_id: OrgId,
        email: &str,
    ) -> AdminResult<OrgUserInfo> {
        self.gate.authorize(principal, AdminOperation::GetOrgUser)?;
        self.require_org(org_id).await?;
        let user = self.require_org_user(org_id, email).await?;
        Ok(OrgUserInfo::from(user))
    }

    /// Update a user's active flag or profile fields.
    ///
    /// # Errors
    ///
    /// - 403 if the caller is not an admin
    /// - 404 if the organization or user does not exist
    /// - 400 if `active` is not exactly `true` or `false`, or another field
    ///   is malformed; nothing is stored in that case
    #[instrument(skip(self, principal, update), fields(caller = %principal.email))]
    pub async fn update(
        &self,
        principal: &AdminPrincipal,
        org_id: OrgId,
        email: &str,
        update: OrgUserUpdate,
    ) -> AdminResult<OrgUserInfo> {
        self.gate.authorize(principal, AdminOperation::UpdateOrgUser)?;
        self.require_org(org_id).await?;
        let user = self.require_org_user(org_id, email).await?;

        let changes = update.into_changes()?;
        let updated = self
            .directory
            .update_org_user(org_id, &user.email, changes)
            .await
            .map_err(log_directory_error)?;

        info!(org_id, email = %updated.email, active = updated.is_active, "Updated org user");
        Ok(OrgUserInfo::from(updated))
    }

    /// Remove a user from an organization.
    ///
    /// # Errors
    ///
    /// - 403 if the caller is not an admin
    /// - 404 if the organization or user does not exist
    /// - 403 if the user is the organization's creator
    #[instrument(skip(self, principal), fields(caller = %principal.email))]
    pub async fn delete(
        &self,
        principal: &AdminPrincipal,
        org_id: OrgId,
        email: &str,
    ) -> AdminResult<DeleteResponse> {
        self.gate.authorize(principal, AdminOperation::DeleteOrgUser)?;
        let org = self.require_org(org_id).await?;
        let user = self.require_org_user(org_id, email).await?;

        if org.is_creator(&user.email) || !user.role.is_removable() {
            warn!(org_id, email = %user.email, "Refused to delete organization creator");
            return Err(AdminError::CreatorProtected { org_id });
        }

        let removed = self
            .directory
            .remove_org_user(org_id, &user.email)
            .await
            .map_err(log_directory_error)?;
        if !removed {
            // Lost a race with a concurrent delete.
            return Err(AdminError::UserNotFound {
                org_id,
                email: user.email,
            });
        }

        info!(org_id, email = %user.email, "Deleted org user");
        Ok(DeleteResponse::default())
    }

    async fn require_org(&self, org_id: OrgId) -> AdminResult<Organization> {
        self.directory
            .get_org(org_id)
            .await
            .map_err(log_directory_error)?
            .ok_or(AdminError::OrgNotFound(org_id))
    }

    async fn require_org_user(&self, org_id: OrgId, email: &str) -> AdminResult<OrgUser> {
        self.directory
            .get_org_user(org_id, email.trim())
            .await
            .map_err(log_directory_error)?
            .ok_or_else(|| AdminError::UserNotFound {
                org_id,
                email: email.trim().to_string(),
            })
    }
}

fn log_directory_error(err: crate::directory::DirectoryError) -> AdminError {
    let err = AdminError::from(err);
    if err.is_server_error() {
        error!(error = %err, "Directory call failed");
    }
    err
}
