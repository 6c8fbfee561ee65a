//! In-memory directory implementation.
//!
//! [`MemoryDirectory`] keeps organizations, accounts and memberships in
//! maps behind a single async `RwLock`. Every mutation runs under the write
//! lock, so uniqueness checks and inserts are atomic. It is suitable for
//! tests and single-process embedding.
//!
//! Besides the [`Directory`] verbs it exposes the provisioning calls the
//! admin API does not own: creating accounts and organizations, adding an
//! existing account to an organization, and setting member quotas.

use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;
use tenant_auth::PasswordDigest;
use tenant_org::{is_valid_url_prefix, normalize_email, OrgId, OrgUser, OrgUserRole, Organization};
use tokio::sync::RwLock;

use crate::directory::{Directory, DirectoryError, DirectoryResult, NewOrgUser, OrgUserChanges};

/// A directory account.
#[derive(Debug, Clone)]
struct Account {
    email: String,
    password: PasswordDigest,
}

#[derive(Debug)]
struct State {
    next_org_id: OrgId,
    orgs: HashMap<OrgId, Organization>,
    url_prefixes: HashSet<String>,
    // Keyed by normalized email
    accounts: HashMap<String, Account>,
    // org id -> normalized email -> membership
    members: HashMap<OrgId, BTreeMap<String, OrgUser>>,
}

impl State {
    fn member_of_any_org(&self, key: &str) -> bool {
        self.members.values().any(|users| users.contains_key(key))
    }
}

impl Default for State {
    fn default() -> Self {
        Self {
            next_org_id: 1,
            orgs: HashMap::new(),
            url_prefixes: HashSet::new(),
            accounts: HashMap::new(),
            members: HashMap::new(),
        }
    }
}

/// Thread-safe in-memory directory.
#[derive(Debug, Clone, Default)]
pub struct MemoryDirectory {
    state: Arc<RwLock<State>>,
}

/// Directory counters for debugging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryDirectoryStats {
    /// Number of organizations
    pub organizations: usize,
    /// Number of accounts
    pub accounts: usize,
    /// Number of memberships across all organizations
    pub memberships: usize,
}

impl MemoryDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an account that belongs to no organization yet.
    pub async fn create_account(&self, email: &str, password: &str) -> DirectoryResult<()> {
        let password =
            PasswordDigest::derive(password).map_err(|e| DirectoryError::Rejected(e.to_string()))?;
        let key = normalize_email(email);

        let mut state = self.state.write().await;
        if state.accounts.contains_key(&key) {
            return Err(DirectoryError::Conflict(format!("account {} exists", email)));
        }
        state.accounts.insert(
            key,
            Account {
                email: email.trim().to_string(),
                password,
            },
        );
        Ok(())
    }

    /// Provision an organization. The creator must already have an account
    /// and becomes the organization's `Creator` member.
    ///
    /// # Returns
    ///
    /// The new organization's id
    pub async fn create_org(
        &self,
        name: &str,
        url_prefix: &str,
        creator: &str,
    ) -> DirectoryResult<OrgId> {
        if !is_valid_url_prefix(url_prefix) {
            return Err(DirectoryError::Rejected(format!(
                "url prefix {:?} is not URL-safe",
                url_prefix
            )));
        }

        let creator_key = normalize_email(creator);
        let mut state = self.state.write().await;

        let creator_email = match state.accounts.get(&creator_key) {
            Some(account) => account.email.clone(),
            None => return Err(DirectoryError::NotFound(format!("account {}", creator))),
        };
        if state.url_prefixes.contains(url_prefix) {
            return Err(DirectoryError::Conflict(format!(
                "url prefix {} is taken",
                url_prefix
            )));
        }

        let org_id = state.next_org_id;
        state.next_org_id += 1;

        let org = Organization::new(org_id, name, url_prefix, creator_email.clone());
        let creator_member = OrgUser::new(org_id, creator_email, OrgUserRole::Creator);

        state.url_prefixes.insert(url_prefix.to_string());
        state.orgs.insert(org_id, org);
        state
            .members
            .entry(org_id)
            .or_default()
            .insert(creator_key, creator_member);

        Ok(org_id)
    }

    /// Add an existing account to an organization.
    pub async fn add_member(
        &self,
        org_id: OrgId,
        email: &str,
        role: OrgUserRole,
    ) -> DirectoryResult<OrgUser> {
        let key = normalize_email(email);
        let mut state = self.state.write().await;

        if !state.orgs.contains_key(&org_id) {
            return Err(DirectoryError::NotFound(format!("organization {}", org_id)));
        }
        let account_email = match state.accounts.get(&key) {
            Some(account) => account.email.clone(),
            None => return Err(DirectoryError::NotFound(format!("account {}", email))),
        };

        let users = state.members.entry(org_id).or_default();
        if users.contains_key(&key) {
            return Err(DirectoryError::Conflict(format!(
                "{} is already in organization {}",
                email, org_id
            )));
        }
        let user = OrgUser::new(org_id, account_email, role);
        users.insert(key, user.clone());
        Ok(user)
    }

    /// Set or clear an organization's own member quota.
    pub async fn set_member_quota(&self, org_id: OrgId, quota: Option<u32>) -> DirectoryResult<()> {
        let mut state = self.state.write().await;
        let org = state
            .orgs
            .get_mut(&org_id)
            .ok_or_else(|| DirectoryError::NotFound(format!("organization {}", org_id)))?;
        org.member_quota = quota;
        Ok(())
    }

    /// Check `password` against the stored account credential.
    pub async fn verify_password(&self, email: &str, password: &str) -> bool {
        let state = self.state.read().await;
        state
            .accounts
            .get(&normalize_email(email))
            .map(|account| account.password.verify(password))
            .unwrap_or(false)
    }

    /// Get directory statistics.
    pub async fn stats(&self) -> MemoryDirectoryStats {
        let state = self.state.read().await;
        MemoryDirectoryStats {
            organizations: state.orgs.len(),
            accounts: state.accounts.len(),
            memberships: state.members.values().map(BTreeMap::len).sum(),
        }
    }
}

#[async_trait]
impl Directory for MemoryDirectory {
    async fn get_org(&self, org_id: OrgId) -> DirectoryResult<Option<Organization>> {
        Ok(self.state.read().await.orgs.get(&org_id).cloned())
    }

    async fn account_exists(&self, email: &str) -> DirectoryResult<bool> {
        Ok(self
            .state
            .read()
            .await
            .accounts
            .contains_key(&normalize_email(email)))
    }

    async fn get_org_user(&self, org_id: OrgId, email: &str) -> DirectoryResult<Option<OrgUser>> {
        let state = self.state.read().await;
        Ok(state
            .members
            .get(&org_id)
            .and_then(|users| users.get(&normalize_email(email)))
            .cloned())
    }

    async fn list_org_users(
        &self,
        org_id: OrgId,
        offset: usize,
        limit: usize,
    ) -> DirectoryResult<Vec<OrgUser>> {
        let state = self.state.read().await;
        Ok(state
            .members
            .get(&org_id)
            .map(|users| users.values().skip(offset).take(limit).cloned().collect())
            .unwrap_or_default())
    }

    async fn count_org_users(&self, org_id: OrgId) -> DirectoryResult<u32> {
        let state = self.state.read().await;
        let count = state.members.get(&org_id).map(BTreeMap::len).unwrap_or(0);
        u32::try_from(count).map_err(|_| DirectoryError::Unavailable("member count overflow".into()))
    }

    async fn add_org_user(&self, new_user: NewOrgUser) -> DirectoryResult<OrgUser> {
        let key = normalize_email(&new_user.email);
        let mut state = self.state.write().await;

        if !state.orgs.contains_key(&new_user.org_id) {
            return Err(DirectoryError::NotFound(format!(
                "organization {}",
                new_user.org_id
            )));
        }
        if state.accounts.contains_key(&key) {
            return Err(DirectoryError::Conflict(format!(
                "account {} exists",
                new_user.email
            )));
        }

        let email = new_user.email.trim().to_string();
        let user = OrgUser::new(new_user.org_id, email.clone(), new_user.role);
        state.accounts.insert(
            key.clone(),
            Account {
                email,
                password: new_user.password,
            },
        );
        state
            .members
            .entry(new_user.org_id)
            .or_default()
            .insert(key, user.clone());

        Ok(user)
    }

    async fn remove_org_user(&self, org_id: OrgId, email: &str) -> DirectoryResult<bool> {
        let key = normalize_email(email);
        let mut state = self.state.write().await;

        let removed = state
            .members
            .get_mut(&org_id)
            .and_then(|users| users.remove(&key))
            .is_some();

        // An account that no longer belongs anywhere goes with its last membership.
        if removed && !state.member_of_any_org(&key) {
            state.accounts.remove(&key);
        }
        Ok(removed)
    }

    async fn update_org_user(
        &self,
        org_id: OrgId,
        email: &str,
        changes: OrgUserChanges,
    ) -> DirectoryResult<OrgUser> {
        let mut state = self.state.write().await;
        let user = state
            .members
            .get_mut(&org_id)
            .and_then(|users| users.get_mut(&normalize_email(email)))
            .ok_or_else(|| {
                DirectoryError::NotFound(format!("{} in organization {}", email, org_id))
            })?;

        changes.apply_to(user);
        Ok(user.clone())
    }
}
