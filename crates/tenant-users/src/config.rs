//! Service configuration for org-user administration.
//!
//! Configuration is loaded from environment variables with defaults
//! suitable for local development.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue {
        /// Configuration key.
        key: String,
        /// Error message.
        message: String,
    },
}

/// Org-user administration settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminConfig {
    /// Member ceiling for organizations without their own quota (None = unlimited).
    pub default_member_quota: Option<u32>,

    /// Page size used when a list request does not specify one.
    pub default_per_page: u32,

    /// Largest page size a list request may ask for.
    pub max_per_page: u32,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            default_member_quota: None,
            default_per_page: 25,
            max_per_page: 100,
        }
    }
}

impl AdminConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `ORG_MEMBER_QUOTA_DEFAULT`: Default member ceiling (default: unlimited)
    /// - `ORG_USERS_PER_PAGE`: Default list page size (default: 25)
    /// - `ORG_USERS_MAX_PER_PAGE`: Maximum list page size (default: 100)
    ///
    /// Unparseable values fall back to the default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let default = Self::default();

        Self {
            default_member_quota: lookup("ORG_MEMBER_QUOTA_DEFAULT")
                .and_then(|s| s.trim().parse().ok())
                .or(default.default_member_quota),
            default_per_page: lookup("ORG_USERS_PER_PAGE")
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(default.default_per_page),
            max_per_page: lookup("ORG_USERS_MAX_PER_PAGE")
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(default.max_per_page),
        }
    }

    /// Set the default member quota.
    pub fn with_default_member_quota(mut self, quota: u32) -> Self {
        self.default_member_quota = Some(quota);
        self
    }

    /// Check that the values are usable together.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_member_quota == Some(0) {
            return Err(ConfigError::InvalidValue {
                key: "ORG_MEMBER_QUOTA_DEFAULT".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.max_per_page == 0 {
            return Err(ConfigError::InvalidValue {
                key: "ORG_USERS_MAX_PER_PAGE".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.default_per_page == 0 || self.default_per_page > self.max_per_page {
            return Err(ConfigError::InvalidValue {
                key: "ORG_USERS_PER_PAGE".to_string(),
                message: format!("must be between 1 and {}", self.max_per_page),
            });
        }
        Ok(())
    }
}
