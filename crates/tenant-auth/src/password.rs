//! Password hashing for accounts created through the admin API
//!
//! The admin API never hands a plaintext password to the directory. It
//! hashes it with Argon2id and stores the PHC string
//! (`$argon2id$v=19$m=...,t=...,p=...$<salt>$<hash>`) instead.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::{Algorithm, Argon2};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{AuthError, AuthResult};

/// An Argon2id password hash in PHC string form.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PasswordDigest {
    phc: String,
}

impl PasswordDigest {
    /// Hash `password` with Argon2id and a fresh random salt.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredential`] for an empty password and
    /// [`AuthError::Internal`] if hashing fails.
    ///
    /// # Example
    ///
    /// ```
    /// use tenant_auth::PasswordDigest;
    ///
    /// let digest = PasswordDigest::derive("s3cret").unwrap();
    /// assert!(digest.as_str().starts_with("$argon2id$"));
    /// assert!(digest.verify("s3cret"));
    /// assert!(!digest.verify("guess"));
    /// ```
    pub fn derive(password: &str) -> AuthResult<Self> {
        if password.is_empty() {
            return Err(AuthError::InvalidCredential("password must not be empty".to_string()));
        }

        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AuthError::Internal(format!("password hashing failed: {e}")))?;

        Ok(Self {
            phc: hash.to_string(),
        })
    }

    /// Check `password` against this hash.
    pub fn verify(&self, password: &str) -> bool {
        let Ok(hash) = PasswordHash::new(&self.phc) else {
            return false;
        };
        Argon2::default()
            .verify_password(password.as_bytes(), &hash)
            .is_ok()
    }

    /// Parse a stored PHC string. Only Argon2id hashes are accepted.
    pub fn parse(encoded: &str) -> AuthResult<Self> {
        let hash = PasswordHash::new(encoded)
            .map_err(|e| AuthError::InvalidCredential(format!("malformed password hash: {e}")))?;

        if hash.algorithm != Algorithm::Argon2id.ident() || hash.hash.is_none() {
            return Err(AuthError::InvalidCredential(
                "password hash is not an argon2id hash".to_string(),
            ));
        }

        Ok(Self {
            phc: encoded.to_string(),
        })
    }

    /// The PHC string.
    pub fn as_str(&self) -> &str {
        &self.phc
    }
}

impl fmt::Display for PasswordDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.phc)
    }
}

// Keeps hashes out of debug logs.
impl fmt::Debug for PasswordDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordDigest").finish_non_exhaustive()
    }
}

impl From<PasswordDigest> for String {
    fn from(digest: PasswordDigest) -> Self {
        digest.phc
    }
}

impl TryFrom<String> for PasswordDigest {
    type Error = AuthError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}
