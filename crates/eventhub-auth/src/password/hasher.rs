//! Salted SHA-256 password hashing and verification.
//!
//! The digest is `SHA-256(password ‖ salt)` rendered as lowercase hex, with
//! one salt for the whole process. Stored hashes depend on this exact
//! construction, so it must not change without a migration.

use std::fmt;

use sha2::{Digest, Sha256};

/// Handles password hashing and verification.
#[derive(Clone)]
pub struct PasswordHasher {
    salt: String,
}

impl fmt::Debug for PasswordHasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordHasher").finish_non_exhaustive()
    }
}

impl PasswordHasher {
    /// Creates a hasher using the process-wide salt.
    pub fn new(salt: impl Into<String>) -> Self {
        Self { salt: salt.into() }
    }

    /// Hashes a plaintext password.
    pub fn hash_password(&self, password: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(password.as_bytes());
        hasher.update(self.salt.as_bytes());
        hex::encode(hasher.finalize())
    }

    /// Verifies a plaintext password against a stored hash.
    pub fn verify_password(&self, password: &str, hash: &str) -> bool {
        self.hash_password(password) == hash
    }
}
