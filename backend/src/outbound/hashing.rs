//! SHA-256 password digests.
//!
//! Digests are unsalted so login can match by equality in the store. This
//! mirrors the existing user data and is not suitable for new deployments
//! without a migration to a salted scheme.

use sha2::{Digest, Sha256};

use crate::domain::PasswordDigest;
use crate::domain::ports::PasswordHasher;

/// Lowercase hex SHA-256 of the UTF-8 password.
#[derive(Debug, Default, Clone, Copy)]
pub struct Sha256PasswordHasher;

impl PasswordHasher for Sha256PasswordHasher {
    fn digest(&self, password: &str) -> PasswordDigest {
        PasswordDigest::new(hex::encode(Sha256::digest(password.as_bytes())))
    }
}
