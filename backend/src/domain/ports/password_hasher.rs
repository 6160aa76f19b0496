//! Driven port for one-way password digests.

use crate::domain::PasswordDigest;

/// Deterministic one-way password transform.
///
/// The same input must always produce the same digest, since login compares
/// digests by equality.
#[cfg_attr(test, mockall::automock)]
pub trait PasswordHasher: Send + Sync {
    /// Digest `password`.
    fn digest(&self, password: &str) -> PasswordDigest;
}
