//! Driven port for user record persistence.

use async_trait::async_trait;

use crate::domain::{PasswordDigest, UserProfile, UserRecord, Username};

use super::define_port_error;

define_port_error! {
    /// Errors raised by user stores.
    pub enum UserStoreError {
        /// Store connection could not be established.
        Connection { message: String } => "user store connection failed: {message}",
        /// Query failed during execution or row conversion.
        Query { message: String } => "user store query failed: {message}",
        /// Another record already holds this username.
        DuplicateUsername { username: String } => "username already taken: {username}",
    }
}

/// Port for storing and reading user records.
///
/// Implementations must reject an insert whose username is already present
/// with [`UserStoreError::DuplicateUsername`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Whether any record holds `username`.
    async fn username_exists(&self, username: &Username) -> Result<bool, UserStoreError>;

    /// Persist a new record.
    async fn insert(&self, record: &UserRecord) -> Result<(), UserStoreError>;

    /// Find the record matching both `username` and `digest` exactly.
    async fn find_by_credentials(
        &self,
        username: &str,
        digest: &PasswordDigest,
    ) -> Result<Option<UserProfile>, UserStoreError>;

    /// Return up to `limit` profiles after skipping `offset`, in insertion order.
    async fn list(&self, offset: usize, limit: usize) -> Result<Vec<UserProfile>, UserStoreError>;
}
