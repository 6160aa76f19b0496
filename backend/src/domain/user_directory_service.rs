//! User directory service.
//!
//! Registration allocates a username, digests the password and inserts the
//! record. A concurrent registration can claim the allocated username between
//! the probe and the insert; the store rejects the loser with
//! `DuplicateUsername` and allocation runs again.

use std::sync::Arc;

use async_trait::async_trait;
use pagination::{PageRequest, Paginated};
use tracing::{debug, error};

use crate::domain::ports::{PasswordHasher, UserDirectory, UserStore, UserStoreError};
use crate::domain::{
    Error, LoginCredentials, Registration, UserProfile, UserRecord, UsernameAllocator,
    base_username,
};

/// Upper bound on allocate-then-insert rounds per registration.
pub const MAX_REGISTRATION_ATTEMPTS: u32 = 5;

fn map_store_error(err: UserStoreError) -> Error {
    match err {
        UserStoreError::Connection { message } => {
            error!(%message, "user store unavailable");
            Error::service_unavailable("user store unavailable")
        }
        UserStoreError::Query { message } => {
            Error::internal(format!("user store error: {message}"))
        }
        UserStoreError::DuplicateUsername { username } => {
            Error::internal(format!("username {username} is already taken"))
        }
    }
}

/// User directory implementing the [`UserDirectory`] driving port.
pub struct UserDirectoryService<S: ?Sized, H: ?Sized> {
    store: Arc<S>,
    hasher: Arc<H>,
    allocator: UsernameAllocator<S>,
}

impl<S: ?Sized, H: ?Sized> Clone for UserDirectoryService<S, H> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            hasher: Arc::clone(&self.hasher),
            allocator: self.allocator.clone(),
        }
    }
}

impl<S, H> UserDirectoryService<S, H>
where
    S: UserStore + ?Sized,
    H: ?Sized,
{
    /// Create a directory over `store`, digesting passwords with `hasher`.
    pub fn new(store: Arc<S>, hasher: Arc<H>) -> Self {
        Self {
            allocator: UsernameAllocator::new(Arc::clone(&store)),
            store,
            hasher,
        }
    }
}

#[async_trait]
impl<S, H> UserDirectory for UserDirectoryService<S, H>
where
    S: UserStore + ?Sized,
    H: PasswordHasher + ?Sized,
{
    async fn register(&self, registration: &Registration) -> Result<UserProfile, Error> {
        let base = base_username(registration.name(), registration.lastname())
            .map_err(|err| Error::invalid_request(err.to_string()))?;
        let digest = self.hasher.digest(registration.password());

        for attempt in 1..=MAX_REGISTRATION_ATTEMPTS {
            let username = self
                .allocator
                .allocate(&base)
                .await
                .map_err(map_store_error)?;
            let profile = UserProfile::new(registration.name(), registration.lastname(), username);
            let record = UserRecord::new(profile, digest.clone());

            match self.store.insert(&record).await {
                Ok(()) => return Ok(record.into_profile()),
                Err(UserStoreError::DuplicateUsername { username }) => {
                    debug!(attempt, %username, "username claimed concurrently, reallocating");
                }
                Err(err) => return Err(map_store_error(err)),
            }
        }

        Err(Error::internal(format!(
            "no unique username for {base} after {MAX_REGISTRATION_ATTEMPTS} attempts"
        )))
    }

    async fn login(&self, credentials: &LoginCredentials) -> Result<UserProfile, Error> {
        let digest = self.hasher.digest(credentials.password());
        self.store
            .find_by_credentials(credentials.username(), &digest)
            .await
            .map_err(map_store_error)?
            .ok_or_else(|| Error::unauthorized("Invalid credentials"))
    }

    async fn list_users(&self, request: PageRequest) -> Result<Paginated<UserProfile>, Error> {
        let users = self
            .store
            .list(request.offset(), request.end().saturating_sub(request.offset()))
            .await
            .map_err(map_store_error)?;
        Ok(Paginated::without_links(users, request))
    }
}

#[cfg(test)]
#[path = "user_directory_service_tests.rs"]
mod tests;
