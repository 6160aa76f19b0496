//! Driving port for the user directory.

use async_trait::async_trait;
use pagination::{PageRequest, Paginated};

use crate::domain::{Error, LoginCredentials, Registration, UserProfile};

/// Domain use-case port for registration, login and listing.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Register a user under a freshly allocated username.
    async fn register(&self, registration: &Registration) -> Result<UserProfile, Error>;

    /// Check credentials and return the matching profile.
    async fn login(&self, credentials: &LoginCredentials) -> Result<UserProfile, Error>;

    /// Return one window of users without neighbour links.
    async fn list_users(&self, request: PageRequest) -> Result<Paginated<UserProfile>, Error>;
}
