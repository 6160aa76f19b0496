//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on driving ports and remain testable without I/O.

use std::sync::Arc;

use pagination::PageBounds;

use crate::domain::ports::{BreedQuery, UserDirectory};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub breeds: Arc<dyn BreedQuery>,
    pub users: Arc<dyn UserDirectory>,
    pub page_bounds: PageBounds,
}

impl HttpState {
    /// Bundle the driving ports with the default page bounds.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use catapi_backend::domain::ports::FixtureBreedCatalogSource;
    /// use catapi_backend::domain::{BreedQueryService, UserDirectoryService};
    /// use catapi_backend::inbound::http::state::HttpState;
    /// use catapi_backend::outbound::hashing::Sha256PasswordHasher;
    /// use catapi_backend::outbound::memory::InMemoryUserStore;
    ///
    /// let breeds = BreedQueryService::new(Arc::new(FixtureBreedCatalogSource::default()));
    /// let users = UserDirectoryService::new(
    ///     Arc::new(InMemoryUserStore::default()),
    ///     Arc::new(Sha256PasswordHasher),
    /// );
    /// let state = HttpState::new(Arc::new(breeds), Arc::new(users));
    /// assert_eq!(state.page_bounds.default_limit(), 20);
    /// ```
    pub fn new(breeds: Arc<dyn BreedQuery>, users: Arc<dyn UserDirectory>) -> Self {
        Self {
            breeds,
            users,
            page_bounds: PageBounds::default(),
        }
    }

    /// Replace the page bounds applied to list queries.
    #[must_use]
    pub fn with_page_bounds(mut self, page_bounds: PageBounds) -> Self {
        self.page_bounds = page_bounds;
        self
    }
}
