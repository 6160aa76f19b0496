//! Driving port for breed lookups.
//!
//! HTTP handlers call this port with a validated window and the links
//! builder for the request URL; the implementation decides how the window
//! maps onto the catalog.

use async_trait::async_trait;
use pagination::{PageLinks, PageRequest, Paginated};

use crate::domain::{Breed, Error};

/// Domain use-case port for reading breeds.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BreedQuery: Send + Sync {
    /// Page through the whole catalog.
    async fn list_breeds(
        &self,
        request: PageRequest,
        links: &PageLinks,
    ) -> Result<Paginated<Breed>, Error>;

    /// Fetch a single breed.
    async fn get_breed(&self, id: &str) -> Result<Breed, Error>;

    /// Page through breeds matching `query`.
    async fn search_breeds(
        &self,
        query: &str,
        request: PageRequest,
        links: &PageLinks,
    ) -> Result<Paginated<Breed>, Error>;
}
