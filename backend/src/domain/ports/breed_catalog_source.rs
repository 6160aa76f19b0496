//! Driven port for the remote breed catalog.
//!
//! The domain asks for breeds through this port so it never sees HTTP
//! clients, API keys or response headers. Adapters translate transport
//! failures into [`BreedCatalogError`].

use async_trait::async_trait;
use pagination::PageRequest;

use crate::domain::Breed;

use super::define_port_error;

define_port_error! {
    /// Errors raised while reading the remote breed catalog.
    pub enum BreedCatalogError {
        /// The catalog has no record for the requested identifier.
        NotFound => "breed not found in catalog",
        /// The catalog answered with a non-success status.
        Status { status: u16, message: String } =>
            "breed catalog answered {status}: {message}",
        /// The request never produced a response.
        Transport { message: String } =>
            "breed catalog transport failed: {message}",
        /// The response body could not be decoded.
        Decode { message: String } =>
            "breed catalog payload invalid: {message}",
    }
}

/// One page of breeds as cut by the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreedWindow {
    /// Breeds in catalog order.
    pub breeds: Vec<Breed>,
    /// Size of the whole catalog when the remote reports it.
    pub total: Option<usize>,
}

/// Port for reading breeds from the remote catalog.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BreedCatalogSource: Send + Sync {
    /// Fetch the window `request` using the catalog's own paging.
    async fn list_breeds(&self, request: PageRequest) -> Result<BreedWindow, BreedCatalogError>;

    /// Fetch a single breed by identifier.
    async fn fetch_breed(&self, id: &str) -> Result<Breed, BreedCatalogError>;

    /// Fetch every breed whose name matches `query`, unpaginated.
    async fn search_breeds(&self, query: &str) -> Result<Vec<Breed>, BreedCatalogError>;
}

/// In-memory catalog holding a fixed list of breeds.
///
/// Pages are cut locally and the total is always reported. Search matches
/// names case-insensitively by substring.
#[derive(Debug, Default, Clone)]
pub struct FixtureBreedCatalogSource {
    breeds: Vec<Breed>,
}

impl FixtureBreedCatalogSource {
    /// Build a catalog serving `breeds` in the given order.
    pub fn new(breeds: Vec<Breed>) -> Self {
        Self { breeds }
    }
}

#[async_trait]
impl BreedCatalogSource for FixtureBreedCatalogSource {
    async fn list_breeds(&self, request: PageRequest) -> Result<BreedWindow, BreedCatalogError> {
        let breeds = self
            .breeds
            .iter()
            .skip(request.offset())
            .take(request.end().saturating_sub(request.offset()))
            .cloned()
            .collect();
        Ok(BreedWindow {
            breeds,
            total: Some(self.breeds.len()),
        })
    }

    async fn fetch_breed(&self, id: &str) -> Result<Breed, BreedCatalogError> {
        self.breeds
            .iter()
            .find(|breed| breed.id == id)
            .cloned()
            .ok_or_else(BreedCatalogError::not_found)
    }

    async fn search_breeds(&self, query: &str) -> Result<Vec<Breed>, BreedCatalogError> {
        let needle = query.to_lowercase();
        Ok(self
            .breeds
            .iter()
            .filter(|breed| breed.name.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }
}
