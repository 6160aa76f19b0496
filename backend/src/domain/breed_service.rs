//! Breed query service.
//!
//! Implements [`BreedQuery`] over a [`BreedCatalogSource`]. The full catalog
//! is paged remotely; search results arrive unpaginated and are windowed here.

use std::sync::Arc;

use async_trait::async_trait;
use pagination::{PageLinks, PageRequest, Paginated};
use serde_json::json;
use tracing::warn;

use crate::domain::ports::{BreedCatalogError, BreedCatalogSource, BreedQuery};
use crate::domain::{Breed, Error};

const BREED_NOT_FOUND: &str = "Breed not found";

fn map_catalog_error(error: BreedCatalogError) -> Error {
    match error {
        BreedCatalogError::NotFound => Error::not_found(BREED_NOT_FOUND),
        BreedCatalogError::Status { status, message } => {
            warn!(status, %message, "breed catalog answered with an error status");
            Error::upstream(format!("breed catalog answered with status {status}"))
                .with_details(json!({ "status": status }))
        }
        BreedCatalogError::Transport { message } => {
            warn!(%message, "breed catalog unreachable");
            Error::upstream("breed catalog unreachable")
        }
        BreedCatalogError::Decode { message } => {
            warn!(%message, "breed catalog payload rejected");
            Error::upstream("breed catalog returned an unreadable payload")
        }
    }
}

/// Breed service implementing the [`BreedQuery`] driving port.
pub struct BreedQueryService<S: ?Sized> {
    source: Arc<S>,
}

impl<S: ?Sized> Clone for BreedQueryService<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
        }
    }
}

impl<S: ?Sized> BreedQueryService<S> {
    /// Create a service reading from `source`.
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }
}

#[async_trait]
impl<S> BreedQuery for BreedQueryService<S>
where
    S: BreedCatalogSource + ?Sized,
{
    async fn list_breeds(
        &self,
        request: PageRequest,
        links: &PageLinks,
    ) -> Result<Paginated<Breed>, Error> {
        let window = self
            .source
            .list_breeds(request)
            .await
            .map_err(map_catalog_error)?;
        Ok(Paginated::from_remote_window(
            window.breeds,
            request,
            window.total,
            links,
        ))
    }

    async fn get_breed(&self, id: &str) -> Result<Breed, Error> {
        self.source
            .fetch_breed(id)
            .await
            .map_err(map_catalog_error)
    }

    async fn search_breeds(
        &self,
        query: &str,
        request: PageRequest,
        links: &PageLinks,
    ) -> Result<Paginated<Breed>, Error> {
        let matches = self
            .source
            .search_breeds(query)
            .await
            .map_err(map_catalog_error)?;
        if matches.is_empty() {
            return Err(Error::not_found(BREED_NOT_FOUND));
        }
        Ok(Paginated::from_full_set(matches, request, links))
    }
}

#[cfg(test)]
#[path = "breed_service_tests.rs"]
mod tests;
