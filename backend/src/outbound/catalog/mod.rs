//! Remote breed catalog adapters.
//!
//! This module provides a thin HTTP implementation of the
//! `BreedCatalogSource` port against TheCatAPI.

mod http_source;

pub use http_source::{CatApiClientError, CatApiHttpSource, PAGINATION_COUNT_HEADER};
