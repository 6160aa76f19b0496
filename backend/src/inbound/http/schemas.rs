//! OpenAPI schemas for the pagination envelope.
//!
//! The `pagination` crate stays free of utoipa, so the envelope's shape is
//! described here once per item type.

use utoipa::ToSchema;

use crate::domain::{Breed, UserProfile};

/// One window of breeds with links to its neighbours.
#[derive(ToSchema)]
#[schema(as = BreedPage)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct BreedPageSchema {
    results: Vec<Breed>,
    #[schema(example = 20)]
    limit: u32,
    #[schema(example = 0)]
    page: u32,
    /// Absolute link to the next window, `null` on the last one.
    #[schema(example = "http://localhost:8080/breeds/?limit=20&page=1")]
    next: Option<String>,
    /// Absolute link to the previous window, `null` on page zero.
    previous: Option<String>,
}

/// One window of users. Links are never computed for this list.
#[derive(ToSchema)]
#[schema(as = UserPage)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserPageSchema {
    results: Vec<UserProfile>,
    limit: u32,
    page: u32,
    next: Option<String>,
    previous: Option<String>,
}
