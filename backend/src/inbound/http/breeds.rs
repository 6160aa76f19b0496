//! Breed catalog handlers.
//!
//! ```text
//! GET /breeds/?limit=20&page=0
//! GET /breeds/search?query=bengal&limit=2&page=1
//! GET /breeds/beng
//! ```

use actix_web::{HttpRequest, get, web};
use pagination::{PageLinks, Paginated};
use serde::Deserialize;

use crate::domain::{Breed, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, PageQuery, require_text};

/// Query string for `GET /breeds/search`.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    query: Option<String>,
    #[serde(flatten)]
    page: PageQuery,
}

/// List the catalog one window at a time.
#[utoipa::path(
    get,
    path = "/breeds/",
    params(
        ("limit" = Option<u32>, Query, description = "Items per page (default 20)"),
        ("page" = Option<u32>, Query, description = "Zero-based page index")
    ),
    responses(
        (status = 200, description = "Breeds", body = crate::inbound::http::schemas::BreedPageSchema),
        (status = 400, description = "Invalid pagination", body = Error),
        (status = 502, description = "Catalog request failed", body = Error)
    ),
    tags = ["breeds"],
    operation_id = "listBreeds"
)]
#[get("/")]
pub async fn list_breeds(
    state: web::Data<HttpState>,
    req: HttpRequest,
    query: web::Query<PageQuery>,
) -> ApiResult<web::Json<Paginated<Breed>>> {
    let request = query.resolve(state.page_bounds)?;
    let links = PageLinks::new(req.full_url());
    let page = state.breeds.list_breeds(request, &links).await?;
    Ok(web::Json(page))
}

/// Search breeds by name.
///
/// Every match is fetched and the window is cut locally, so `next` is exact.
#[utoipa::path(
    get,
    path = "/breeds/search",
    params(
        ("query" = String, Query, description = "Breed name fragment"),
        ("limit" = Option<u32>, Query, description = "Items per page (default 20)"),
        ("page" = Option<u32>, Query, description = "Zero-based page index")
    ),
    responses(
        (status = 200, description = "Matching breeds", body = crate::inbound::http::schemas::BreedPageSchema),
        (status = 400, description = "Missing query or invalid pagination", body = Error),
        (status = 404, description = "No breed matched", body = Error),
        (status = 502, description = "Catalog request failed", body = Error)
    ),
    tags = ["breeds"],
    operation_id = "searchBreeds"
)]
#[get("/search")]
pub async fn search_breeds(
    state: web::Data<HttpState>,
    req: HttpRequest,
    query: web::Query<SearchQuery>,
) -> ApiResult<web::Json<Paginated<Breed>>> {
    let term = require_text(query.query.as_deref(), FieldName::new("query"))?;
    let request = query.page.resolve(state.page_bounds)?;
    let links = PageLinks::new(req.full_url()).with_param("query", term);
    let page = state.breeds.search_breeds(term, request, &links).await?;
    Ok(web::Json(page))
}

/// Fetch one breed by catalog identifier.
#[utoipa::path(
    get,
    path = "/breeds/{id}",
    params(("id" = String, Path, description = "Catalog breed identifier")),
    responses(
        (status = 200, description = "Breed", body = Breed),
        (status = 404, description = "Unknown breed", body = Error),
        (status = 502, description = "Catalog request failed", body = Error)
    ),
    tags = ["breeds"],
    operation_id = "getBreed"
)]
#[get("/{id}")]
pub async fn get_breed(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Breed>> {
    let breed = state.breeds.get_breed(path.as_str()).await?;
    Ok(web::Json(breed))
}
