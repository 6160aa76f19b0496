//! Reqwest-backed TheCatAPI source adapter.
//!
//! This adapter owns transport details only: URL construction, the API key
//! header, the request timeout, HTTP error mapping and JSON decoding into
//! domain breeds.

use std::time::Duration;

use async_trait::async_trait;
use pagination::PageRequest;
use reqwest::header::{ACCEPT, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, StatusCode, Url};
use serde_json::Value;
use tracing::debug;
use zeroize::Zeroizing;

use crate::domain::Breed;
use crate::domain::ports::{BreedCatalogError, BreedCatalogSource, BreedWindow};

/// Response header carrying the catalog size on list requests.
pub const PAGINATION_COUNT_HEADER: &str = "pagination-count";
const API_KEY_HEADER: &str = "x-api-key";

/// Failures raised while building the adapter.
#[derive(Debug, thiserror::Error)]
pub enum CatApiClientError {
    #[error("catalog API key is not a valid header value")]
    InvalidApiKey,
    #[error("catalog base URL {0} cannot carry a path")]
    InvalidBaseUrl(Url),
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Catalog source issuing GET requests below one base URL.
pub struct CatApiHttpSource {
    client: Client,
    base_url: Url,
}

impl CatApiHttpSource {
    /// Build an adapter whose client sends `api_key` on every request.
    ///
    /// ```rust,ignore
    /// let source = CatApiHttpSource::new(base_url, Some(key), Duration::from_secs(10))?;
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`CatApiClientError`] when the key is not a valid header
    /// value, the base URL cannot take path segments, or the reqwest client
    /// cannot be constructed.
    pub fn new(
        base_url: Url,
        api_key: Option<Zeroizing<String>>,
        timeout: Duration,
    ) -> Result<Self, CatApiClientError> {
        if base_url.cannot_be_a_base() {
            return Err(CatApiClientError::InvalidBaseUrl(base_url));
        }
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(key) = api_key {
            let mut value =
                HeaderValue::from_str(key.as_str()).map_err(|_| CatApiClientError::InvalidApiKey)?;
            value.set_sensitive(true);
            headers.insert(HeaderName::from_static(API_KEY_HEADER), value);
        }
        let client = Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()?;
        Ok(Self { client, base_url })
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, BreedCatalogError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| BreedCatalogError::transport("catalog base URL cannot carry a path"))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get(
        &self,
        url: Url,
        query: &[(&str, String)],
    ) -> Result<(StatusCode, HeaderMap, Vec<u8>), BreedCatalogError> {
        let path = url.path().to_owned();
        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(map_transport_error)?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await.map_err(map_transport_error)?;
        debug!(path = %path, status = status.as_u16(), bytes = body.len(), "catalog response");
        Ok((status, headers, body.to_vec()))
    }
}

#[async_trait]
impl BreedCatalogSource for CatApiHttpSource {
    async fn list_breeds(&self, request: PageRequest) -> Result<BreedWindow, BreedCatalogError> {
        let url = self.endpoint(&["breeds"])?;
        let query = [
            ("limit", request.limit().to_string()),
            ("page", request.page().to_string()),
        ];
        let (status, headers, body) = self.get(url, &query).await?;
        if !status.is_success() {
            return Err(map_status_error(status, &body));
        }
        Ok(BreedWindow {
            breeds: decode(&body)?,
            total: pagination_count(&headers),
        })
    }

    async fn fetch_breed(&self, id: &str) -> Result<Breed, BreedCatalogError> {
        let url = self.endpoint(&["breeds", id])?;
        let (status, _, body) = self.get(url, &[]).await?;
        if status == StatusCode::NOT_FOUND {
            return Err(BreedCatalogError::not_found());
        }
        if !status.is_success() {
            return Err(map_status_error(status, &body));
        }
        parse_single_breed(&body)
    }

    async fn search_breeds(&self, query: &str) -> Result<Vec<Breed>, BreedCatalogError> {
        let url = self.endpoint(&["breeds", "search"])?;
        let params = [("q", query.to_owned()), ("attach_image", "1".to_owned())];
        let (status, _, body) = self.get(url, &params).await?;
        if !status.is_success() {
            return Err(map_status_error(status, &body));
        }
        decode(&body)
    }
}

fn decode<T: serde::de::DeserializeOwned>(body: &[u8]) -> Result<T, BreedCatalogError> {
    serde_json::from_slice(body).map_err(|error| {
        BreedCatalogError::decode(format!("invalid catalog JSON payload: {error}"))
    })
}

/// The catalog answers unknown ids with `200` and an empty body or `{}`.
fn parse_single_breed(body: &[u8]) -> Result<Breed, BreedCatalogError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(BreedCatalogError::not_found());
    }
    let value: Value = decode(body)?;
    match &value {
        Value::Null => Err(BreedCatalogError::not_found()),
        Value::Object(fields) if fields.is_empty() => Err(BreedCatalogError::not_found()),
        _ => serde_json::from_value(value).map_err(|error| {
            BreedCatalogError::decode(format!("invalid catalog breed: {error}"))
        }),
    }
}

fn pagination_count(headers: &HeaderMap) -> Option<usize> {
    headers
        .get(PAGINATION_COUNT_HEADER)?
        .to_str()
        .ok()?
        .trim()
        .parse()
        .ok()
}

fn map_transport_error(error: reqwest::Error) -> BreedCatalogError {
    if error.is_timeout() {
        BreedCatalogError::transport(format!("catalog request timed out: {error}"))
    } else if error.is_decode() {
        BreedCatalogError::decode(error.to_string())
    } else {
        BreedCatalogError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> BreedCatalogError {
    let preview = body_preview(body);
    let message = if preview.is_empty() {
        "empty body".to_owned()
    } else {
        preview
    };
    BreedCatalogError::status(status.as_u16(), message)
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}

#[cfg(test)]
mod tests;
