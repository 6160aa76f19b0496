//! Application settings loaded via OrthoConfig.
//!
//! Values layer defaults, an optional configuration file, `CATAPI_*`
//! environment variables and command-line flags.

use std::fmt;
use std::net::SocketAddr;
use std::time::Duration;

use ortho_config::OrthoConfig;
use pagination::{PageBounds, PageRequestError};
use serde::Deserialize;
use url::Url;
use zeroize::Zeroizing;

const DEFAULT_CAT_API_URL: &str = "https://api.thecatapi.com/v1";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Invalid configuration detected at startup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// `cat_api_url` does not parse as a URL.
    #[error("cat_api_url {value:?} is not a valid URL: {message}")]
    InvalidCatApiUrl { value: String, message: String },
    /// `bind_addr` does not parse as a socket address.
    #[error("bind_addr {value:?} is not a socket address")]
    InvalidBindAddr { value: String },
    /// `cat_api_timeout_secs` is zero.
    #[error("cat_api_timeout_secs must be greater than zero")]
    ZeroTimeout,
    /// Default and maximum page limits are inconsistent.
    #[error("invalid page limits: {0}")]
    PageBounds(#[from] PageRequestError),
}

/// Server configuration.
#[derive(Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "CATAPI")]
pub struct AppSettings {
    /// Base URL of the remote breed catalog.
    pub cat_api_url: Option<String>,
    /// Key sent as `x-api-key` to the catalog.
    pub cat_api_key: Option<String>,
    /// Catalog request timeout in seconds.
    #[ortho_config(default = 10)]
    pub cat_api_timeout_secs: u64,
    /// PostgreSQL URL; the in-memory store is used when absent.
    pub database_url: Option<String>,
    /// Limit applied when a list query omits `limit`.
    #[ortho_config(default = 20)]
    pub default_page_limit: u32,
    /// Largest accepted `limit`.
    #[ortho_config(default = 100)]
    pub max_page_limit: u32,
    /// Listen address.
    pub bind_addr: Option<String>,
}

impl fmt::Debug for AppSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppSettings")
            .field("cat_api_url", &self.cat_api_url)
            .field("cat_api_key", &self.cat_api_key.as_ref().map(|_| "<redacted>"))
            .field("cat_api_timeout_secs", &self.cat_api_timeout_secs)
            .field("database_url", &self.database_url.as_ref().map(|_| "<redacted>"))
            .field("default_page_limit", &self.default_page_limit)
            .field("max_page_limit", &self.max_page_limit)
            .field("bind_addr", &self.bind_addr)
            .finish()
    }
}

impl AppSettings {
    /// Catalog base URL, falling back to TheCatAPI v1.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidCatApiUrl`] when the value does not parse.
    pub fn cat_api_url(&self) -> Result<Url, SettingsError> {
        let raw = self.cat_api_url.as_deref().unwrap_or(DEFAULT_CAT_API_URL);
        Url::parse(raw).map_err(|err| SettingsError::InvalidCatApiUrl {
            value: raw.to_owned(),
            message: err.to_string(),
        })
    }

    /// API key wrapped so it is wiped from memory on drop.
    pub fn cat_api_key(&self) -> Option<Zeroizing<String>> {
        self.cat_api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .map(|key| Zeroizing::new(key.to_owned()))
    }

    /// Catalog request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::ZeroTimeout`] for a zero value.
    pub fn cat_api_timeout(&self) -> Result<Duration, SettingsError> {
        match self.cat_api_timeout_secs {
            0 => Err(SettingsError::ZeroTimeout),
            secs => Ok(Duration::from_secs(secs)),
        }
    }

    /// PostgreSQL URL, ignoring a blank value.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url.as_deref().filter(|url| !url.trim().is_empty())
    }

    /// Default and maximum list limits.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::PageBounds`] unless
    /// `1 <= default_page_limit <= max_page_limit`.
    pub fn page_bounds(&self) -> Result<PageBounds, SettingsError> {
        Ok(PageBounds::new(self.default_page_limit, self.max_page_limit)?)
    }

    /// Listen address.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidBindAddr`] when the value does not parse.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let raw = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        raw.parse().map_err(|_| SettingsError::InvalidBindAddr {
            value: raw.to_owned(),
        })
    }
}
