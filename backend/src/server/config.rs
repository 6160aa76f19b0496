//! HTTP server configuration object.

use std::net::SocketAddr;
use std::sync::Arc;

use catapi_backend::domain::ports::{BreedCatalogSource, UserStore};
use pagination::PageBounds;

/// Everything `create_server` needs: adapters for the driven ports plus
/// listener and paging settings.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) page_bounds: PageBounds,
    pub(crate) catalog: Arc<dyn BreedCatalogSource>,
    pub(crate) user_store: Arc<dyn UserStore>,
}

impl ServerConfig {
    #[must_use]
    pub fn new(
        bind_addr: SocketAddr,
        catalog: Arc<dyn BreedCatalogSource>,
        user_store: Arc<dyn UserStore>,
    ) -> Self {
        Self {
            bind_addr,
            page_bounds: PageBounds::default(),
            catalog,
            user_store,
        }
    }

    /// Override the default and maximum list limits.
    #[must_use]
    pub fn with_page_bounds(mut self, page_bounds: PageBounds) -> Self {
        self.page_bounds = page_bounds;
        self
    }
}
