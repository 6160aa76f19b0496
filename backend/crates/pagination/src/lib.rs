//! Page window and pagination envelope primitives.
//!
//! Endpoints that return lists share one contract: the caller asks for a
//! window (`limit`, `page`), the server answers with the items in that window
//! and, where it can tell, absolute links to the neighbouring windows.
//!
//! - [`PageRequest`] is a validated window. [`PageBounds`] resolves raw query
//!   values against the configured default and maximum limit.
//! - [`PageLinks`] turns the request URL into `next`/`previous` links, echoing
//!   extra query parameters such as a search term.
//! - [`Paginated`] is the serialised envelope. Its constructors decide whether
//!   the items are a full result set to slice locally or a window already cut
//!   by a remote service.
//!
//! # Examples
//!
//! ```
//! use pagination::{PageLinks, PageRequest, Paginated};
//! use url::Url;
//!
//! let base = Url::parse("http://localhost:8080/breeds/search?query=bengal")?;
//! let links = PageLinks::new(base).with_param("query", "bengal");
//! let request = PageRequest::new(2, 0, 100)?;
//!
//! let page = Paginated::from_full_set(vec!["a", "b", "c"], request, &links);
//! assert_eq!(page.results(), ["a", "b"]);
//! assert_eq!(
//!     page.next(),
//!     Some("http://localhost:8080/breeds/search?query=bengal&limit=2&page=1")
//! );
//! assert!(page.previous().is_none());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod envelope;
mod links;
mod request;

pub use envelope::Paginated;
pub use links::PageLinks;
pub use request::{DEFAULT_LIMIT, DEFAULT_MAX_LIMIT, PageBounds, PageRequest, PageRequestError};
