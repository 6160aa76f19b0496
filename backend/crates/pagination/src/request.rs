//! Validated page windows.

use thiserror::Error;

/// Limit applied when a request does not specify one.
pub const DEFAULT_LIMIT: u32 = 20;
/// Largest limit accepted unless configured otherwise.
pub const DEFAULT_MAX_LIMIT: u32 = 100;

/// Validation failures for page windows and their bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PageRequestError {
    /// A window must contain at least one item.
    #[error("limit must be at least 1")]
    ZeroLimit,
    /// The requested limit exceeds the configured maximum.
    #[error("limit must be at most {max}, got {requested}")]
    LimitTooLarge {
        /// Configured maximum.
        max: u32,
        /// Limit supplied by the caller.
        requested: u32,
    },
    /// The configured default limit falls outside `1..=max_limit`.
    #[error("default limit {default_limit} must be between 1 and {max_limit}")]
    InvalidBounds {
        /// Configured default limit.
        default_limit: u32,
        /// Configured maximum limit.
        max_limit: u32,
    },
}

/// A validated `(limit, page)` window.
///
/// ## Invariants
/// - `limit` is within `1..=max_limit` for the bounds it was built against.
/// - `page` is zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    limit: u32,
    page: u32,
}

impl PageRequest {
    /// Validate a window against `max_limit`.
    ///
    /// # Errors
    ///
    /// Returns [`PageRequestError::ZeroLimit`] when `limit` is zero and
    /// [`PageRequestError::LimitTooLarge`] when it exceeds `max_limit`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pagination::{PageRequest, PageRequestError};
    ///
    /// assert!(PageRequest::new(20, 3, 100).is_ok());
    /// assert_eq!(PageRequest::new(0, 0, 100), Err(PageRequestError::ZeroLimit));
    /// ```
    pub const fn new(limit: u32, page: u32, max_limit: u32) -> Result<Self, PageRequestError> {
        if limit == 0 {
            return Err(PageRequestError::ZeroLimit);
        }
        if limit > max_limit {
            return Err(PageRequestError::LimitTooLarge {
                max: max_limit,
                requested: limit,
            });
        }
        Ok(Self { limit, page })
    }

    /// Items per window.
    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit
    }

    /// Zero-based window index.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Index of the first item in the window (`page * limit`).
    #[must_use]
    pub fn offset(&self) -> usize {
        to_usize(self.page).saturating_mul(to_usize(self.limit))
    }

    /// Exclusive index one past the last item in the window.
    #[must_use]
    pub fn end(&self) -> usize {
        self.offset().saturating_add(to_usize(self.limit))
    }

    /// Index of the preceding window, if any.
    #[must_use]
    pub const fn previous_page(&self) -> Option<u32> {
        self.page.checked_sub(1)
    }

    /// Index of the following window.
    #[must_use]
    pub const fn next_page(&self) -> Option<u32> {
        self.page.checked_add(1)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            page: 0,
        }
    }
}

/// Default and maximum limit applied to inbound page queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageBounds {
    default_limit: u32,
    max_limit: u32,
}

impl PageBounds {
    /// Build bounds, rejecting a default outside `1..=max_limit`.
    ///
    /// # Errors
    ///
    /// Returns [`PageRequestError::InvalidBounds`] for inconsistent values.
    pub const fn new(default_limit: u32, max_limit: u32) -> Result<Self, PageRequestError> {
        if default_limit == 0 || default_limit > max_limit {
            return Err(PageRequestError::InvalidBounds {
                default_limit,
                max_limit,
            });
        }
        Ok(Self {
            default_limit,
            max_limit,
        })
    }

    /// Limit used when a query omits it.
    #[must_use]
    pub const fn default_limit(&self) -> u32 {
        self.default_limit
    }

    /// Largest accepted limit.
    #[must_use]
    pub const fn max_limit(&self) -> u32 {
        self.max_limit
    }

    /// Resolve optional query values into a validated window.
    ///
    /// # Errors
    ///
    /// Propagates [`PageRequest::new`] validation failures.
    ///
    /// # Examples
    ///
    /// ```
    /// use pagination::PageBounds;
    ///
    /// let bounds = PageBounds::default();
    /// let request = bounds.resolve(None, Some(2))?;
    /// assert_eq!((request.limit(), request.page()), (20, 2));
    /// # Ok::<(), pagination::PageRequestError>(())
    /// ```
    pub fn resolve(&self, limit: Option<u32>, page: Option<u32>) -> Result<PageRequest, PageRequestError> {
        PageRequest::new(
            limit.unwrap_or(self.default_limit),
            page.unwrap_or_default(),
            self.max_limit,
        )
    }
}

impl Default for PageBounds {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_LIMIT,
            max_limit: DEFAULT_MAX_LIMIT,
        }
    }
}

fn to_usize(value: u32) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}
