//! Absolute links to neighbouring windows.

use url::Url;

/// Builds `next`/`previous` links from the URL a list was requested on.
///
/// The base keeps scheme, host, and path; the incoming query string and
/// fragment are dropped. Extra parameters are echoed in insertion order
/// ahead of `limit` and `page`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLinks {
    base: Url,
    params: Vec<(String, String)>,
}

impl PageLinks {
    /// Start from the request URL.
    ///
    /// # Examples
    ///
    /// ```
    /// use pagination::PageLinks;
    /// use url::Url;
    ///
    /// let links = PageLinks::new(Url::parse("http://api.test/breeds/?limit=5&page=9")?);
    /// assert_eq!(links.link_for(5, 1), "http://api.test/breeds/?limit=5&page=1");
    /// # Ok::<(), url::ParseError>(())
    /// ```
    #[must_use]
    pub fn new(mut base: Url) -> Self {
        base.set_query(None);
        base.set_fragment(None);
        Self {
            base,
            params: Vec::new(),
        }
    }

    /// Echo an extra query parameter into every generated link.
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Base URL without query or fragment.
    #[must_use]
    pub const fn base(&self) -> &Url {
        &self.base
    }

    /// Link for the window `(limit, page)`.
    #[must_use]
    pub fn link_for(&self, limit: u32, page: u32) -> String {
        let mut link = self.base.clone();
        {
            let mut pairs = link.query_pairs_mut();
            for (key, value) in &self.params {
                pairs.append_pair(key, value);
            }
            pairs.append_pair("limit", &limit.to_string());
            pairs.append_pair("page", &page.to_string());
        }
        link.into()
    }
}
