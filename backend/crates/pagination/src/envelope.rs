//! Serialised pagination envelope.

use serde::{Deserialize, Serialize};

use crate::{PageLinks, PageRequest};

/// One window of results plus links to its neighbours.
///
/// ## Invariants
/// - `previous` is present iff `page > 0`.
/// - `next` is present only when the constructor observed at least one item
///   beyond the window.
///
/// Absent links serialise as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paginated<T> {
    results: Vec<T>,
    limit: u32,
    page: u32,
    next: Option<String>,
    previous: Option<String>,
}

impl<T> Paginated<T> {
    /// Slice `items` locally to the requested window.
    ///
    /// `items` is the complete ordered result set; `next` is set when more
    /// items follow the window.
    #[must_use]
    pub fn from_full_set(items: Vec<T>, request: PageRequest, links: &PageLinks) -> Self {
        let total = items.len();
        let results = items
            .into_iter()
            .skip(request.offset())
            .take(request.end().saturating_sub(request.offset()))
            .collect();
        Self::assemble(results, request, total, links)
    }

    /// Wrap a window that a remote service already cut.
    ///
    /// `items` is returned as-is. When the remote reports its total size,
    /// `next` is computed against it. Without a total the window length is
    /// all that is known, so `next` only appears if the remote returned more
    /// items than the window end.
    #[must_use]
    pub fn from_remote_window(
        items: Vec<T>,
        request: PageRequest,
        remote_total: Option<usize>,
        links: &PageLinks,
    ) -> Self {
        let total = remote_total.unwrap_or(items.len());
        Self::assemble(items, request, total, links)
    }

    /// Wrap a window without computing any links.
    #[must_use]
    pub const fn without_links(results: Vec<T>, request: PageRequest) -> Self {
        Self {
            results,
            limit: request.limit(),
            page: request.page(),
            next: None,
            previous: None,
        }
    }

    fn assemble(results: Vec<T>, request: PageRequest, total: usize, links: &PageLinks) -> Self {
        let next = request
            .next_page()
            .filter(|_| request.end() < total)
            .map(|page| links.link_for(request.limit(), page));
        let previous = request
            .previous_page()
            .map(|page| links.link_for(request.limit(), page));
        Self {
            results,
            limit: request.limit(),
            page: request.page(),
            next,
            previous,
        }
    }

    /// Items in the window.
    #[must_use]
    pub fn results(&self) -> &[T] {
        &self.results
    }

    /// Consume the envelope and return its items.
    #[must_use]
    pub fn into_results(self) -> Vec<T> {
        self.results
    }

    /// Window size requested.
    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit
    }

    /// Zero-based window index.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Link to the following window.
    #[must_use]
    pub fn next(&self) -> Option<&str> {
        self.next.as_deref()
    }

    /// Link to the preceding window.
    #[must_use]
    pub fn previous(&self) -> Option<&str> {
        self.previous.as_deref()
    }

    /// Transform every item, keeping the window and links.
    #[must_use]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Paginated<U> {
        Paginated {
            results: self.results.into_iter().map(f).collect(),
            limit: self.limit,
            page: self.page,
            next: self.next,
            previous: self.previous,
        }
    }
}
