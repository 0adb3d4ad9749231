//! Shared query infrastructure: the [`Query`] trait and [`QueryCommon`] fields.

use url::Url;

/// Trait implemented by query builders. Provides URL serialization and
/// shared builder methods for pagination and sort order.
pub trait Query {
    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url;

    /// Returns a mutable reference to the common query fields.
    fn get_common(&mut self) -> &mut QueryCommon;

    /// Sets the page number (1-indexed).
    fn with_page(mut self, page: i64) -> Self
    where
        Self: Sized,
    {
        self.get_common().page = page;
        self
    }

    /// Sets the sort key. `0` ranks by overall standing, `n` by event ordinal `n`.
    fn with_sort(mut self, sort: u32) -> Self
    where
        Self: Sized,
    {
        self.get_common().sort = sort;
        self
    }
}

/// Fields shared by all query types: pagination and sort key.
#[derive(Clone, Copy, Debug)]
pub struct QueryCommon {
    /// Page number (1-indexed). Defaults to 1.
    pub page: i64,
    /// Sort key. Defaults to 0 (overall standing).
    pub sort: u32,
}

impl Default for QueryCommon {
    fn default() -> QueryCommon {
        QueryCommon { page: 1, sort: 0 }
    }
}

impl QueryCommon {
    /// Appends the sort and page parameters to the URL.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("sort", &self.sort.to_string())
            .append_pair("page", &self.page.to_string());
        url
    }
}
