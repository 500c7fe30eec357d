//! Search results, their view state, and paging.

use serde::{Deserialize, Serialize};

use super::SearchQuery;
use crate::domain::User;

/// Page size used when the request does not name one.
pub const DEFAULT_PAGE_LIMIT: usize = 50;
/// Largest page a single request may return.
pub const MAX_PAGE_LIMIT: usize = 100;

/// Errors raised when paging parameters are unusable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SearchPageError {
    /// A page must hold at least one record.
    #[error("limit must be at least 1")]
    ZeroLimit,
}

impl SearchPageError {
    /// Request field the error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::ZeroLimit => "limit",
        }
    }

    /// Stable machine-readable reason.
    pub fn code(&self) -> &'static str {
        match self {
            Self::ZeroLimit => "zero_limit",
        }
    }
}

/// Window applied to the ordered matches.
///
/// Limits above [`MAX_PAGE_LIMIT`] are capped rather than rejected.
///
/// # Examples
/// ```
/// use backend::domain::{MAX_PAGE_LIMIT, SearchPage};
///
/// let page = SearchPage::new(500, 10).expect("valid page");
/// assert_eq!(page.limit(), MAX_PAGE_LIMIT);
/// assert_eq!(page.offset(), 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchPage {
    limit: usize,
    offset: usize,
}

impl SearchPage {
    /// Validate and construct a page window.
    pub fn new(limit: usize, offset: usize) -> Result<Self, SearchPageError> {
        if limit == 0 {
            return Err(SearchPageError::ZeroLimit);
        }
        Ok(Self {
            limit: limit.min(MAX_PAGE_LIMIT),
            offset,
        })
    }

    /// Maximum number of records returned.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Number of ordered matches skipped before the page starts.
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl Default for SearchPage {
    fn default() -> Self {
        Self {
            limit: DEFAULT_PAGE_LIMIT,
            offset: 0,
        }
    }
}

/// Which view a search result drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchState {
    /// No query was supplied; the default listing is shown.
    Default,
    /// A query matched at least one user.
    Populated,
    /// A query matched nothing.
    Empty,
}

/// Ordered matches for a query together with the query that produced them.
///
/// ## Invariants
/// - `query` always equals the requested query, even when `users` is empty.
/// - `users` is ordered by ascending username.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    query: SearchQuery,
    users: Vec<User>,
    total: usize,
}

impl SearchResult {
    /// Wrap the full, ordered set of matches for `query`.
    pub fn new(query: SearchQuery, users: Vec<User>) -> Self {
        let total = users.len();
        Self {
            query,
            users,
            total,
        }
    }

    /// Restrict the matches to `page`, keeping the total match count.
    pub fn paginate(self, page: SearchPage) -> Self {
        let Self {
            query,
            users,
            total,
        } = self;
        let users = users
            .into_iter()
            .skip(page.offset())
            .take(page.limit())
            .collect();
        Self {
            query,
            users,
            total,
        }
    }

    /// Query echoed back for URL round-tripping.
    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    /// Matching users on this page.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Number of matches before paging.
    pub fn total(&self) -> usize {
        self.total
    }

    /// View state derived from the query and the match count.
    pub fn state(&self) -> SearchState {
        match (&self.query, self.total) {
            (SearchQuery::Absent, _) => SearchState::Default,
            (SearchQuery::Present(_), 0) => SearchState::Empty,
            (SearchQuery::Present(_), _) => SearchState::Populated,
        }
    }

    /// Consume the result, yielding its users.
    pub fn into_users(self) -> Vec<User> {
        self.users
    }
}
