//! User search: query normalisation, record matching, and the search service.
//!
//! Control flows from the raw request parameter through
//! [`SearchQuery::normalize`], then [`UserSearchService`] reads one snapshot of
//! the record store and hands it to [`match_users`]. The resulting
//! [`SearchResult`] echoes the query so adapters can rebuild the results
//! location.

mod matcher;
mod query;
mod result;
mod service;

pub use matcher::{
    CaseSensitivity, InvariantViolation, MatchMode, MatchPolicy, UnknownPolicyValue, match_users,
};
pub use query::{SEARCH_PARAM, SearchQuery, USERS_PATH};
pub use result::{
    DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT, SearchPage, SearchPageError, SearchResult, SearchState,
};
pub use service::UserSearchService;
