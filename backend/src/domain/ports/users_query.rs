//! Driving port for user search.
//!
//! Inbound adapters (HTTP handlers) use this port to run searches without
//! importing outbound persistence concerns. Production backs it with
//! [`UserSearchService`](crate::domain::UserSearchService); tests can use a
//! mock or a service wired to an in-memory repository.

use async_trait::async_trait;

use crate::domain::{Error, SearchPage, SearchQuery, SearchResult};

/// Domain use-case port for searching users by username.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Run `query` against the current record store and return one page of
    /// matches.
    ///
    /// The returned result always echoes `query`, including when it is empty.
    async fn search_users(
        &self,
        query: &SearchQuery,
        page: SearchPage,
    ) -> Result<SearchResult, Error>;
}
