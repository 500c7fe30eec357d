//! User search domain service.
//!
//! This module implements the [`UsersQuery`] driving port by reading one
//! snapshot from the record store and running the matcher over it.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use super::{MatchPolicy, SearchPage, SearchQuery, SearchResult, match_users};
use crate::domain::Error;
use crate::domain::ports::{UserPersistenceError, UserRepository, UsersQuery};

/// Search service implementing the [`UsersQuery`] port.
///
/// The repository is only read; searches never mutate the record store.
pub struct UserSearchService<R: ?Sized> {
    repository: Arc<R>,
    policy: MatchPolicy,
}

impl<R: ?Sized> Clone for UserSearchService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            policy: self.policy,
        }
    }
}

impl<R: ?Sized> UserSearchService<R> {
    /// Create a service over `repository` using `policy` for matching.
    pub fn new(repository: Arc<R>, policy: MatchPolicy) -> Self {
        Self { repository, policy }
    }

    /// Match policy applied to every search.
    pub fn policy(&self) -> MatchPolicy {
        self.policy
    }

    fn map_persistence_error(error: UserPersistenceError) -> Error {
        match error {
            UserPersistenceError::Connection { message } => {
                Error::service_unavailable(format!("user repository unavailable: {message}"))
            }
            UserPersistenceError::Query { message } => {
                Error::internal(format!("user repository error: {message}"))
            }
            UserPersistenceError::Duplicate { username } => {
                Error::internal(format!("unexpected duplicate username on read: {username}"))
            }
        }
    }
}

#[async_trait]
impl<R> UsersQuery for UserSearchService<R>
where
    R: UserRepository + ?Sized,
{
    async fn search_users(
        &self,
        query: &SearchQuery,
        page: SearchPage,
    ) -> Result<SearchResult, Error> {
        let snapshot = self
            .repository
            .find_all()
            .await
            .map_err(Self::map_persistence_error)?;
        let result = match_users(query, snapshot, self.policy)?;

        debug!(
            query = %query,
            state = ?result.state(),
            matches = result.total(),
            mode = %self.policy.mode(),
            "user search completed"
        );
        Ok(result.paginate(page))
    }
}
