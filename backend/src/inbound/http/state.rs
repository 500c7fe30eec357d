//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::DEFAULT_PAGE_LIMIT;
use crate::domain::ports::UsersQuery;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Search use case backing both the JSON API and the HTML pages.
    pub users: Arc<dyn UsersQuery>,
    /// Page size applied when a request omits `limit`.
    pub default_page_size: usize,
}

impl HttpState {
    /// Construct state around a search port using the default page size.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use backend::domain::{MatchPolicy, UserSearchService};
    /// use backend::inbound::http::state::HttpState;
    /// use backend::outbound::persistence::InMemoryUserRepository;
    ///
    /// let repository = Arc::new(InMemoryUserRepository::new());
    /// let service = UserSearchService::new(repository, MatchPolicy::default());
    /// let state = HttpState::new(Arc::new(service));
    /// assert_eq!(state.default_page_size, 50);
    /// ```
    pub fn new(users: Arc<dyn UsersQuery>) -> Self {
        Self {
            users,
            default_page_size: DEFAULT_PAGE_LIMIT,
        }
    }

    /// Override the page size applied when a request omits `limit`.
    #[must_use]
    pub fn with_default_page_size(mut self, default_page_size: usize) -> Self {
        self.default_page_size = default_page_size;
        self
    }
}
