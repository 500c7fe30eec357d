//! Domain primitives, aggregates, and services.
//!
//! Purpose: define the strongly typed user model and the search use case
//! consumed by the HTTP adapter, independent of persistence and transport.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - User, NewUser and their value types: the record store's entities.
//! - SearchQuery, match_users, SearchResult: the search core.
//! - UserSearchService: implementation of the `UsersQuery` driving port.
//! - TraceId: request-scoped correlation identifier.

pub mod error;
pub mod ports;
pub mod search;
pub mod trace_id;
pub mod user;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::search::{
    CaseSensitivity, DEFAULT_PAGE_LIMIT, InvariantViolation, MAX_PAGE_LIMIT, MatchMode,
    MatchPolicy, SEARCH_PARAM, SearchPage, SearchPageError, SearchQuery, SearchResult,
    SearchState, USERS_PATH, UnknownPolicyValue, UserSearchService, match_users,
};
pub use self::trace_id::TraceId;
pub use self::user::{
    AVATAR_MAX, AvatarRef, DISPLAY_NAME_MAX, DisplayName, NewUser, PLACEHOLDER_AVATAR_URL,
    USERNAME_MAX, USERNAME_MIN, User, UserId, UserValidationError, Username,
};

/// HTTP header name used to propagate trace identifiers.
pub const TRACE_ID_HEADER: &str = "trace-id";
