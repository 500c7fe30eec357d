//! Port abstraction for the user record store and its errors.
//!
//! The record store is mutated out of band (by seeding, tests, or other
//! services) while searches read it. Adapters must serve [`UserRepository::find_all`]
//! from one consistent snapshot so the matcher never observes a half-applied
//! write.

use async_trait::async_trait;

use crate::domain::{NewUser, User, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
        /// A user with the requested username already exists.
        Duplicate { username: String } => "username already taken: {username}",
    }
}

/// Port for creating, removing, and listing users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user and return it with its assigned identifier.
    ///
    /// Fails with [`UserPersistenceError::Duplicate`] when the username is
    /// already held by a live record.
    async fn create(&self, user: NewUser) -> Result<User, UserPersistenceError>;

    /// Remove the given users, returning how many records were deleted.
    ///
    /// Unknown identifiers are ignored.
    async fn delete_many(&self, ids: &[UserId]) -> Result<usize, UserPersistenceError>;

    /// Read every live user from a single point-in-time snapshot.
    async fn find_all(&self) -> Result<Vec<User>, UserPersistenceError>;
}
