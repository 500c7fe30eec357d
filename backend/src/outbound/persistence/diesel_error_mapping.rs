//! Translation of pool and Diesel failures into [`UserPersistenceError`].

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use super::pool::PoolError;
use crate::domain::ports::UserPersistenceError;

/// Any pool failure means the store cannot be reached.
pub(crate) fn map_pool_error(error: PoolError) -> UserPersistenceError {
    debug!(%error, "user store pool failure");
    UserPersistenceError::connection(error.message())
}

/// Map a Diesel error raised by a read or delete.
pub(crate) fn map_diesel_error(error: DieselError) -> UserPersistenceError {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            UserPersistenceError::connection("database connection error")
        }
        DieselError::QueryBuilderError(_) => {
            UserPersistenceError::query("database query error")
        }
        _ => UserPersistenceError::query("database error"),
    }
}

/// Map a Diesel error raised by an insert, naming the username on conflict.
pub(crate) fn map_insert_error(error: DieselError, username: &str) -> UserPersistenceError {
    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            UserPersistenceError::duplicate(username)
        }
        other => map_diesel_error(other),
    }
}
