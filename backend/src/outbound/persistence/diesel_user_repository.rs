//! PostgreSQL-backed [`UserRepository`] using Diesel.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;
use uuid::Uuid;

use super::diesel_error_mapping::{map_diesel_error, map_insert_error, map_pool_error};
use super::models::{NewUserRow, UserRow};
use super::pool::DbPool;
use super::schema::users;
use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{NewUser, User, UserId};

/// Diesel adapter over the `users` table.
///
/// `find_all` runs as a single statement, so PostgreSQL serves it from one
/// snapshot even while other sessions insert or delete.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a repository backed by `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let id = UserId::random();
        let row = NewUserRow::from_domain(id, &user);

        diesel::insert_into(users::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map_err(|err| map_insert_error(err, user.username().as_ref()))?;

        debug!(%id, "user created");
        Ok(User::new(id, user))
    }

    async fn delete_many(&self, ids: &[UserId]) -> Result<usize, UserPersistenceError> {
        if ids.is_empty() {
            return Ok(0);
        }
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let uuids: Vec<Uuid> = ids.iter().map(|id| *id.as_uuid()).collect();

        let removed = diesel::delete(users::table.filter(users::id.eq_any(uuids)))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        debug!(requested = ids.len(), removed, "users deleted");
        Ok(removed)
    }

    async fn find_all(&self) -> Result<Vec<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<UserRow> = users::table
            .select(UserRow::as_select())
            .order(users::username.asc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter()
            .map(User::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| UserPersistenceError::query(format!("invalid user row: {err}")))
    }
}
