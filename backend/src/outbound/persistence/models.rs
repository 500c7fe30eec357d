//! Row types bridging the `users` table and the domain model.

use diesel::prelude::*;
use uuid::Uuid;

use super::schema::users;
use crate::domain::{NewUser, User, UserId, UserValidationError};

/// Row read from `users`. `created_at` is left to the database.
#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: Uuid,
    pub username: String,
    pub name: Option<String>,
    pub avatar: Option<String>,
}

/// Row written to `users`; `created_at` takes the column default.
#[derive(Debug, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub id: Uuid,
    pub username: &'a str,
    pub name: Option<&'a str>,
    pub avatar: Option<&'a str>,
}

impl<'a> NewUserRow<'a> {
    pub(crate) fn from_domain(id: UserId, user: &'a NewUser) -> Self {
        Self {
            id: *id.as_uuid(),
            username: user.username().as_ref(),
            name: user.name().map(AsRef::as_ref),
            avatar: user.avatar().map(AsRef::as_ref),
        }
    }
}

impl TryFrom<UserRow> for User {
    type Error = UserValidationError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let profile = NewUser::try_from_strings(
            &row.username,
            row.name.as_deref(),
            row.avatar.as_deref(),
        )?;
        Ok(User::new(UserId::from_uuid(row.id), profile))
    }
}
