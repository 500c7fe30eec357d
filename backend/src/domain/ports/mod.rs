//! Domain ports defining the edges of the hexagon.
//!
//! Ports describe how the domain expects to interact with driven adapters
//! (the user record store) and how driving adapters (HTTP handlers) reach the
//! domain. Each trait exposes strongly typed errors so adapters map their
//! failures into predictable variants.

mod macros;
pub(crate) use macros::define_port_error;

mod user_repository;
mod users_query;

#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
#[cfg(test)]
pub use users_query::MockUsersQuery;
pub use users_query::UsersQuery;

#[cfg(test)]
mod tests;
