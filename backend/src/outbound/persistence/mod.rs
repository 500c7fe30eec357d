//! Record store adapters implementing [`UserRepository`].
//!
//! [`InMemoryUserRepository`] serves development and tests;
//! [`DieselUserRepository`] targets PostgreSQL through `diesel-async` and a
//! `bb8` pool. Row types and the table definition stay private to this
//! module.
//!
//! [`UserRepository`]: crate::domain::ports::UserRepository

mod diesel_error_mapping;
mod diesel_user_repository;
mod in_memory_user_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_user_repository::DieselUserRepository;
pub use in_memory_user_repository::InMemoryUserRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DEFAULT_CHECKOUT_TIMEOUT, DEFAULT_MAX_CONNECTIONS, DbPool, PoolConfig, PoolError};
