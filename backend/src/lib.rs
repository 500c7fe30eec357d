//! User directory library: username search over a shared record store.
//!
//! The crate follows a hexagonal layout. [`domain`] holds the query
//! normaliser, the record matcher, and the ports; [`inbound`] adapts HTTP to
//! the [`domain::ports::UsersQuery`] port; [`outbound`] implements the
//! [`domain::ports::UserRepository`] port.

pub mod doc;
pub mod domain;
#[cfg(feature = "example-data")]
pub mod example_data;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
