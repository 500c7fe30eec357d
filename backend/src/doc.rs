//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the search endpoint, the health probes, and the
//! schema wrappers for domain types. The document backs Swagger UI in debug
//! builds and is exported by `cargo run --bin openapi-dump`.

use utoipa::OpenApi;

use crate::inbound::http::health::{ProbeResponse, ProbeStatus};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use crate::inbound::http::users::{SearchResponse, SearchStateDto, UserView};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User directory API",
        description = "Username search over the user directory, plus health probes.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::search_users,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        SearchResponse,
        SearchStateDto,
        UserView,
        ProbeResponse,
        ProbeStatus,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "users", description = "User search"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
