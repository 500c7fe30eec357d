//! Users search API handler.
//!
//! ```text
//! GET /api/v1/users?search=kody&limit=20&offset=0
//! ```

use actix_web::{HttpRequest, get, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{SearchQuery, SearchResult, SearchState, User};
use crate::inbound::http::ApiResult;
use crate::inbound::http::paging::PageParams;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// View state of a search response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SearchStateDto {
    /// No query was supplied.
    Default,
    /// The query matched at least one user.
    Populated,
    /// The query matched nothing.
    Empty,
}

impl From<SearchState> for SearchStateDto {
    fn from(value: SearchState) -> Self {
        match value {
            SearchState::Default => Self::Default,
            SearchState::Populated => Self::Populated,
            SearchState::Empty => Self::Empty,
        }
    }
}

/// One user as presented to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    /// Stable user identifier.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: String,
    /// Canonical username.
    #[schema(example = "kody")]
    pub username: String,
    /// Display name, when set.
    #[schema(example = "Kody")]
    pub name: Option<String>,
    /// Avatar location, or the placeholder image.
    #[schema(example = "/resources/user-images/kody-koala")]
    pub image_url: String,
    /// Alternative text for the avatar; the user's visible label.
    #[schema(example = "Kody")]
    pub image_alt: String,
}

impl From<&User> for UserView {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().to_string(),
            username: user.username().to_string(),
            name: user.name().map(ToString::to_string),
            image_url: user.image_url(),
            image_alt: user.label().to_owned(),
        }
    }
}

/// Search response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    /// Canonical query, or `null` when none was supplied.
    #[schema(example = "kody")]
    pub query: Option<String>,
    /// Which view the result drives.
    pub state: SearchStateDto,
    /// Results page location that reproduces this search.
    #[schema(example = "/users?search=kody")]
    pub location: String,
    /// Number of matches before paging.
    pub total: usize,
    /// Users on this page, ordered by username.
    pub users: Vec<UserView>,
}

impl From<&SearchResult> for SearchResponse {
    fn from(result: &SearchResult) -> Self {
        Self {
            query: result.query().as_str().map(str::to_owned),
            state: result.state().into(),
            location: result.query().location(),
            total: result.total(),
            users: result.users().iter().map(UserView::from).collect(),
        }
    }
}

/// Search users by username.
///
/// Without a `search` parameter every user is listed. With one, only users
/// whose username matches are returned; a miss yields `state: "empty"` and an
/// empty list rather than an error.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use backend::inbound::http::users::search_users;
///
/// let app = App::new().service(web::scope("/api/v1").service(search_users));
/// ```
#[utoipa::path(
    get,
    path = "/api/v1/users",
    params(
        ("search" = Option<String>, Query, description = "Username to search for"),
        PageParams
    ),
    responses(
        (status = 200, description = "Search results", body = SearchResponse),
        (status = 400, description = "Invalid paging parameters", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "User store unavailable", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "searchUsers"
)]
#[get("/users")]
pub async fn search_users(
    state: web::Data<HttpState>,
    req: HttpRequest,
    params: web::Query<PageParams>,
) -> ApiResult<web::Json<SearchResponse>> {
    let query = SearchQuery::from_query_string(req.query_string());
    let page = params.to_page(state.default_page_size)?;
    let result = state.users.search_users(&query, page).await?;
    Ok(web::Json(SearchResponse::from(&result)))
}
