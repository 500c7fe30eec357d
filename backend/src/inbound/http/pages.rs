//! HTML page handlers.
//!
//! ```text
//! GET /
//! GET /users?search=kody
//! ```
//!
//! The results page runs the same search as the JSON API. Store failures,
//! broken invariants and bad paging render a failure page with the error's
//! status code, never a "No users found" page or an empty list.

use actix_web::http::header::{CacheControl, CacheDirective, ContentType};
use actix_web::{HttpRequest, HttpResponse, HttpResponseBuilder, ResponseError, get, web};
use tracing::warn;

use crate::domain::{Error, ErrorCode, SearchQuery, SearchResult, TRACE_ID_HEADER};
use crate::inbound::http::ApiResult;
use crate::inbound::http::paging::PageParams;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::view::{render_failure, render_home, render_results};

/// Alert shown when the record store or the matcher failed.
pub const SEARCH_FAILED_MESSAGE: &str = "Search is unavailable right now. Please try again.";
/// Alert shown when the paging parameters were rejected.
pub const INVALID_SEARCH_MESSAGE: &str = "The search request was not understood.";

fn html(mut builder: HttpResponseBuilder, body: String) -> HttpResponse {
    builder
        .content_type(ContentType::html())
        .insert_header(CacheControl(vec![CacheDirective::NoStore]))
        .body(body)
}

fn failure_page(query: &SearchQuery, error: &Error) -> HttpResponse {
    let status = error.status_code();
    warn!(status = status.as_u16(), query = %query, "search page failed");
    let message = match error.code() {
        ErrorCode::InvalidRequest => INVALID_SEARCH_MESSAGE,
        _ => SEARCH_FAILED_MESSAGE,
    };
    let mut builder = HttpResponse::build(status);
    if let Some(id) = error.trace_id() {
        builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
    }
    html(builder, render_failure(query, message))
}

async fn run_search(
    state: &HttpState,
    query: &SearchQuery,
    params: &PageParams,
) -> ApiResult<SearchResult> {
    let page = params.to_page(state.default_page_size)?;
    state.users.search_users(query, page).await
}

/// Home page with the search form.
#[get("/")]
pub async fn home() -> HttpResponse {
    html(HttpResponse::Ok(), render_home())
}

/// Results page for a username search.
#[get("/users")]
pub async fn users_page(
    state: web::Data<HttpState>,
    req: HttpRequest,
    params: web::Query<PageParams>,
) -> HttpResponse {
    let query = SearchQuery::from_query_string(req.query_string());
    match run_search(&state, &query, &params).await {
        Ok(result) => html(HttpResponse::Ok(), render_results(&result)),
        Err(error) => failure_page(&query, &error),
    }
}
