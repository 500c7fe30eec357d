//! Server-rendered HTML for the home and results pages.
//!
//! Markup is assembled by hand; every interpolated value passes through
//! [`escape_html`].

use crate::domain::{SEARCH_PARAM, SearchQuery, SearchResult, SearchState, USERS_PATH, User};

/// Title of the results page.
pub const RESULTS_TITLE: &str = "Epic Notes Users";
/// Message shown when a query matched nobody.
pub const NO_USERS_MESSAGE: &str = "No users found";

const HOME_TITLE: &str = "Epic Notes";

/// Escape text for safe use in element content and quoted attributes.
pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

fn search_form(query: &SearchQuery) -> String {
    let value = query.as_str().map(escape_html).unwrap_or_default();
    format!(
        concat!(
            r#"<form role="search" action="{action}" method="get">"#,
            r#"<input type="search" name="{name}" aria-label="Search" value="{value}">"#,
            r#"<button type="submit">Search</button>"#,
            "</form>",
        ),
        action = USERS_PATH,
        name = SEARCH_PARAM,
        value = value,
    )
}

fn document(title: &str, canonical: Option<&str>, body: &str) -> String {
    let link = canonical
        .map(|href| format!(r#"<link rel="canonical" href="{}">"#, escape_html(href)))
        .unwrap_or_default();
    format!(
        concat!(
            "<!DOCTYPE html>\n",
            r#"<html lang="en">"#,
            r#"<head><meta charset="utf-8"><title>{title}</title>{link}</head>"#,
            "<body>{body}</body>",
            "</html>\n",
        ),
        title = escape_html(title),
        link = link,
        body = body,
    )
}

fn user_item(user: &User) -> String {
    let label = escape_html(user.label());
    format!(
        r#"<li><img src="{src}" alt="{label}"><span>{label}</span></li>"#,
        src = escape_html(&user.image_url()),
        label = label,
    )
}

/// Render the home page holding the search form.
pub fn render_home() -> String {
    let body = format!(
        "<header><h1>{}</h1>{}</header>",
        escape_html(HOME_TITLE),
        search_form(&SearchQuery::Absent)
    );
    document(HOME_TITLE, None, &body)
}

/// Render the results page for `result`.
///
/// An empty result shows [`NO_USERS_MESSAGE`] and no list; otherwise the
/// users are listed in order. The two never appear together. The canonical
/// link carries the query so the page location can be rebuilt from it.
pub fn render_results(result: &SearchResult) -> String {
    let main = match result.state() {
        SearchState::Empty => format!("<p>{}</p>", escape_html(NO_USERS_MESSAGE)),
        SearchState::Default | SearchState::Populated => {
            let items: String = result.users().iter().map(user_item).collect();
            format!("<ul>{items}</ul>")
        }
    };

    let body = format!(
        "<header><h1>{title}</h1>{form}</header><main>{main}</main>",
        title = escape_html(RESULTS_TITLE),
        form = search_form(result.query()),
        main = main,
    );
    document(RESULTS_TITLE, Some(&result.query().location()), &body)
}

/// Render the results page for a search that could not run.
///
/// The form stays prefilled so the visitor can retry. The page shows
/// `message` as an alert and neither a user list nor [`NO_USERS_MESSAGE`].
pub fn render_failure(query: &SearchQuery, message: &str) -> String {
    let body = format!(
        r#"<header><h1>{title}</h1>{form}</header><main><p role="alert">{message}</p></main>"#,
        title = escape_html(RESULTS_TITLE),
        form = search_form(query),
        message = escape_html(message),
    );
    document(RESULTS_TITLE, None, &body)
}
