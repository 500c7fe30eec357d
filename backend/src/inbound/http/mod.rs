//! HTTP inbound adapter exposing the search API, HTML pages, and probes.

pub mod error;
pub mod health;
pub mod pages;
pub mod paging;
pub mod schemas;
pub mod state;
pub mod users;
pub mod view;

pub use error::{ApiResult, query_error_handler};
