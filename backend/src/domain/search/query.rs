//! Query normalisation for user search.
//!
//! A search request either carries a `search` parameter or it does not. The
//! two cases drive different views (the default listing versus a filtered
//! result) so they are kept apart as [`SearchQuery::Absent`] and
//! [`SearchQuery::Present`]. A present but empty parameter is a valid,
//! degenerate search and never collapses into `Absent`.

use std::fmt;

use url::form_urlencoded;

/// Path of the results page every search lands on.
pub const USERS_PATH: &str = "/users";
/// Name of the query-string parameter carrying the search term.
pub const SEARCH_PARAM: &str = "search";

/// Canonical search term, or its explicit absence.
///
/// # Examples
/// ```
/// use backend::domain::SearchQuery;
///
/// assert_eq!(SearchQuery::normalize(None), SearchQuery::Absent);
/// assert_eq!(
///     SearchQuery::normalize(Some("  kody ")),
///     SearchQuery::Present("kody".to_owned())
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum SearchQuery {
    /// No search parameter was supplied.
    #[default]
    Absent,
    /// A search parameter was supplied; holds the canonical text.
    Present(String),
}

impl SearchQuery {
    /// Canonicalise a raw search term taken from the request boundary.
    ///
    /// Surrounding whitespace is trimmed. Interior text is kept verbatim and
    /// treated as opaque, so sentinel strings such as `__nonexistent__`
    /// survive untouched. This function has no error cases.
    pub fn normalize(raw: Option<&str>) -> Self {
        match raw {
            None => Self::Absent,
            Some(text) => Self::Present(text.trim().to_owned()),
        }
    }

    /// Extract the search term from a raw URL-encoded query string.
    ///
    /// Only the first `search` parameter is considered. A query string
    /// without it yields [`SearchQuery::Absent`], while `search=` yields an
    /// empty [`SearchQuery::Present`].
    ///
    /// # Examples
    /// ```
    /// use backend::domain::SearchQuery;
    ///
    /// let query = SearchQuery::from_query_string("search=ada+lovelace&limit=5");
    /// assert_eq!(query.as_str(), Some("ada lovelace"));
    /// assert_eq!(SearchQuery::from_query_string("limit=5"), SearchQuery::Absent);
    /// ```
    pub fn from_query_string(query_string: &str) -> Self {
        let raw = form_urlencoded::parse(query_string.trim_start_matches('?').as_bytes())
            .find(|(key, _)| key == SEARCH_PARAM)
            .map(|(_, value)| value.into_owned());
        Self::normalize(raw.as_deref())
    }

    /// Canonical text, or `None` when no query was supplied.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Absent => None,
            Self::Present(text) => Some(text.as_str()),
        }
    }

    /// Whether a search term was supplied.
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Location of the results page for this query.
    ///
    /// Feeding the query string of the returned location back through
    /// [`SearchQuery::from_query_string`] yields an equal query.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::SearchQuery;
    ///
    /// let query = SearchQuery::normalize(Some("kody"));
    /// assert_eq!(query.location(), "/users?search=kody");
    /// assert_eq!(SearchQuery::Absent.location(), "/users");
    /// ```
    pub fn location(&self) -> String {
        match self {
            Self::Absent => USERS_PATH.to_owned(),
            Self::Present(text) => {
                let encoded = form_urlencoded::Serializer::new(String::new())
                    .append_pair(SEARCH_PARAM, text)
                    .finish();
                format!("{USERS_PATH}?{encoded}")
            }
        }
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => f.write_str("<absent>"),
            Self::Present(text) => write!(f, "{text:?}"),
        }
    }
}
