//! Record matching for user search.
//!
//! The matcher is a pure function over one snapshot of the record store. It
//! orders records by username, applies the [`MatchPolicy`] predicate, and
//! refuses snapshots or outcomes that break the uniqueness guarantees the
//! rest of the system relies on.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use tracing::error;

use super::{SearchQuery, SearchResult};
use crate::domain::{Error, User, UserId, Username};

/// How a present query is compared against usernames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// The username must equal the query. At most one record can match.
    #[default]
    Exact,
    /// The username must contain the query. An empty query matches everyone.
    Contains,
}

/// Whether letter case matters when comparing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseSensitivity {
    /// Compare the query as typed.
    #[default]
    Sensitive,
    /// Lower-case the query before comparing with canonical usernames.
    Insensitive,
}

/// Error returned when a policy name cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} `{value}`")]
pub struct UnknownPolicyValue {
    kind: &'static str,
    value: String,
}

impl FromStr for MatchMode {
    type Err = UnknownPolicyValue;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "exact" => Ok(Self::Exact),
            "contains" => Ok(Self::Contains),
            _ => Err(UnknownPolicyValue {
                kind: "match mode",
                value: value.to_owned(),
            }),
        }
    }
}

impl FromStr for CaseSensitivity {
    type Err = UnknownPolicyValue;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "sensitive" => Ok(Self::Sensitive),
            "insensitive" => Ok(Self::Insensitive),
            _ => Err(UnknownPolicyValue {
                kind: "case sensitivity",
                value: value.to_owned(),
            }),
        }
    }
}

/// Match predicate configuration.
///
/// The default, exact and case-sensitive, is the guaranteed contract;
/// substring matching and case folding are opt-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatchPolicy {
    mode: MatchMode,
    case: CaseSensitivity,
}

impl MatchPolicy {
    /// Build a policy from its parts.
    pub fn new(mode: MatchMode, case: CaseSensitivity) -> Self {
        Self { mode, case }
    }

    /// Comparison mode.
    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Case handling.
    pub fn case(&self) -> CaseSensitivity {
        self.case
    }

    fn prepare(&self, query: &str) -> String {
        match self.case {
            CaseSensitivity::Sensitive => query.to_owned(),
            CaseSensitivity::Insensitive => query.to_lowercase(),
        }
    }

    fn accepts(&self, username: &Username, needle: &str) -> bool {
        match self.mode {
            MatchMode::Exact => username.as_ref() == needle,
            MatchMode::Contains => username.as_ref().contains(needle),
        }
    }
}

/// Broken uniqueness guarantees detected while matching.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvariantViolation {
    /// The snapshot holds the same identifier twice.
    #[error("snapshot contains duplicate user id {id}")]
    DuplicateId {
        /// Repeated identifier.
        id: UserId,
    },
    /// The snapshot holds the same username twice.
    #[error("snapshot contains duplicate username {username}")]
    DuplicateUsername {
        /// Repeated username.
        username: Username,
    },
    /// An exact query matched more than one record.
    #[error("exact query {query} matched {count} users")]
    AmbiguousExactMatch {
        /// Query text.
        query: String,
        /// Number of matching records.
        count: usize,
    },
}

impl From<InvariantViolation> for Error {
    fn from(value: InvariantViolation) -> Self {
        Error::internal(value.to_string())
    }
}

/// Select the users matching `query` from one snapshot of the record store.
///
/// - [`SearchQuery::Absent`] returns every record.
/// - [`SearchQuery::Present`] returns the records whose username satisfies
///   `policy`; a miss yields an empty result, never an error.
///
/// Results are ordered by ascending username, so identical inputs always
/// produce identical outputs regardless of storage order.
///
/// # Errors
///
/// Returns an internal [`Error`] when the snapshot repeats an id or username,
/// or when an exact query matches more than one record. Matches are never
/// silently truncated.
///
/// # Examples
/// ```
/// use backend::domain::{MatchPolicy, NewUser, SearchQuery, User, UserId, match_users};
///
/// let users = ["kody", "lola"]
///     .into_iter()
///     .map(|name| {
///         let profile = NewUser::try_from_strings(name, None, None).expect("valid");
///         User::new(UserId::random(), profile)
///     })
///     .collect();
///
/// let query = SearchQuery::normalize(Some("kody"));
/// let result = match_users(&query, users, MatchPolicy::default()).expect("match runs");
/// assert_eq!(result.users().len(), 1);
/// assert_eq!(result.query(), &query);
/// ```
pub fn match_users(
    query: &SearchQuery,
    mut records: Vec<User>,
    policy: MatchPolicy,
) -> Result<SearchResult, Error> {
    check_snapshot(&records).map_err(report)?;
    records.sort_by(|left, right| left.username().cmp(right.username()));

    let SearchQuery::Present(text) = query else {
        return Ok(SearchResult::new(query.clone(), records));
    };

    let needle = policy.prepare(text);
    let matches: Vec<User> = records
        .into_iter()
        .filter(|user| policy.accepts(user.username(), &needle))
        .collect();

    check_multiplicity(text, &matches, policy).map_err(report)?;
    Ok(SearchResult::new(query.clone(), matches))
}

// Unreachable from `match_users` while `check_snapshot` holds, since usernames
// are unique and canonical.
fn check_multiplicity(
    text: &str,
    matches: &[User],
    policy: MatchPolicy,
) -> Result<(), InvariantViolation> {
    if policy.mode() == MatchMode::Exact && matches.len() > 1 {
        return Err(InvariantViolation::AmbiguousExactMatch {
            query: text.to_owned(),
            count: matches.len(),
        });
    }
    Ok(())
}

fn check_snapshot(records: &[User]) -> Result<(), InvariantViolation> {
    let mut ids = HashSet::with_capacity(records.len());
    let mut usernames = HashSet::with_capacity(records.len());
    for user in records {
        if !ids.insert(user.id()) {
            return Err(InvariantViolation::DuplicateId { id: user.id() });
        }
        if !usernames.insert(user.username()) {
            return Err(InvariantViolation::DuplicateUsername {
                username: user.username().clone(),
            });
        }
    }
    Ok(())
}

fn report(violation: InvariantViolation) -> Error {
    error!(violation = %violation, "user search invariant violated");
    violation.into()
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Exact => "exact",
            Self::Contains => "contains",
        })
    }
}

impl fmt::Display for CaseSensitivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Sensitive => "sensitive",
            Self::Insensitive => "insensitive",
        })
    }
}

#[cfg(test)]
mod tests;
