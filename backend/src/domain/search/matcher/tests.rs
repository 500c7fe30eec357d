//! Tests for the record matcher.

use super::*;
use crate::domain::{ErrorCode, NewUser, SearchState};
use rstest::{fixture, rstest};

fn user(username: &str) -> User {
    let profile = NewUser::try_from_strings(username, None, None).expect("valid profile");
    User::new(UserId::random(), profile)
}

fn usernames(result: &SearchResult) -> Vec<&str> {
    result
        .users()
        .iter()
        .map(|user| user.username().as_ref())
        .collect()
}

#[fixture]
fn directory() -> Vec<User> {
    ["lola_lemur", "kody", "kody_koala", "rusty"]
        .into_iter()
        .map(user)
        .collect()
}

fn contains() -> MatchPolicy {
    MatchPolicy::new(MatchMode::Contains, CaseSensitivity::Sensitive)
}

#[rstest]
fn absent_query_returns_everyone_in_username_order(directory: Vec<User>) {
    let result =
        match_users(&SearchQuery::Absent, directory, MatchPolicy::default()).expect("match runs");

    assert_eq!(
        usernames(&result),
        ["kody", "kody_koala", "lola_lemur", "rusty"]
    );
    assert_eq!(result.state(), SearchState::Default);
}

#[rstest]
fn exact_query_returns_single_match(directory: Vec<User>) {
    let query = SearchQuery::normalize(Some("kody"));
    let result = match_users(&query, directory, MatchPolicy::default()).expect("match runs");

    assert_eq!(usernames(&result), ["kody"]);
    assert_eq!(result.state(), SearchState::Populated);
    assert_eq!(result.query(), &query);
}

#[rstest]
#[case("__nonexistent__")]
#[case("")]
#[case("kod")]
fn unmatched_query_yields_empty_result(directory: Vec<User>, #[case] text: &str) {
    let query = SearchQuery::normalize(Some(text));
    let result = match_users(&query, directory, MatchPolicy::default()).expect("match runs");

    assert!(result.users().is_empty());
    assert_eq!(result.state(), SearchState::Empty);
    assert_eq!(result.query(), &query);
}

#[rstest]
fn empty_snapshot_with_absent_query_is_default_not_empty() {
    let result = match_users(&SearchQuery::Absent, Vec::new(), MatchPolicy::default())
        .expect("match runs");
    assert_eq!(result.state(), SearchState::Default);
}

#[rstest]
#[case(CaseSensitivity::Sensitive, &[])]
#[case(CaseSensitivity::Insensitive, &["kody"])]
fn case_policy_controls_folding(
    directory: Vec<User>,
    #[case] case: CaseSensitivity,
    #[case] expected: &[&str],
) {
    let query = SearchQuery::normalize(Some("KODY"));
    let policy = MatchPolicy::new(MatchMode::Exact, case);
    let result = match_users(&query, directory, policy).expect("match runs");

    assert_eq!(usernames(&result), expected);
}

#[rstest]
#[case("kody", &["kody", "kody_koala"])]
#[case("_", &["kody_koala", "lola_lemur"])]
#[case("", &["kody", "kody_koala", "lola_lemur", "rusty"])]
#[case("zebra", &[])]
fn contains_mode_matches_substrings(
    directory: Vec<User>,
    #[case] text: &str,
    #[case] expected: &[&str],
) {
    let query = SearchQuery::normalize(Some(text));
    let result = match_users(&query, directory, contains()).expect("match runs");

    assert_eq!(usernames(&result), expected);
}

#[rstest]
fn matching_is_idempotent_and_order_independent(directory: Vec<User>) {
    let query = SearchQuery::normalize(Some("o"));
    let mut reversed = directory.clone();
    reversed.reverse();

    let first = match_users(&query, directory, contains()).expect("first run");
    let second = match_users(&query, reversed, contains()).expect("second run");

    assert_eq!(first, second);
}

#[rstest]
fn duplicate_usernames_in_snapshot_are_rejected(mut directory: Vec<User>) {
    directory.push(user("kody"));

    let err = match_users(&SearchQuery::Absent, directory, MatchPolicy::default())
        .expect_err("torn snapshot rejected");

    assert_eq!(err.code(), ErrorCode::InternalError);
    assert!(err.message().contains("duplicate username kody"));
}

#[rstest]
fn duplicate_ids_in_snapshot_are_rejected(mut directory: Vec<User>) {
    let copy = directory.first().cloned().expect("fixture has users");
    directory.push(copy);

    let err = match_users(&SearchQuery::Absent, directory, MatchPolicy::default())
        .expect_err("torn snapshot rejected");

    assert_eq!(err.code(), ErrorCode::InternalError);
    assert!(err.message().contains("duplicate user id"));
}

#[rstest]
#[case("exact", MatchMode::Exact)]
#[case("Contains", MatchMode::Contains)]
#[case(" exact ", MatchMode::Exact)]
fn match_mode_parses_names(#[case] raw: &str, #[case] expected: MatchMode) {
    assert_eq!(raw.parse::<MatchMode>(), Ok(expected));
}

#[rstest]
#[case("sensitive", CaseSensitivity::Sensitive)]
#[case("INSENSITIVE", CaseSensitivity::Insensitive)]
fn case_sensitivity_parses_names(#[case] raw: &str, #[case] expected: CaseSensitivity) {
    assert_eq!(raw.parse::<CaseSensitivity>(), Ok(expected));
}

#[rstest]
fn unknown_policy_names_are_rejected() {
    let err = "fuzzy".parse::<MatchMode>().expect_err("unknown mode");
    assert_eq!(err.to_string(), "unknown match mode `fuzzy`");
}

#[rstest]
fn second_exact_match_is_an_invariant_violation() {
    let matches = [user("kody"), user("kody_koala")];

    let violation = check_multiplicity("kody", &matches, MatchPolicy::default())
        .expect_err("two exact matches rejected");
    assert_eq!(
        violation,
        InvariantViolation::AmbiguousExactMatch {
            query: "kody".to_owned(),
            count: 2,
        }
    );

    let err: Error = violation.into();
    assert_eq!(err.code(), ErrorCode::InternalError);
    assert!(err.message().contains("matched 2 users"));
}

#[rstest]
#[case(MatchPolicy::default(), 1)]
#[case(contains(), 2)]
fn multiplicity_allows_single_exact_or_many_contains(
    #[case] policy: MatchPolicy,
    #[case] count: usize,
) {
    let matches: Vec<User> = ["kody", "kody_koala"].into_iter().take(count).map(user).collect();
    assert_eq!(check_multiplicity("kody", &matches, policy), Ok(()));
}
