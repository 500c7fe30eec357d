//! Username and display name validation mirroring backend constraints.
//!
//! These rules match the backend's `Username` and `DisplayName` types in
//! `backend/src/domain/user.rs`. Keeping them in sync ensures generated
//! records are always accepted when consumed by the backend.
//!
//! # Validation Rules
//!
//! - Usernames: 3 to 20 characters, lowercase ASCII letters, digits, or
//!   underscores
//! - Display names: non-blank, at most 64 characters

/// Minimum allowed length for a username.
pub const USERNAME_MIN: usize = 3;

/// Maximum allowed length for a username.
pub const USERNAME_MAX: usize = 20;

/// Maximum allowed length for a display name.
pub const DISPLAY_NAME_MAX: usize = 64;

/// Validates a canonical username against backend constraints.
///
/// # Examples
///
/// ```
/// use example_data::is_valid_username;
///
/// assert!(is_valid_username("kody_koala"));
/// assert!(is_valid_username("alice123"));
/// assert!(!is_valid_username("ab"));          // Too short
/// assert!(!is_valid_username("Alice"));       // Not canonical
/// assert!(!is_valid_username("o'brien"));     // Invalid character
/// ```
#[must_use]
pub fn is_valid_username(name: &str) -> bool {
    let length = name.chars().count();
    if !(USERNAME_MIN..=USERNAME_MAX).contains(&length) {
        return false;
    }
    name.chars().all(is_valid_username_char)
}

/// Validates a display name against backend constraints.
///
/// # Examples
///
/// ```
/// use example_data::is_valid_display_name;
///
/// assert!(is_valid_display_name("Ada Lovelace"));
/// assert!(is_valid_display_name("Zoë O'Brien"));
/// assert!(!is_valid_display_name("   "));
/// ```
#[must_use]
pub fn is_valid_display_name(name: &str) -> bool {
    !name.trim().is_empty() && name.chars().count() <= DISPLAY_NAME_MAX
}

const fn is_valid_username_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'
}

/// Folds a raw name into username form.
///
/// ASCII letters are lower-cased and every other disallowed character is
/// replaced with an underscore. Length constraints are not enforced.
#[must_use]
pub(crate) fn sanitize_username(name: &str) -> String {
    name.chars()
        .map(|c| {
            let lowered = c.to_ascii_lowercase();
            if is_valid_username_char(lowered) {
                lowered
            } else {
                '_'
            }
        })
        .collect()
}
