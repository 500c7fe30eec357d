//! Generated user seed types.
//!
//! This module defines the output types from user generation. These types are
//! independent of backend domain types to avoid circular dependencies.

use serde::{Deserialize, Serialize};

/// A generated example user record.
///
/// This type contains all the fields needed to create a user in the backend.
/// It carries no identifier: the record store assigns one on insert.
///
/// # Example
///
/// ```
/// use example_data::ExampleUserSeed;
/// ///
/// let user = ExampleUserSeed {
///     username: "ada_lovelace".to_owned(),
///     name: Some("Ada Lovelace".to_owned()),
///     avatar: None,
/// };
///
/// assert_eq!(user.label(), "Ada Lovelace");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExampleUserSeed {
    /// Canonical, unique username.
    pub username: String,
    /// Optional human-readable name.
    pub name: Option<String>,
    /// Optional avatar image identifier drawn from the registry.
    pub avatar: Option<String>,
}

impl ExampleUserSeed {
    /// Name shown for the user: the display name, or the username when absent.
    #[must_use]
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.username)
    }
}
