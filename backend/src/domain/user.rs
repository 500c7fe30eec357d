//! User data model.
//!
//! A user is identified by an opaque [`UserId`] and carries a unique
//! [`Username`], which is the key searched by the record matcher. The display
//! name and avatar are optional presentation details.

use std::fmt;

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use uuid::Uuid;

/// Validation errors returned by the user value constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    EmptyId,
    InvalidId,
    EmptyUsername,
    UsernameTooShort { min: usize },
    UsernameTooLong { max: usize },
    UsernameInvalidCharacters,
    EmptyDisplayName,
    DisplayNameTooLong { max: usize },
    EmptyAvatar,
    AvatarTooLong { max: usize },
    AvatarContainsWhitespace,
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "user id must not be empty"),
            Self::InvalidId => write!(f, "user id must be a valid UUID"),
            Self::EmptyUsername => write!(f, "username must not be empty"),
            Self::UsernameTooShort { min } => {
                write!(f, "username must be at least {min} characters")
            }
            Self::UsernameTooLong { max } => {
                write!(f, "username must be at most {max} characters")
            }
            Self::UsernameInvalidCharacters => write!(
                f,
                "username may only contain letters, numbers, or underscores",
            ),
            Self::EmptyDisplayName => write!(f, "display name must not be empty"),
            Self::DisplayNameTooLong { max } => {
                write!(f, "display name must be at most {max} characters")
            }
            Self::EmptyAvatar => write!(f, "avatar reference must not be empty"),
            Self::AvatarTooLong { max } => {
                write!(f, "avatar reference must be at most {max} characters")
            }
            Self::AvatarContainsWhitespace => {
                write!(f, "avatar reference must not contain whitespace")
            }
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Stable user identifier stored as a UUID.
///
/// Identifiers are assigned by the record store and returned from every
/// create so callers can clean up exactly the records they made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(Uuid);

impl UserId {
    /// Validate and construct a [`UserId`] from borrowed input.
    pub fn new(id: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let id = id.as_ref();
        if id.is_empty() {
            return Err(UserValidationError::EmptyId);
        }
        if id.trim() != id {
            return Err(UserValidationError::InvalidId);
        }
        Uuid::parse_str(id)
            .map(Self)
            .map_err(|_| UserValidationError::InvalidId)
    }

    /// Wrap an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Generate a new random [`UserId`].
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.0.to_string()
    }
}

impl TryFrom<String> for UserId {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Minimum allowed length for a username.
pub const USERNAME_MIN: usize = 3;
/// Maximum allowed length for a username.
pub const USERNAME_MAX: usize = 20;

static USERNAME_RE: OnceLock<Regex> = OnceLock::new();

fn username_regex() -> &'static Regex {
    USERNAME_RE.get_or_init(|| {
        // Length is enforced separately; this regex constrains allowed characters.
        let pattern = "^[a-z0-9_]+$";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("username regex failed to compile: {error}"))
    })
}

/// Unique, searchable handle for a user.
///
/// Usernames are stored in canonical lower-case form, so `Kody` and `kody`
/// name the same user.
///
/// # Examples
/// ```
/// use backend::domain::Username;
///
/// let username = Username::new("Kody_Koala").expect("valid username");
/// assert_eq!(username.as_ref(), "kody_koala");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    /// Validate and construct a [`Username`], lower-casing the input.
    pub fn new(username: impl Into<String>) -> Result<Self, UserValidationError> {
        let username = username.into().to_ascii_lowercase();
        if username.trim().is_empty() {
            return Err(UserValidationError::EmptyUsername);
        }

        let length = username.chars().count();
        if length < USERNAME_MIN {
            return Err(UserValidationError::UsernameTooShort { min: USERNAME_MIN });
        }
        if length > USERNAME_MAX {
            return Err(UserValidationError::UsernameTooLong { max: USERNAME_MAX });
        }

        if !username_regex().is_match(&username) {
            return Err(UserValidationError::UsernameInvalidCharacters);
        }

        Ok(Self(username))
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}

impl TryFrom<String> for Username {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Maximum allowed length for a display name.
pub const DISPLAY_NAME_MAX: usize = 64;

/// Human readable display name for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DisplayName(String);

impl DisplayName {
    /// Validate and construct a [`DisplayName`] from owned input.
    pub fn new(display_name: impl Into<String>) -> Result<Self, UserValidationError> {
        let display_name = display_name.into();
        if display_name.trim().is_empty() {
            return Err(UserValidationError::EmptyDisplayName);
        }
        if display_name.chars().count() > DISPLAY_NAME_MAX {
            return Err(UserValidationError::DisplayNameTooLong {
                max: DISPLAY_NAME_MAX,
            });
        }
        Ok(Self(display_name))
    }
}

impl AsRef<str> for DisplayName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<DisplayName> for String {
    fn from(value: DisplayName) -> Self {
        value.0
    }
}

impl TryFrom<String> for DisplayName {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Maximum allowed length for an avatar reference.
pub const AVATAR_MAX: usize = 128;
/// Path prefix under which avatar images are served.
pub const AVATAR_PATH_PREFIX: &str = "/resources/user-images";
/// Image shown for users without an avatar.
pub const PLACEHOLDER_AVATAR_URL: &str = "/img/user.png";

/// Opaque identifier of a stored avatar image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AvatarRef(String);

impl AvatarRef {
    /// Validate and construct an [`AvatarRef`].
    pub fn new(avatar: impl Into<String>) -> Result<Self, UserValidationError> {
        let avatar = avatar.into();
        if avatar.trim().is_empty() {
            return Err(UserValidationError::EmptyAvatar);
        }
        if avatar.chars().any(char::is_whitespace) {
            return Err(UserValidationError::AvatarContainsWhitespace);
        }
        if avatar.chars().count() > AVATAR_MAX {
            return Err(UserValidationError::AvatarTooLong { max: AVATAR_MAX });
        }
        Ok(Self(avatar))
    }

    /// Location from which the image is served.
    pub fn url(&self) -> String {
        format!("{AVATAR_PATH_PREFIX}/{}", self.0)
    }
}

impl AsRef<str> for AvatarRef {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<AvatarRef> for String {
    fn from(value: AvatarRef) -> Self {
        value.0
    }
}

impl TryFrom<String> for AvatarRef {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Application user as stored in the record store.
///
/// ## Invariants
/// - `id` is a valid UUID assigned by the record store.
/// - `username` is canonical and unique across live records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
#[serde(try_from = "UserDto", into = "UserDto")]
pub struct User {
    id: UserId,
    username: Username,
    name: Option<DisplayName>,
    avatar: Option<AvatarRef>,
}

impl User {
    /// Build a [`User`] from validated components.
    pub fn new(id: UserId, profile: NewUser) -> Self {
        let NewUser {
            username,
            name,
            avatar,
        } = profile;
        Self {
            id,
            username,
            name,
            avatar,
        }
    }

    /// Stable user identifier.
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Canonical username.
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Optional display name.
    pub fn name(&self) -> Option<&DisplayName> {
        self.name.as_ref()
    }

    /// Optional avatar reference.
    pub fn avatar(&self) -> Option<&AvatarRef> {
        self.avatar.as_ref()
    }

    /// Visible label: the display name, falling back to the username.
    ///
    /// The label doubles as the avatar's alternative text.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::{NewUser, User, UserId};
    ///
    /// let profile = NewUser::try_from_strings("kody", None, None).expect("valid profile");
    /// let user = User::new(UserId::random(), profile);
    /// assert_eq!(user.label(), "kody");
    /// ```
    pub fn label(&self) -> &str {
        self.name
            .as_ref()
            .map_or(self.username.as_ref(), AsRef::as_ref)
    }

    /// Avatar location, or the placeholder image when no avatar is set.
    pub fn image_url(&self) -> String {
        self.avatar
            .as_ref()
            .map_or_else(|| PLACEHOLDER_AVATAR_URL.to_owned(), AvatarRef::url)
    }
}

/// Creation payload for a user; the record store assigns the identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    username: Username,
    name: Option<DisplayName>,
    avatar: Option<AvatarRef>,
}

impl NewUser {
    /// Build a creation payload from validated components.
    pub fn new(username: Username, name: Option<DisplayName>, avatar: Option<AvatarRef>) -> Self {
        Self {
            username,
            name,
            avatar,
        }
    }

    /// Fallible constructor validating every component.
    pub fn try_from_strings(
        username: impl Into<String>,
        name: Option<&str>,
        avatar: Option<&str>,
    ) -> Result<Self, UserValidationError> {
        Ok(Self {
            username: Username::new(username)?,
            name: name.map(DisplayName::new).transpose()?,
            avatar: avatar.map(AvatarRef::new).transpose()?,
        })
    }

    /// Requested username.
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Requested display name.
    pub fn name(&self) -> Option<&DisplayName> {
        self.name.as_ref()
    }

    /// Requested avatar reference.
    pub fn avatar(&self) -> Option<&AvatarRef> {
        self.avatar.as_ref()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserDto {
    id: String,
    username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    avatar: Option<String>,
}

impl From<User> for UserDto {
    fn from(value: User) -> Self {
        let User {
            id,
            username,
            name,
            avatar,
        } = value;
        Self {
            id: id.into(),
            username: username.into(),
            name: name.map(Into::into),
            avatar: avatar.map(Into::into),
        }
    }
}

impl TryFrom<UserDto> for User {
    type Error = UserValidationError;

    fn try_from(value: UserDto) -> Result<Self, Self::Error> {
        let id = UserId::new(value.id)?;
        let profile = NewUser::try_from_strings(
            value.username,
            value.name.as_deref(),
            value.avatar.as_deref(),
        )?;
        Ok(User::new(id, profile))
    }
}
