//! User data model.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Maximum accepted length, in characters, for a user identifier.
pub const USER_ID_MAX: usize = 256;

/// Validation errors returned by [`UserId::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    EmptyId,
    SurroundingWhitespace,
    ControlCharacters,
    TooLong { max: usize },
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "user id must not be empty"),
            Self::SurroundingWhitespace => {
                write!(f, "user id must not start or end with whitespace")
            }
            Self::ControlCharacters => write!(f, "user id must not contain control characters"),
            Self::TooLong { max } => write!(f, "user id must be at most {max} characters"),
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Directory key identifying a user.
///
/// ## Invariants
/// - Non-empty once trimmed of whitespace.
/// - No leading or trailing whitespace and no control characters.
/// - At most [`USER_ID_MAX`] characters.
///
/// # Examples
/// ```
/// use user_directory::domain::UserId;
///
/// let id = UserId::new("Dummy User").expect("valid id");
/// assert_eq!(id.as_ref(), "Dummy User");
/// assert!(UserId::new("").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    /// Validate and construct a [`UserId`] from borrowed input.
    pub fn new(id: impl AsRef<str>) -> Result<Self, UserValidationError> {
        Self::from_owned(id.as_ref().to_owned())
    }

    fn from_owned(id: String) -> Result<Self, UserValidationError> {
        if id.trim().is_empty() {
            return Err(UserValidationError::EmptyId);
        }
        if id.trim() != id {
            return Err(UserValidationError::SurroundingWhitespace);
        }
        if id.chars().any(char::is_control) {
            return Err(UserValidationError::ControlCharacters);
        }
        if id.chars().count() > USER_ID_MAX {
            return Err(UserValidationError::TooLong { max: USER_ID_MAX });
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl TryFrom<String> for UserId {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Directory user.
///
/// Serialises as the stored directory item, `{"userId": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    user_id: UserId,
}

impl User {
    /// Build a user from a validated identifier.
    pub const fn new(user_id: UserId) -> Self {
        Self { user_id }
    }

    /// Stable user identifier.
    pub const fn user_id(&self) -> &UserId {
        &self.user_id
    }
}
