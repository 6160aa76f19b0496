//! User directory data model.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use zeroize::Zeroizing;

/// Validation errors returned by user constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    /// Name was blank once trimmed.
    EmptyName,
    /// Last name was blank once trimmed.
    EmptyLastname,
    /// Password was empty.
    EmptyPassword,
    /// Username was empty.
    EmptyUsername,
    /// Username contained whitespace.
    UsernameContainsWhitespace,
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "name must not be empty"),
            Self::EmptyLastname => write!(f, "lastname must not be empty"),
            Self::EmptyPassword => write!(f, "password must not be empty"),
            Self::EmptyUsername => write!(f, "username must not be empty"),
            Self::UsernameContainsWhitespace => {
                write!(f, "username must not contain whitespace")
            }
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Unique handle assigned to a user at registration.
///
/// ## Invariants
/// - Non-empty.
/// - Contains no whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    /// Validate and construct a [`Username`].
    pub fn new(username: impl Into<String>) -> Result<Self, UserValidationError> {
        Self::from_owned(username.into())
    }

    fn from_owned(username: String) -> Result<Self, UserValidationError> {
        if username.is_empty() {
            return Err(UserValidationError::EmptyUsername);
        }
        if username.chars().any(char::is_whitespace) {
            return Err(UserValidationError::UsernameContainsWhitespace);
        }
        Ok(Self(username))
    }

    /// Derive the `n`th collision candidate by appending a numeric suffix.
    ///
    /// # Examples
    /// ```
    /// use catapi_backend::domain::Username;
    ///
    /// let base = Username::new("johndoe").unwrap();
    /// assert_eq!(base.with_suffix(2).as_ref(), "johndoe2");
    /// ```
    #[must_use]
    pub fn with_suffix(&self, suffix: u64) -> Self {
        Self(format!("{}{suffix}", self.0))
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
        Self::from_owned(value)
    }
}

/// One-way digest of a password as persisted by the user store.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordDigest(String);

impl PasswordDigest {
    /// Wrap an already computed digest.
    pub fn new(digest: impl Into<String>) -> Self {
        Self(digest.into())
    }
}

impl AsRef<str> for PasswordDigest {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for PasswordDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordDigest(..)")
    }
}

/// Public view of a user; never carries password material.
///
/// # Examples
/// ```
/// use catapi_backend::domain::{UserProfile, Username};
///
/// let profile = UserProfile::new("John", "Doe", Username::new("johndoe").unwrap());
/// let json = serde_json::to_value(&profile).unwrap();
/// assert_eq!(json["username"], "johndoe");
/// assert!(json.get("password").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserProfile {
    #[schema(example = "John")]
    name: String,
    #[schema(example = "Doe")]
    lastname: String,
    #[schema(value_type = String, example = "johndoe")]
    username: Username,
}

impl UserProfile {
    /// Assemble a profile from its parts.
    pub fn new(name: impl Into<String>, lastname: impl Into<String>, username: Username) -> Self {
        Self {
            name: name.into(),
            lastname: lastname.into(),
            username,
        }
    }

    /// Given name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Family name.
    pub fn lastname(&self) -> &str {
        self.lastname.as_str()
    }

    /// Allocated username.
    pub fn username(&self) -> &Username {
        &self.username
    }
}

/// A user as persisted: profile plus password digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    profile: UserProfile,
    password_digest: PasswordDigest,
}

impl UserRecord {
    /// Pair a profile with its stored digest.
    pub fn new(profile: UserProfile, password_digest: PasswordDigest) -> Self {
        Self {
            profile,
            password_digest,
        }
    }

    /// Public view of the record.
    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    /// Digest used for credential lookups.
    pub fn password_digest(&self) -> &PasswordDigest {
        &self.password_digest
    }

    /// Drop the digest and keep the public view.
    pub fn into_profile(self) -> UserProfile {
        self.profile
    }
}

/// Validated registration input.
///
/// ## Invariants
/// - `name` and `lastname` are trimmed and non-empty.
/// - `password` is non-empty and kept verbatim.
#[derive(Clone, PartialEq, Eq)]
pub struct Registration {
    name: String,
    lastname: String,
    password: Zeroizing<String>,
}

impl Registration {
    /// Construct a registration from raw inputs.
    ///
    /// # Examples
    /// ```
    /// use catapi_backend::domain::{Registration, UserValidationError};
    ///
    /// assert!(Registration::try_from_parts("John", "Doe", "1234").is_ok());
    /// assert_eq!(
    ///     Registration::try_from_parts(" ", "Doe", "1234"),
    ///     Err(UserValidationError::EmptyName)
    /// );
    /// ```
    pub fn try_from_parts(
        name: &str,
        lastname: &str,
        password: &str,
    ) -> Result<Self, UserValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(UserValidationError::EmptyName);
        }
        let lastname = lastname.trim();
        if lastname.is_empty() {
            return Err(UserValidationError::EmptyLastname);
        }
        if password.is_empty() {
            return Err(UserValidationError::EmptyPassword);
        }
        Ok(Self {
            name: name.to_owned(),
            lastname: lastname.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Trimmed first name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Trimmed last name.
    pub fn lastname(&self) -> &str {
        self.lastname.as_str()
    }

    /// Password exactly as supplied.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("name", &self.name)
            .field("lastname", &self.lastname)
            .finish_non_exhaustive()
    }
}
