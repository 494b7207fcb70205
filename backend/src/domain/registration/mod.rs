//! Registration input validation.
//!
//! A [`RegistrationRequest`] carries raw candidate values. [`validate`]
//! applies the username, email and password rules in that order, consulting an
//! optional [`UniquenessOracle`](crate::domain::ports::UniquenessOracle) for
//! duplicates, and returns the first failure as a [`Rejection`].
//!
//! Each field rule is also usable on its own through the newtype constructors
//! [`Username::parse`], [`EmailAddress::parse`] and [`Password::parse`].

use std::fmt;

use zeroize::Zeroizing;

use crate::domain::ports::UserLookupError;

mod email;
mod password;
mod service;
mod username;
mod validator;

pub use email::EmailAddress;
pub use password::{PASSWORD_MIN, PASSWORD_SPECIAL_CHARS, Password};
pub use service::RegistrationValidationService;
pub use username::{USERNAME_MAX, USERNAME_MIN, Username};
pub use validator::validate;

/// Registration field a rule applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Account handle.
    Username,
    /// Contact address.
    Email,
    /// Login secret.
    Password,
}

impl Field {
    /// Stable identifier used in error details.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::Email => "email",
            Self::Password => "password",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a field failed validation.
///
/// Each variant maps to one stable reason code via [`RejectionReason::code`],
/// independent of display text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectionReason {
    /// Character count outside `min..=max`.
    Length { min: usize, max: usize },
    /// Contains characters outside the permitted set.
    Charset,
    /// Does not match the expected syntactic pattern.
    Format,
    /// Already present in the user store.
    Duplicate,
    /// Fewer than `min` characters.
    TooShort { min: usize },
    /// No uppercase ASCII letter.
    NeedsUppercase,
    /// No lowercase ASCII letter.
    NeedsLowercase,
    /// No ASCII digit.
    NeedsDigit,
    /// No character from [`PASSWORD_SPECIAL_CHARS`].
    NeedsSpecial,
}

impl RejectionReason {
    /// Machine-readable reason code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Length { .. } => "length",
            Self::Charset => "charset",
            Self::Format => "format",
            Self::Duplicate => "duplicate",
            Self::TooShort { .. } => "too_short",
            Self::NeedsUppercase => "needs_uppercase",
            Self::NeedsLowercase => "needs_lowercase",
            Self::NeedsDigit => "needs_digit",
            Self::NeedsSpecial => "needs_special",
        }
    }
}

/// First failing rule: which field, and why.
///
/// The rendered message never includes the candidate value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rejection {
    field: Field,
    reason: RejectionReason,
}

impl Rejection {
    /// Pair a field with the reason it was rejected.
    #[must_use]
    pub const fn new(field: Field, reason: RejectionReason) -> Self {
        Self { field, reason }
    }

    /// Field that failed.
    #[must_use]
    pub const fn field(&self) -> Field {
        self.field
    }

    /// Reason the field failed.
    #[must_use]
    pub const fn reason(&self) -> RejectionReason {
        self.reason
    }

    /// Default user-facing message for this rejection.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use RejectionReason as R;

        match (self.field, self.reason) {
            (Field::Username, R::Length { min, max }) => {
                write!(f, "Username must be between {min} and {max} characters")
            }
            (Field::Username, R::Charset) => write!(
                f,
                "Username can only contain letters, numbers, and underscores"
            ),
            (Field::Username, R::Duplicate) => write!(f, "Username already registered"),
            (Field::Email, R::Format) => write!(f, "Invalid email address"),
            (Field::Email, R::Duplicate) => write!(f, "Email already registered"),
            (Field::Password, R::TooShort { min }) => {
                write!(f, "Password must be at least {min} characters long")
            }
            (Field::Password, R::NeedsUppercase) => {
                write!(f, "Password must contain at least one uppercase letter")
            }
            (Field::Password, R::NeedsLowercase) => {
                write!(f, "Password must contain at least one lowercase letter")
            }
            (Field::Password, R::NeedsDigit) => {
                write!(f, "Password must contain at least one digit")
            }
            (Field::Password, R::NeedsSpecial) => {
                write!(f, "Password must contain at least one special character")
            }
            (field, reason) => write!(f, "{field} is invalid ({})", reason.code()),
        }
    }
}

/// Raw candidate values for one registration attempt.
///
/// ## Invariants
/// - Fields are private and never mutated after construction.
/// - The password is wiped from memory on drop and redacted from `Debug`.
///
/// # Examples
/// ```
/// use registration::domain::RegistrationRequest;
///
/// let request = RegistrationRequest::new("john_doe", "john@example.com", "SecurePass1!");
/// assert_eq!(request.username(), "john_doe");
/// assert!(!format!("{request:?}").contains("SecurePass1!"));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct RegistrationRequest {
    username: String,
    email: String,
    password: Zeroizing<String>,
}

impl RegistrationRequest {
    /// Capture candidate values without validating them.
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: Zeroizing::new(password.into()),
        }
    }

    /// Candidate username.
    #[must_use]
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Candidate email address.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Candidate password. Never log or echo the returned value.
    #[must_use]
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

impl fmt::Debug for RegistrationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationRequest")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Values that passed every rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedRegistration {
    username: Username,
    email: EmailAddress,
    password: Password,
}

impl AcceptedRegistration {
    pub(crate) fn new(username: Username, email: EmailAddress, password: Password) -> Self {
        Self {
            username,
            email,
            password,
        }
    }

    /// Accepted username.
    #[must_use]
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Accepted email address.
    #[must_use]
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Accepted password.
    #[must_use]
    pub fn password(&self) -> &Password {
        &self.password
    }

    /// Split into the validated triple.
    #[must_use]
    pub fn into_parts(self) -> (Username, EmailAddress, Password) {
        (self.username, self.email, self.password)
    }
}

/// Result of running the registration rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// Every rule passed.
    Accepted(AcceptedRegistration),
    /// The first rule that failed.
    Rejected(Rejection),
}

impl ValidationOutcome {
    /// Whether every rule passed.
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    /// The rejection, if validation failed.
    #[must_use]
    pub const fn rejection(&self) -> Option<&Rejection> {
        match self {
            Self::Accepted(_) => None,
            Self::Rejected(rejection) => Some(rejection),
        }
    }

    /// Convert into a `Result` for `?`-style callers.
    pub fn into_result(self) -> Result<AcceptedRegistration, Rejection> {
        match self {
            Self::Accepted(accepted) => Ok(accepted),
            Self::Rejected(rejection) => Err(rejection),
        }
    }
}

/// The uniqueness oracle failed while checking `field`.
///
/// Kept distinct from [`Rejection`]: a failed lookup is never treated as
/// "not a duplicate".
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field} lookup unavailable: {source}")]
pub struct LookupUnavailable {
    field: Field,
    source: UserLookupError,
}

impl LookupUnavailable {
    pub(crate) const fn new(field: Field, source: UserLookupError) -> Self {
        Self { field, source }
    }

    /// Field whose duplicate check failed.
    #[must_use]
    pub const fn field(&self) -> Field {
        self.field
    }

    /// Underlying lookup failure.
    #[must_use]
    pub const fn lookup_error(&self) -> &UserLookupError {
        &self.source
    }
}
