//! Password strength rule.
//!
//! Checks run against the raw value; it is never formatted into logs, errors
//! or `Debug` output.

use std::fmt;

use zeroize::Zeroizing;

use super::RejectionReason;

/// Minimum password length in characters.
pub const PASSWORD_MIN: usize = 8;

/// Characters that satisfy the special-character requirement.
pub const PASSWORD_SPECIAL_CHARS: &str = r#"!@#$%^&*(),.?":{}|<>"#;

/// Password that passed every strength check.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(Zeroizing<String>);

impl Password {
    /// Apply the strength checks in order: length, uppercase, lowercase,
    /// digit, special character.
    ///
    /// # Examples
    /// ```
    /// use registration::domain::{Password, RejectionReason};
    ///
    /// assert!(Password::parse("SecurePass1!").is_ok());
    /// assert_eq!(
    ///     Password::parse("alllowercase1!"),
    ///     Err(RejectionReason::NeedsUppercase)
    /// );
    /// ```
    pub fn parse(raw: &str) -> Result<Self, RejectionReason> {
        if raw.chars().count() < PASSWORD_MIN {
            return Err(RejectionReason::TooShort { min: PASSWORD_MIN });
        }
        if !raw.chars().any(|c| c.is_ascii_uppercase()) {
            return Err(RejectionReason::NeedsUppercase);
        }
        if !raw.chars().any(|c| c.is_ascii_lowercase()) {
            return Err(RejectionReason::NeedsLowercase);
        }
        if !raw.chars().any(|c| c.is_ascii_digit()) {
            return Err(RejectionReason::NeedsDigit);
        }
        if !raw.chars().any(|c| PASSWORD_SPECIAL_CHARS.contains(c)) {
            return Err(RejectionReason::NeedsSpecial);
        }

        Ok(Self(Zeroizing::new(raw.to_owned())))
    }

    /// Raw secret for hashing. Never log or echo the returned value.
    #[must_use]
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(<redacted>)")
    }
}
