//! Username rule.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use super::RejectionReason;

/// Minimum username length in characters.
pub const USERNAME_MIN: usize = 3;
/// Maximum username length in characters.
pub const USERNAME_MAX: usize = 30;

static USERNAME_RE: OnceLock<Regex> = OnceLock::new();

fn username_regex() -> &'static Regex {
    USERNAME_RE.get_or_init(|| {
        // Length is enforced separately; this regex constrains allowed characters.
        Regex::new("^[A-Za-z0-9_]+$")
            .unwrap_or_else(|error| panic!("username regex failed to compile: {error}"))
    })
}

/// Username that passed the length and charset checks.
///
/// Uniqueness is not part of this type; see
/// [`validate`](super::validate).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    /// Apply the syntactic username checks in order: length, then charset.
    ///
    /// # Examples
    /// ```
    /// use registration::domain::{RejectionReason, Username};
    ///
    /// assert!(Username::parse("john_doe").is_ok());
    /// assert_eq!(Username::parse("john doe"), Err(RejectionReason::Charset));
    /// ```
    pub fn parse(raw: &str) -> Result<Self, RejectionReason> {
        let length = raw.chars().count();
        if !(USERNAME_MIN..=USERNAME_MAX).contains(&length) {
            return Err(RejectionReason::Length {
                min: USERNAME_MIN,
                max: USERNAME_MAX,
            });
        }

        if !username_regex().is_match(raw) {
            return Err(RejectionReason::Charset);
        }

        Ok(Self(raw.to_owned()))
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}
