//! Email rule: a syntactic sanity check, not RFC 5322.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use super::RejectionReason;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9.-]+$")
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Email address that matches the accepted pattern.
///
/// The pattern is local part of `[a-zA-Z0-9_.+-]`, then `@`, a label of
/// `[a-zA-Z0-9-]`, a dot, and a tail of `[a-zA-Z0-9.-]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Apply the email pattern check.
    ///
    /// # Examples
    /// ```
    /// use registration::domain::{EmailAddress, RejectionReason};
    ///
    /// assert!(EmailAddress::parse("john@example.com").is_ok());
    /// assert_eq!(EmailAddress::parse("not-an-email"), Err(RejectionReason::Format));
    /// ```
    pub fn parse(raw: &str) -> Result<Self, RejectionReason> {
        if email_regex().is_match(raw) {
            Ok(Self(raw.to_owned()))
        } else {
            Err(RejectionReason::Format)
        }
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("john@example.com")]
    #[case("john_doe@example.com")]
    #[case("first.last+tag@mail-host.co.uk")]
    #[case("a@b.c")]
    #[case("x@host.-")]
    fn accepts_pattern_matches(#[case] raw: &str) {
        let email = EmailAddress::parse(raw).expect("valid email");
        assert_eq!(email.as_ref(), raw);
    }

    #[rstest]
    #[case("")]
    #[case("not-an-email")]
    #[case("@example.com")]
    #[case("john@")]
    #[case("john@localhost")]
    #[case("john@sub_domain.com")]
    #[case("john doe@example.com")]
    #[case("john@@example.com")]
    #[case("john@example.com\n")]
    fn rejects_pattern_mismatches(#[case] raw: &str) {
        assert_eq!(EmailAddress::parse(raw), Err(RejectionReason::Format));
    }
}
