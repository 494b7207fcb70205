//! Driven port answering existence questions against stored users.
//!
//! The oracle is passed into each validation call and never parked in global
//! state. Implementations must be read-only and must not hold a connection
//! across calls; each lookup acquires what it needs and releases it before
//! returning.

use std::collections::HashSet;

use async_trait::async_trait;

use crate::domain::{EmailAddress, Username};

use super::define_port_error;

define_port_error! {
    /// Failures raised while looking up stored users.
    pub enum UserLookupError {
        /// The backing store could not be reached.
        Connection { message: String } => "user lookup connection failed: {message}",
        /// The lookup query failed during execution.
        Query { message: String } => "user lookup query failed: {message}",
    }
}

/// Read-only capability: "is this value already taken?".
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UniquenessOracle: Send + Sync {
    /// Whether a stored user already has this username.
    async fn exists_by_username(&self, username: &Username) -> Result<bool, UserLookupError>;

    /// Whether a stored user already has this email address.
    async fn exists_by_email(&self, email: &EmailAddress) -> Result<bool, UserLookupError>;
}

/// In-memory oracle seeded with known usernames and emails.
///
/// Used by tests and by the server when no database is configured, in which
/// case nothing is ever reported as taken.
///
/// # Examples
/// ```
/// use registration::domain::ports::{FixtureUniquenessOracle, UniquenessOracle};
/// use registration::domain::Username;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let oracle = FixtureUniquenessOracle::default().with_username("john_doe");
/// let taken = Username::parse("john_doe").unwrap();
/// assert!(oracle.exists_by_username(&taken).await.unwrap());
/// # });
/// ```
#[derive(Debug, Default, Clone)]
pub struct FixtureUniquenessOracle {
    usernames: HashSet<String>,
    emails: HashSet<String>,
}

impl FixtureUniquenessOracle {
    /// Mark a username as taken.
    #[must_use]
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.usernames.insert(username.into());
        self
    }

    /// Mark an email address as taken.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.emails.insert(email.into());
        self
    }
}

#[async_trait]
impl UniquenessOracle for FixtureUniquenessOracle {
    async fn exists_by_username(&self, username: &Username) -> Result<bool, UserLookupError> {
        Ok(self.usernames.contains(username.as_ref()))
    }

    async fn exists_by_email(&self, email: &EmailAddress) -> Result<bool, UserLookupError> {
        Ok(self.emails.contains(email.as_ref()))
    }
}
