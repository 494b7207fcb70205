//! Driving port for registration validation.
//!
//! Inbound adapters call this port with raw candidate values and receive
//! either the accepted triple or a domain [`Error`] carrying the field and
//! reason code in its details. Handler tests substitute a double instead of
//! wiring an oracle.

use async_trait::async_trait;

use crate::domain::{AcceptedRegistration, Error, RegistrationRequest};

/// Domain use-case port for validating registration input.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistrationValidation: Send + Sync {
    /// Run every registration rule and return the first failure as an error.
    async fn validate(&self, request: &RegistrationRequest) -> Result<AcceptedRegistration, Error>;
}
