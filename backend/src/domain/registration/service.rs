//! Domain service implementing the [`RegistrationValidation`] driving port.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::warn;

use crate::domain::Error;
use crate::domain::ports::{RegistrationValidation, UniquenessOracle};

use super::{
    AcceptedRegistration, LookupUnavailable, RegistrationRequest, Rejection, RejectionReason,
    ValidationOutcome, validate,
};

/// Registration validation backed by an optional uniqueness oracle.
///
/// The oracle handle is lent to [`validate`] for each call. Adapters behind it
/// are stateless (pool-backed), so no session outlives a single lookup.
#[derive(Clone, Default)]
pub struct RegistrationValidationService {
    oracle: Option<Arc<dyn UniquenessOracle>>,
}

impl RegistrationValidationService {
    /// Validate with duplicate checks against `oracle`.
    pub fn new(oracle: Arc<dyn UniquenessOracle>) -> Self {
        Self {
            oracle: Some(oracle),
        }
    }

    /// Validate syntactic rules only; duplicate checks are skipped.
    #[must_use]
    pub fn without_oracle() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RegistrationValidation for RegistrationValidationService {
    async fn validate(&self, request: &RegistrationRequest) -> Result<AcceptedRegistration, Error> {
        match validate(request, self.oracle.as_deref()).await {
            Ok(ValidationOutcome::Accepted(accepted)) => Ok(accepted),
            Ok(ValidationOutcome::Rejected(rejection)) => Err(map_rejection(rejection)),
            Err(unavailable) => Err(map_lookup_unavailable(&unavailable)),
        }
    }
}

fn map_rejection(rejection: Rejection) -> Error {
    let details = json!({
        "field": rejection.field().as_str(),
        "code": rejection.reason().code(),
    });
    let error = match rejection.reason() {
        RejectionReason::Duplicate => Error::conflict(rejection.message()),
        _ => Error::invalid_request(rejection.message()),
    };
    error.with_details(details)
}

fn map_lookup_unavailable(unavailable: &LookupUnavailable) -> Error {
    warn!(
        field = unavailable.field().as_str(),
        error = %unavailable.lookup_error(),
        "user lookup unavailable during registration validation"
    );
    Error::service_unavailable("user lookup unavailable").with_details(json!({
        "field": unavailable.field().as_str(),
        "code": "lookup_unavailable",
    }))
}
