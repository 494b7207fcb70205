//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and depend only on the driving
//! port, so tests can swap in a double without any I/O.

use std::sync::Arc;

use crate::domain::ports::RegistrationValidation;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub registration: Arc<dyn RegistrationValidation>,
}

impl HttpState {
    /// Wrap a registration validation implementation.
    pub fn new(registration: Arc<dyn RegistrationValidation>) -> Self {
        Self { registration }
    }
}
