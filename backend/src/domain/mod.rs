//! Domain primitives, registration rules, and ports.
//!
//! Purpose: hold the transport-agnostic core. Types here never import actix
//! or diesel; adapters depend on the domain, not the other way round.
//!
//! Public surface:
//! - Error / ErrorCode: adapter-facing failure payload.
//! - TraceId: request-scoped correlation identifier.
//! - registration: request type, field newtypes, reason codes and the
//!   `validate` operation.
//! - ports: uniqueness oracle (driven) and registration validation (driving).

pub mod error;
pub mod ports;
pub mod registration;
pub mod trace_id;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::registration::{
    AcceptedRegistration, EmailAddress, Field, LookupUnavailable, Password, RegistrationRequest,
    RegistrationValidationService, Rejection, RejectionReason, Username, ValidationOutcome,
    validate,
};
pub use self::trace_id::TraceId;

/// HTTP header carrying the request trace identifier.
pub const TRACE_ID_HEADER: &str = "trace-id";
