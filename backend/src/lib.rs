//! Registration validation backend.
//!
//! Layout follows a hexagonal split: [`domain`] owns the field rules and the
//! ports they depend on, [`inbound`] translates HTTP requests into domain
//! calls, and [`outbound`] implements ports against PostgreSQL.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
