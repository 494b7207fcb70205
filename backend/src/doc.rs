//! OpenAPI document for the registration service.
//!
//! Served through Swagger UI in debug builds.

use utoipa::OpenApi;

use crate::domain::{Error, ErrorCode};
use crate::inbound::http::registration::{AcceptedRegistrationResponse, RegistrationPayload};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Registration validation API",
        description = "Checks candidate usernames, emails and passwords against format, strength and uniqueness rules.",
        license(name = "ISC", url = "https://opensource.org/licenses/ISC")
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::registration::validate_registration,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        RegistrationPayload,
        AcceptedRegistrationResponse,
        Error,
        ErrorCode
    )),
    tags(
        (name = "registrations", description = "Registration input validation"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
