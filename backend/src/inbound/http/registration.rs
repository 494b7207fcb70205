//! Registration validation endpoint.
//!
//! ```text
//! POST /api/v1/registrations/validate
//! {"username":"john_doe","email":"john@example.com","password":"SecurePass1!"}
//! ```

use actix_web::error::JsonPayloadError;
use actix_web::{HttpRequest, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

use crate::domain::{Error, RegistrationRequest};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Candidate registration values.
///
/// No `Debug`: the password must not reach logs through a stray `{:?}`. The
/// password string is moved, not copied, into the zeroizing request.
#[derive(Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationPayload {
    #[schema(example = "john_doe")]
    pub username: String,
    #[schema(example = "john@example.com")]
    pub email: String,
    #[schema(example = "SecurePass1!", format = Password)]
    pub password: String,
}

impl From<RegistrationPayload> for RegistrationRequest {
    fn from(payload: RegistrationPayload) -> Self {
        let RegistrationPayload {
            username,
            email,
            password,
        } = payload;
        Self::new(username, email, password)
    }
}

/// Values that passed validation. The password is never echoed.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, utoipa::ToSchema)]
pub struct AcceptedRegistrationResponse {
    #[schema(example = "john_doe")]
    pub username: String,
    #[schema(example = "john@example.com")]
    pub email: String,
}

/// Validate registration input without creating a user.
///
/// The first failing rule is reported in `details.field` and `details.code`.
#[utoipa::path(
    post,
    path = "/api/v1/registrations/validate",
    request_body = RegistrationPayload,
    responses(
        (status = 200, description = "All rules passed", body = AcceptedRegistrationResponse),
        (status = 400, description = "A field failed validation", body = Error),
        (status = 409, description = "Username or email already registered", body = Error),
        (status = 503, description = "User lookup unavailable", body = Error)
    ),
    tags = ["registrations"],
    operation_id = "validateRegistration"
)]
#[post("/registrations/validate")]
pub async fn validate_registration(
    state: web::Data<HttpState>,
    payload: web::Json<RegistrationPayload>,
) -> ApiResult<web::Json<AcceptedRegistrationResponse>> {
    let request = RegistrationRequest::from(payload.into_inner());
    let accepted = state.registration.validate(&request).await?;
    Ok(web::Json(AcceptedRegistrationResponse {
        username: accepted.username().to_string(),
        email: accepted.email().to_string(),
    }))
}

/// JSON extractor config that reports unreadable bodies in the domain error
/// shape instead of actix's plain-text default.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: JsonPayloadError, _req: &HttpRequest| {
        debug!(error = %err, "registration payload rejected");
        Error::invalid_request(
            "Request body must be a JSON object with username, email and password",
        )
        .with_details(json!({ "code": "malformed_body" }))
        .into()
    })
}
