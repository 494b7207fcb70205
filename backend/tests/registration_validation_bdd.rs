//! Behaviour tests for `POST /api/v1/registrations/validate`.
//!
//! Steps are synchronous; each request runs on a fresh actix system so the
//! handler sees the same task-local trace scope as in production.

use std::cell::RefCell;
use std::sync::Arc;

use actix_web::{App, test as actix_test, web};
use async_trait::async_trait;
use registration::Trace;
use registration::domain::ports::{FixtureUniquenessOracle, UniquenessOracle, UserLookupError};
use registration::domain::{EmailAddress, RegistrationValidationService, Username};
use registration::inbound::http::registration::{json_config, validate_registration};
use registration::inbound::http::state::HttpState;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use serde_json::{Value, json};

struct UnreachableStore;

#[async_trait]
impl UniquenessOracle for UnreachableStore {
    async fn exists_by_username(&self, _: &Username) -> Result<bool, UserLookupError> {
        Err(UserLookupError::connection("connection refused"))
    }

    async fn exists_by_email(&self, _: &EmailAddress) -> Result<bool, UserLookupError> {
        Err(UserLookupError::connection("connection refused"))
    }
}

#[derive(Default)]
struct RegistrationWorld {
    oracle: RefCell<Option<Arc<dyn UniquenessOracle>>>,
    password: RefCell<String>,
    response: RefCell<Option<(u16, Value)>>,
}

impl RegistrationWorld {
    fn with_response(&self, check: impl FnOnce(u16, &Value)) {
        let response = self.response.borrow();
        let (status, body) = response.as_ref().expect("a request was sent");
        check(*status, body);
    }
}

#[fixture]
fn world() -> RegistrationWorld {
    RegistrationWorld::default()
}

#[given("a user store holding username {username} and email {email}")]
fn a_user_store_holding(world: &RegistrationWorld, username: String, email: String) {
    let oracle = FixtureUniquenessOracle::default()
        .with_username(username)
        .with_email(email);
    world.oracle.replace(Some(Arc::new(oracle)));
}

#[given("a user store that cannot be reached")]
fn a_user_store_that_cannot_be_reached(world: &RegistrationWorld) {
    world.oracle.replace(Some(Arc::new(UnreachableStore)));
}

#[when("a client submits username {username}, email {email} and password {password}")]
fn a_client_submits(world: &RegistrationWorld, username: String, email: String, password: String) {
    let oracle = world.oracle.borrow().clone().expect("user store configured");
    let service = RegistrationValidationService::new(oracle);
    let state = web::Data::new(HttpState::new(Arc::new(service)));
    let body = json!({ "username": username, "email": email, "password": password });
    world.password.replace(password);

    let response = actix_web::rt::System::new().block_on(async move {
        let app = actix_test::init_service(
            App::new()
                .wrap(Trace)
                .app_data(state)
                .app_data(json_config())
                .service(web::scope("/api/v1").service(validate_registration)),
        )
        .await;
        let req = actix_test::TestRequest::post()
            .uri("/api/v1/registrations/validate")
            .set_json(body)
            .to_request();
        let res = actix_test::call_service(&app, req).await;
        let status = res.status().as_u16();
        let value: Value = actix_test::read_body_json(res).await;
        (status, value)
    });
    world.response.replace(Some(response));
}

#[then("the response status is {status}")]
fn the_response_status_is(world: &RegistrationWorld, status: u16) {
    world.with_response(|actual, _| assert_eq!(actual, status));
}

#[then("the response echoes username {username}")]
fn the_response_echoes_username(world: &RegistrationWorld, username: String) {
    world.with_response(|_, body| {
        assert_eq!(body.get("username").and_then(Value::as_str), Some(username.as_str()));
        assert!(body.get("password").is_none());
    });
}

#[then("the response does not contain the password")]
fn the_response_does_not_contain_the_password(world: &RegistrationWorld) {
    let password = world.password.borrow().clone();
    world.with_response(|_, body| assert!(!body.to_string().contains(&password)));
}

#[then("the error reports field {field} with code {code}")]
fn the_error_reports(world: &RegistrationWorld, field: String, code: String) {
    world.with_response(|_, body| {
        assert_eq!(
            body.pointer("/details/field").and_then(Value::as_str),
            Some(field.as_str())
        );
        assert_eq!(
            body.pointer("/details/code").and_then(Value::as_str),
            Some(code.as_str())
        );
        assert!(body.get("traceId").and_then(Value::as_str).is_some());
    });
}

#[scenario(path = "tests/features/registration_validation.feature", index = 0)]
fn accepts_unused_values(world: RegistrationWorld) {
    drop(world);
}

#[scenario(path = "tests/features/registration_validation.feature", index = 1)]
fn reports_first_failing_rule(world: RegistrationWorld) {
    drop(world);
}

#[scenario(path = "tests/features/registration_validation.feature", index = 2)]
fn stored_email_conflicts(world: RegistrationWorld) {
    drop(world);
}

#[scenario(path = "tests/features/registration_validation.feature", index = 3)]
fn failing_store_is_unavailable(world: RegistrationWorld) {
    drop(world);
}
