//! Server construction and middleware wiring.

mod config;

pub use config::{ServerConfig, ServerSettings};

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::{info, warn};

use registration::Trace;
#[cfg(debug_assertions)]
use registration::doc::ApiDoc;
use registration::domain::RegistrationValidationService;
use registration::domain::ports::{FixtureUniquenessOracle, RegistrationValidation};
use registration::inbound::http::health::{HealthState, live, ready};
use registration::inbound::http::registration::{json_config, validate_registration};
use registration::inbound::http::state::HttpState;
use registration::outbound::persistence::{DbPool, DieselUniquenessOracle};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

/// Choose the uniqueness oracle behind the registration service.
///
/// Without a database nothing is ever reported as taken.
fn build_registration_service(db_pool: Option<DbPool>) -> Arc<dyn RegistrationValidation> {
    let service = if let Some(pool) = db_pool {
        RegistrationValidationService::new(Arc::new(DieselUniquenessOracle::new(pool)))
    } else {
        warn!("no database configured; duplicate checks run against an empty user set");
        RegistrationValidationService::new(Arc::new(FixtureUniquenessOracle::default()))
    };
    Arc::new(service)
}

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let api = web::scope("/api/v1")
        .app_data(json_config())
        .service(validate_registration);

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(api)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Bind the listener and mark the service ready.
///
/// # Errors
///
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let ServerConfig { bind_addr, db_pool } = config;
    let http_state = web::Data::new(HttpState::new(build_registration_service(db_pool)));
    let readiness = health_state.clone();

    let server = HttpServer::new(move || build_app(health_state.clone(), http_state.clone()))
        .bind(bind_addr)?
        .run();

    info!(%bind_addr, "registration server listening");
    readiness.mark_ready();
    Ok(server)
}
