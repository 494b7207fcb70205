//! Middleware that scopes every request to a [`TraceId`].
//!
//! A well-formed UUID in the inbound `trace-id` header is reused so callers
//! can correlate across hops; otherwise a fresh identifier is generated. The
//! identifier is echoed on every response, errors included.

use std::task::{Context, Poll};

use actix_web::Error;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{HeaderName, HeaderValue};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use tracing::{Instrument, error, info_span};

use crate::domain::{TRACE_ID_HEADER, TraceId};

/// Wraps an actix app so handlers observe [`TraceId::current`].
///
/// # Examples
/// ```
/// use actix_web::App;
/// use registration::Trace;
///
/// let _app = App::new().wrap(Trace);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Trace;

impl<S, B> Transform<S, ServiceRequest> for Trace
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = TraceMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(TraceMiddleware { service }))
    }
}

/// Service produced by [`Trace`].
pub struct TraceMiddleware<S> {
    service: S,
}

fn inbound_trace_id(req: &ServiceRequest) -> Option<TraceId> {
    req.headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|raw| raw.parse().ok())
}

impl<S, B> Service<ServiceRequest> for TraceMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let trace_id = inbound_trace_id(&req).unwrap_or_else(TraceId::generate);
        let span = info_span!(
            "request",
            trace_id = %trace_id,
            method = %req.method(),
            path = req.path(),
        );
        let fut = TraceId::scope(trace_id, self.service.call(req));
        Box::pin(
            async move {
                let mut res = fut.await?;
                match HeaderValue::from_str(&trace_id.to_string()) {
                    Ok(value) => {
                        res.response_mut()
                            .headers_mut()
                            .insert(HeaderName::from_static(TRACE_ID_HEADER), value);
                    }
                    Err(error) => {
                        error!(%error, "failed to encode trace identifier header");
                    }
                }
                Ok(res)
            }
            .instrument(span),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, HttpResponse, test, web};
    use rstest::rstest;

    async fn call_with(
        req: test::TestRequest,
    ) -> ServiceResponse<actix_web::body::BoxBody> {
        let app = test::init_service(App::new().wrap(Trace).route(
            "/",
            web::get().to(|| async {
                let id = TraceId::current().map(|id| id.to_string()).unwrap_or_default();
                HttpResponse::Ok().body(id)
            }),
        ))
        .await;
        test::call_service(&app, req.uri("/").to_request()).await
    }

    fn header(res: &ServiceResponse<actix_web::body::BoxBody>) -> String {
        res.headers()
            .get(TRACE_ID_HEADER)
            .expect("trace id header")
            .to_str()
            .expect("ascii header")
            .to_owned()
    }

    #[rstest]
    #[actix_web::test]
    async fn handler_sees_the_trace_id_echoed_in_the_header() {
        let res = call_with(test::TestRequest::get()).await;
        let echoed = header(&res);

        let body = test::read_body(res).await;
        assert_eq!(std::str::from_utf8(&body).expect("utf8"), echoed);
        assert!(echoed.parse::<TraceId>().is_ok());
    }

    #[rstest]
    #[actix_web::test]
    async fn reuses_a_valid_inbound_trace_id() {
        let inbound = "7f0c2a1e-3b9d-4c55-8e21-0d6a9b4f1c3e";
        let res =
            call_with(test::TestRequest::get().insert_header((TRACE_ID_HEADER, inbound))).await;

        assert_eq!(header(&res), inbound);
    }

    #[rstest]
    #[actix_web::test]
    async fn replaces_a_malformed_inbound_trace_id() {
        let res =
            call_with(test::TestRequest::get().insert_header((TRACE_ID_HEADER, "not-a-uuid")))
                .await;

        let echoed = header(&res);
        assert_ne!(echoed, "not-a-uuid");
        assert!(echoed.parse::<TraceId>().is_ok());
    }
}
