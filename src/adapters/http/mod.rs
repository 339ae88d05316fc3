//! HTTP adapters - REST API implementations.
//!
//! [`api_router`] assembles the full application: the todo resource under
//! `/api/v1/todos`, a liveness probe at `/health`, and the tower-http stack
//! (request ids, tracing, timeout, CORS, compression).

pub mod health;
pub mod todo;

use axum::{body::Body, routing::get, Router};
use http::{header, HeaderName, HeaderValue, Method, Request};
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::{info_span, warn};

use crate::config::ServerConfig;

// Re-export key types for convenience
pub use todo::todo_routes;
pub use todo::TodoAppState;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Builds the application router with all middleware applied.
pub fn api_router(state: TodoAppState, server: &ServerConfig) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    let middleware = ServiceBuilder::new()
        .layer(SetRequestIdLayer::new(request_id.clone(), MakeRequestUuid))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                let request_id = request
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");
                info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = %request_id,
                )
            }),
        )
        .layer(PropagateRequestIdLayer::new(request_id))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(cors_layer(server));

    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api/v1/todos", todo_routes(state))
        .layer(middleware)
}

/// CORS is only opened for explicitly configured origins.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .into_iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring unparseable CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        return CorsLayer::new();
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, HeaderName::from_static(REQUEST_ID_HEADER)])
}
