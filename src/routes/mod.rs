use axum::{
    Router,
    http::{HeaderValue, Method, header},
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

use crate::state::SharedState;

/// Swagger UI and OpenAPI document.
pub mod docs;
/// Healthcheck route.
pub mod health;
/// Round routes.
pub mod round;

/// Compose all route trees, wiring in shared state and documentation routes.
///
/// Round routes are served both at the root and under `/api`.
pub fn router(state: SharedState) -> Router<()> {
    let api_router = health::router()
        .merge(round::router())
        .nest("/api", round::router());

    api_router.merge(docs::router()).with_state(state)
}

/// Build the top-level router and attach cross-cutting middleware layers.
pub fn app(state: SharedState, allowed_origin: &str) -> Router<()> {
    router(state)
        .layer(cors_layer(allowed_origin))
        .layer(TraceLayer::new_for_http())
}

/// Restrict cross-origin access to `allowed_origin`; `*` allows every origin.
fn cors_layer(allowed_origin: &str) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    if allowed_origin.trim() == "*" {
        return base.allow_origin(Any);
    }

    match HeaderValue::from_str(allowed_origin.trim()) {
        Ok(origin) => base.allow_origin(AllowOrigin::list([origin])),
        Err(err) => {
            warn!(origin = allowed_origin, error = %err, "invalid allowed origin; cross-origin requests disabled");
            base
        }
    }
}
