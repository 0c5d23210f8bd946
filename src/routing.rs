//! Application router configuration.

use axum::{
    Router,
    http::StatusCode,
    middleware,
    routing::{get, post},
};

use crate::{AppState, endpoints, logging::logging_middleware, webhook::receive_message};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::WHATSAPP_WEBHOOK, post(receive_message))
        .route(endpoints::HEALTH, get(get_health))
        .layer(middleware::from_fn(logging_middleware))
        .with_state(state)
}

async fn get_health() -> StatusCode {
    StatusCode::OK
}
