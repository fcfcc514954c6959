pub mod health;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::cors;
use crate::report::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    // Origin enforcement sits outermost so disallowed cross-origin requests
    // never reach the handlers.
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/generate-pdf", post(handlers::handle_generate_pdf))
        .with_state(state)
        .layer(cors::cors_layer())
        .layer(middleware::from_fn(cors::enforce_allowed_origin))
}
