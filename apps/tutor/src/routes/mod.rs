pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;
use crate::tutor::handlers;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/language-tutor",
            post(handlers::handle_tutor).fallback(handlers::handle_method_not_allowed),
        )
        .with_state(state)
}
