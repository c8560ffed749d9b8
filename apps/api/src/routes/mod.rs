pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::cv::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::handle_render_page))
        .route("/health", get(health::health_handler))
        .route("/api/v1/cv", get(handlers::handle_get_cv))
        .route("/api/v1/cv/experience", get(handlers::handle_get_experience))
        .route("/api/v1/durations", post(handlers::handle_compute_duration))
        .with_state(state)
}
