pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::pipeline::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Session lifecycle
        .route("/api/v1/sessions", post(handlers::handle_create_session))
        .route("/api/v1/sessions/:id", get(handlers::handle_get_session))
        // Pipeline stage triggers
        .route(
            "/api/v1/sessions/:id/keywords",
            post(handlers::handle_extract_keywords),
        )
        .route(
            "/api/v1/sessions/:id/resume",
            post(handlers::handle_upload_resume),
        )
        .route(
            "/api/v1/sessions/:id/review",
            post(handlers::handle_review),
        )
        .route(
            "/api/v1/sessions/:id/experiences",
            post(handlers::handle_submit_experiences),
        )
        .route("/api/v1/sessions/:id/fix", post(handlers::handle_fix))
        .route(
            "/api/v1/sessions/:id/handoff",
            post(handlers::handle_handoff),
        )
        // Conversation log
        .route("/api/v1/sessions/:id/log", get(handlers::handle_get_log))
        .route(
            "/api/v1/sessions/:id/log/save",
            post(handlers::handle_save_log),
        )
        .with_state(state)
}
