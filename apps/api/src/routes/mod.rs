pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::letters;
use crate::resume;
use crate::state::AppState;
use crate::users;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Profile API
        .route("/api/v1/users/sync", post(users::handlers::handle_sync))
        .route("/api/v1/users/me", get(users::handlers::handle_me))
        .route(
            "/api/v1/users/onboarding-status",
            get(users::handlers::handle_onboarding_status),
        )
        .route(
            "/api/v1/users/onboarding",
            put(users::handlers::handle_update_onboarding),
        )
        // Resume API (one resume per user)
        .route(
            "/api/v1/resume",
            get(resume::handlers::handle_get_resume).post(resume::handlers::handle_save_resume),
        )
        .route(
            "/api/v1/resume/improve",
            post(resume::handlers::handle_improve),
        )
        // Cover letter API
        .route(
            "/api/v1/cover-letters",
            post(letters::handlers::handle_generate).get(letters::handlers::handle_list),
        )
        .route(
            "/api/v1/cover-letters/:id",
            get(letters::handlers::handle_get).delete(letters::handlers::handle_delete),
        )
        .with_state(state)
}
