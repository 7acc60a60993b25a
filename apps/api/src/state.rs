use std::sync::Arc;

use sqlx::PgPool;

use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Generation client behind a trait object so tests can substitute a stub.
    pub llm: Arc<dyn TextGenerator>,
}
