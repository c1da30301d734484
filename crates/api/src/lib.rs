//! Coachbot API composition root
//!
//! Composes the chat routes with shared infrastructure routes into a
//! single application router.

use axum::Router;

pub mod handlers;
pub mod routes;

pub use handlers::chat::{ChatRequest, ChatResponse};

/// Create the main application router with all routes
pub fn create_app() -> Router {
    Router::new()
        .route("/health", axum::routing::get(health_check))
        .route(
            "/",
            axum::routing::get(|| async { "Coachbot API v0.1.0" }),
        )
        .merge(routes::routes())
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_check() {
        assert_eq!(health_check().await, "OK");
    }

    #[test]
    fn test_create_app_builds_router() {
        let _app = create_app();
    }
}
