//! Route definitions for the Coachbot API

use axum::{routing::post, Router};

use crate::handlers::chat;

/// Create all chat API routes
pub fn routes() -> Router {
    Router::new().route("/v1/chat", post(chat::chat))
}
