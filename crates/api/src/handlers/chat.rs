//! Chat API handler
//!
//! Thin transport wrapper around the reply engine. The `messages` field is
//! accepted as arbitrary JSON: anything malformed degrades to an empty
//! conversation inside the engine rather than failing the request. The
//! only surfaced failure is an unparseable request body.

use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde::{Deserialize, Serialize};

use coachbot_common::{Error, Result};
use coachbot_engine::{normalize, respond, WELCOME};

/// Request for computing a reply
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// Conversation history; intended to be a list of `{role, content}`
    /// pairs, but any JSON value is accepted
    #[serde(default)]
    pub messages: serde_json::Value,
}

/// Response carrying the assembled reply
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

/// Compute a reply for a conversation history
pub async fn chat(
    payload: std::result::Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>> {
    let Json(req) = payload
        .map_err(|rejection| Error::Validation(format!("Invalid request body: {}", rejection)))?;

    let conversation = normalize(&req.messages);
    tracing::info!(turns = conversation.len(), "computing reply");

    // An empty conversation gets the fixed greeting without invoking the
    // assembler
    let reply = if conversation.is_empty() {
        WELCOME.to_string()
    } else {
        respond(&conversation)
    };

    Ok(Json(ChatResponse { reply }))
}
