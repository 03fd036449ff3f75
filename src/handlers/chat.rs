use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::services::agent;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

#[derive(Serialize)]
pub struct ChatResponse {
    pub response: String,
    pub timestamp: String,
}

// POST /chat
pub async fn chat(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let message = req.message.trim();
    if message.is_empty() {
        return Err(AppError::Validation("No message provided".to_string()));
    }

    tracing::info!(message = %message, "incoming chat message");
    let response = agent::process_message(&state, message).await;

    Ok(Json(ChatResponse {
        response,
        timestamp: Local::now().format("%H:%M").to_string(),
    }))
}
