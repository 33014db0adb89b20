use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use tracing::info;

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse},
    services::generator::Generation,
    state::SharedState,
};

/// Fixed reply when the model answers without producing any text.
const EMPTY_REPLY: &str = "Sorry, I could not generate a response.";

pub async fn chat_handler(
    State(state): State<SharedState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    // Malformed JSON, a missing or non-string "message" field, and a
    // blank message all get the same 400.
    let Ok(Json(payload)) = payload else {
        return Err(AppError::InvalidRequest);
    };

    let message = payload.message.trim();
    if message.is_empty() {
        return Err(AppError::InvalidRequest);
    }

    info!("received message: {message}");

    let reply = match state.generator.generate_content(message).await {
        Ok(Generation::Text(text)) => text,
        Ok(Generation::Empty) => EMPTY_REPLY.to_string(),
        Err(err) => return Err(AppError::Upstream(err)),
    };

    info!("sending response: {reply}");

    Ok(Json(ChatResponse { response: reply }))
}
