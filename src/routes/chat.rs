use axum::{Json, body::Bytes, extract::State};
use serde_json::Value;

use crate::{
    error::AppError,
    message::{ChatResponse, Message},
    services::chatbot::generate_reply,
    state::SharedState,
};

const INVALID_FORMAT: &str = "Invalid request format";

pub async fn chat_handler(
    State(state): State<SharedState>,
    body: Bytes,
) -> Result<Json<ChatResponse>, AppError> {
    // The Content-Type header is not checked; only the body has to be JSON.
    let body: Value = serde_json::from_slice(&body).map_err(|e| {
        tracing::debug!("Unparseable chat body: {e}");
        AppError::BadRequest(INVALID_FORMAT.to_string())
    })?;
    let history = parse_history(body)?;

    // Simulate thinking.
    let delay = state.thinking.draw(&mut rand::rng());
    tokio::time::sleep(delay).await;

    let message = generate_reply(&history, &mut rand::rng());
    Ok(Json(ChatResponse { message }))
}

/// `messages` must be an array of `{role, content}` objects. Any other
/// shape, including malformed elements, is a bad request.
pub fn parse_history(mut body: Value) -> Result<Vec<Message>, AppError> {
    let messages = match body.get_mut("messages").map(Value::take) {
        Some(messages @ Value::Array(_)) => messages,
        _ => return Err(AppError::BadRequest(INVALID_FORMAT.to_string())),
    };

    serde_json::from_value(messages).map_err(|e| {
        tracing::debug!("Malformed message in history: {e}");
        AppError::BadRequest(INVALID_FORMAT.to_string())
    })
}
