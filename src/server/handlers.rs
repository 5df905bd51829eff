use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::backend::Backend;
use crate::conversation::Conversation;
use crate::protocol::{GenerateRequest, GenerateResponse, HealthResponse};

use super::error::ApiError;
use super::welcome::WelcomePage;

/// Shared application state. Read-only once the server starts.
pub struct AppState {
    pub backend: Arc<dyn Backend>,
    pub welcome: WelcomePage,
}

/// Health check handler.
pub async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        backend: Some(state.backend.name().to_string()),
    })
}

/// Welcome page describing how to call the API.
pub async fn root(State(state): State<Arc<AppState>>) -> Response {
    state.welcome.render()
}

/// Text generation endpoint. The api key middleware has already run.
pub async fn generate_text(
    State(state): State<Arc<AppState>>,
    body: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let Json(req) = body?;
    let conversation = Conversation::new(req.prompt);
    let response = state.backend.complete(&conversation).await?;
    Ok(Json(GenerateResponse { response }))
}
