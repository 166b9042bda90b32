use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::TranscriptionEngine;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub model: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Reports whether the model loaded at startup. This is the only way to
/// observe a permanently failed model load from the outside.
pub async fn health_handler<E>(State(state): State<AppState<E>>) -> impl IntoResponse
where
    E: TranscriptionEngine + 'static,
{
    if state.lyrics_service.is_some() {
        (
            StatusCode::OK,
            Json(HealthResponse {
                status: "ok".to_string(),
                model: state.settings.whisper.model.clone(),
            }),
        )
            .into_response()
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ErrorResponse {
                error: "Model not loaded".to_string(),
            }),
        )
            .into_response()
    }
}
