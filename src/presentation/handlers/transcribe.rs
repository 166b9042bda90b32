use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::ports::{FetchError, TranscribeOptions, TranscriptionEngine};
use crate::application::services::LyricsError;
use crate::domain::ShareLocation;
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct TranscribeRequest {
    pub smb_config: Option<SmbConfig>,
    pub language: Option<String>,
    pub initial_prompt: Option<String>,
}

#[derive(Deserialize)]
pub struct SmbConfig {
    pub host: String,
    pub share: String,
    pub username: String,
    pub password: String,
    pub file_path: String,
}

#[derive(Serialize)]
pub struct TranscribeResponse {
    pub language: String,
    pub language_prob: f32,
    pub segments: Vec<SegmentLine>,
    pub full_text: String,
}

#[derive(Serialize)]
pub struct SegmentLine {
    pub time: String,
    pub text: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[tracing::instrument(skip(state, request))]
pub async fn transcribe_handler<E>(
    State(state): State<AppState<E>>,
    Json(request): Json<TranscribeRequest>,
) -> impl IntoResponse
where
    E: TranscriptionEngine + 'static,
{
    let Some(service) = state.lyrics_service.as_ref() else {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ErrorResponse {
                error: "Model not initialized".to_string(),
            }),
        )
            .into_response();
    };

    let Some(smb) = request.smb_config else {
        tracing::warn!("Transcription request without smb_config");
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "smb_config is required".to_string(),
            }),
        )
            .into_response();
    };

    let location = ShareLocation::new(
        smb.host,
        smb.share,
        smb.username,
        smb.password,
        smb.file_path,
    );
    let options = TranscribeOptions {
        language: request.language,
        initial_prompt: request.initial_prompt,
    };

    tracing::info!(path = location.file_path(), "Transcribing remote audio");

    match service.transcribe_remote(&location, &options).await {
        Ok(sheet) => {
            let segments = sheet
                .lines
                .into_iter()
                .map(|l| SegmentLine {
                    time: l.time,
                    text: l.text,
                })
                .collect();

            (
                StatusCode::OK,
                Json(TranscribeResponse {
                    language: sheet.language,
                    language_prob: sheet.language_prob,
                    segments,
                    full_text: sheet.full_text,
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Transcription request failed");
            let (status, message) = error_response(&e);
            (
                status,
                Json(ErrorResponse {
                    error: message.to_string(),
                }),
            )
                .into_response()
        }
    }
}

// Failures carry full detail into the log above; the wire gets a generic
// message and a status code.
fn error_response(error: &LyricsError) -> (StatusCode, &'static str) {
    match error {
        LyricsError::Fetch(FetchError::NotFound(_)) => {
            (StatusCode::NOT_FOUND, "Remote file not found")
        }
        LyricsError::Fetch(_) | LyricsError::Scratch(_) => {
            (StatusCode::INTERNAL_SERVER_ERROR, "Audio retrieval failed")
        }
        LyricsError::Transcription(_) => {
            (StatusCode::INTERNAL_SERVER_ERROR, "Transcription failed")
        }
    }
}
