use std::path::Path;

use async_trait::async_trait;

use crate::domain::Transcript;

use super::TranscribeOptions;

/// Speech-to-text engine boundary.
///
/// The engine holds whatever model state it needs internally; one instance is
/// loaded at startup and shared read-only across requests. Returned segments
/// are ordered by non-decreasing start time.
#[async_trait]
pub trait TranscriptionEngine: Send + Sync {
    async fn transcribe(
        &self,
        audio_path: &Path,
        options: &TranscribeOptions,
    ) -> Result<Transcript, TranscriptionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("audio decoding failed: {0}")]
    DecodingFailed(String),
    #[error("transcription failed: {0}")]
    TranscriptionFailed(String),
    #[error("model loading failed: {0}")]
    ModelLoadFailed(String),
}
