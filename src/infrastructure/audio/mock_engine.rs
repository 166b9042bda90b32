use std::path::Path;

use async_trait::async_trait;

use crate::application::ports::{TranscribeOptions, TranscriptionEngine, TranscriptionError};
use crate::domain::Transcript;

enum Behavior {
    Produce(Transcript),
    Fail(String),
}

/// Canned engine for tests: returns a fixed transcript or a fixed failure.
pub struct MockTranscriptionEngine {
    behavior: Behavior,
}

impl MockTranscriptionEngine {
    pub fn producing(transcript: Transcript) -> Self {
        Self {
            behavior: Behavior::Produce(transcript),
        }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            behavior: Behavior::Fail(message.into()),
        }
    }
}

#[async_trait]
impl TranscriptionEngine for MockTranscriptionEngine {
    async fn transcribe(
        &self,
        _audio_path: &Path,
        _options: &TranscribeOptions,
    ) -> Result<Transcript, TranscriptionError> {
        match &self.behavior {
            Behavior::Produce(transcript) => Ok(transcript.clone()),
            Behavior::Fail(message) => {
                Err(TranscriptionError::TranscriptionFailed(message.clone()))
            }
        }
    }
}
