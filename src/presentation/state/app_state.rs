use std::sync::Arc;

use crate::application::ports::TranscriptionEngine;
use crate::application::services::LyricsService;
use crate::presentation::config::Settings;

/// Shared handler state. `lyrics_service` is `None` when the model failed to
/// load at startup; handlers then answer 503 instead of crashing the process.
pub struct AppState<E>
where
    E: TranscriptionEngine,
{
    pub lyrics_service: Option<Arc<LyricsService<E>>>,
    pub settings: Settings,
}

impl<E> Clone for AppState<E>
where
    E: TranscriptionEngine,
{
    fn clone(&self) -> Self {
        Self {
            lyrics_service: self.lyrics_service.clone(),
            settings: self.settings.clone(),
        }
    }
}
