use std::path::PathBuf;
use std::sync::Arc;

use crate::application::ports::{
    AudioFetcher, FetchError, TranscribeOptions, TranscriptionEngine, TranscriptionError,
};
use crate::domain::{ShareLocation, Transcript, format_timestamp};

use super::scratch::ScratchFile;

/// Drives one transcription request end to end: stage the remote file,
/// run the engine, format the result. The scratch file is deleted on every
/// path out of `transcribe_remote`.
pub struct LyricsService<E>
where
    E: TranscriptionEngine,
{
    fetcher: Arc<dyn AudioFetcher>,
    engine: Arc<E>,
    scratch_dir: PathBuf,
}

impl<E> LyricsService<E>
where
    E: TranscriptionEngine,
{
    pub fn new(fetcher: Arc<dyn AudioFetcher>, engine: Arc<E>, scratch_dir: PathBuf) -> Self {
        Self {
            fetcher,
            engine,
            scratch_dir,
        }
    }

    pub async fn transcribe_remote(
        &self,
        location: &ShareLocation,
        options: &TranscribeOptions,
    ) -> Result<LyricsSheet, LyricsError> {
        let scratch = ScratchFile::allocate(&self.scratch_dir)?;

        let bytes = self.fetcher.fetch(location, scratch.path()).await?;
        tracing::info!(
            bytes,
            path = location.file_path(),
            "Remote audio staged for transcription"
        );

        let transcript = self.engine.transcribe(scratch.path(), options).await?;
        tracing::info!(
            segments = transcript.segments.len(),
            language = %transcript.language,
            "Transcription completed"
        );

        Ok(LyricsSheet::from_transcript(transcript))
    }
}

/// Wire-ready transcription result: LRC-stamped lines plus the joined text.
#[derive(Debug, Clone)]
pub struct LyricsSheet {
    pub language: String,
    pub language_prob: f32,
    pub lines: Vec<LyricLine>,
    pub full_text: String,
}

#[derive(Debug, Clone)]
pub struct LyricLine {
    pub time: String,
    pub text: String,
}

impl LyricsSheet {
    fn from_transcript(transcript: Transcript) -> Self {
        let full_text = transcript.full_text();
        let lines = transcript
            .segments
            .into_iter()
            .map(|s| LyricLine {
                time: format_timestamp(s.start),
                text: s.text.trim().to_string(),
            })
            .collect();

        Self {
            language: transcript.language,
            language_prob: transcript.language_prob,
            lines,
            full_text,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LyricsError {
    #[error("scratch allocation: {0}")]
    Scratch(#[from] std::io::Error),
    #[error("fetch: {0}")]
    Fetch(#[from] FetchError),
    #[error("transcription: {0}")]
    Transcription(#[from] TranscriptionError),
}
