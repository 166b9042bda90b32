mod audio_fetcher;
mod transcription_engine;
mod transcription_options;

pub use audio_fetcher::{AudioFetcher, FetchError};
pub use transcription_engine::{TranscriptionEngine, TranscriptionError};
pub use transcription_options::TranscribeOptions;
