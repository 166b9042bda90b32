mod mock_engine;
pub mod pcm_decoder;
mod whisper_engine;

pub use mock_engine::MockTranscriptionEngine;
pub use whisper_engine::WhisperEngine;
