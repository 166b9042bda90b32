mod settings;

pub use settings::{ScratchSettings, ServerSettings, Settings, WhisperSettings};
