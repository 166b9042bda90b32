use std::path::PathBuf;

/// Runtime configuration, read once from the environment at startup.
#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub whisper: WhisperSettings,
    pub scratch: ScratchSettings,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct WhisperSettings {
    /// Model size name, e.g. `tiny`, `base`, `small`.
    pub model: String,
    pub model_dir: PathBuf,
}

#[derive(Debug, Clone)]
pub struct ScratchSettings {
    pub dir: PathBuf,
}

impl Settings {
    pub fn from_env() -> Self {
        let port = std::env::var("SERVER_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(5001);
        let host = std::env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let model = std::env::var("WHISPER_MODEL").unwrap_or_else(|_| "tiny".to_string());
        let model_dir = std::env::var("WHISPER_MODEL_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("models"));

        let scratch_dir = std::env::var("SCRATCH_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| std::env::temp_dir().join("lyrebird"));

        Self {
            server: ServerSettings { host, port },
            whisper: WhisperSettings { model, model_dir },
            scratch: ScratchSettings { dir: scratch_dir },
        }
    }
}

impl WhisperSettings {
    /// Resolve the ggml model file for the configured size, following the
    /// whisper.cpp naming convention.
    pub fn model_path(&self) -> PathBuf {
        self.model_dir.join(format!("ggml-{}.bin", self.model))
    }
}
