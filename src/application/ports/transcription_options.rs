/// Caller-supplied hints biasing recognition.
#[derive(Debug, Clone, Default)]
pub struct TranscribeOptions {
    /// ISO 639-1 code pinning the spoken language; `None` auto-detects.
    pub language: Option<String>,
    /// Priming text biasing vocabulary and style.
    pub initial_prompt: Option<String>,
}
