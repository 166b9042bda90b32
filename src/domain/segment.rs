/// One recognized utterance span.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    /// Start offset in seconds from the beginning of the recording.
    pub start: f64,
    pub text: String,
}

/// Output of one transcription run, ordered by segment start time.
///
/// Ordering is the engine adapter's contract; consumers may rely on it.
#[derive(Debug, Clone)]
pub struct Transcript {
    /// ISO 639-1 language code reported by the engine.
    pub language: String,
    /// Confidence of the language decision, in [0, 1].
    pub language_prob: f32,
    pub segments: Vec<Segment>,
}

impl Transcript {
    /// All segment texts, trimmed and joined by a single space.
    pub fn full_text(&self) -> String {
        self.segments
            .iter()
            .map(|s| s.text.trim())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
