use std::path::Path;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use whisper_rs::{
    FullParams, SamplingStrategy, WhisperContext, WhisperContextParameters, WhisperState,
};

use crate::application::ports::{TranscribeOptions, TranscriptionEngine, TranscriptionError};
use crate::domain::{Segment, Transcript};

use super::pcm_decoder::decode_file_to_pcm;

/// `TranscriptionEngine` backed by whisper.cpp via whisper-rs.
///
/// The ggml model is loaded once at construction and shared across requests.
/// whisper.cpp inference is serialized behind a mutex; decoding and PCM
/// conversion run outside the lock, so concurrent requests only queue for
/// the model itself.
pub struct WhisperEngine {
    context: Arc<Mutex<WhisperContext>>,
}

impl WhisperEngine {
    pub fn load(model_path: &Path) -> Result<Self, TranscriptionError> {
        if !model_path.exists() {
            return Err(TranscriptionError::ModelLoadFailed(format!(
                "model file not found: {}",
                model_path.display()
            )));
        }

        let path_str = model_path.to_str().ok_or_else(|| {
            TranscriptionError::ModelLoadFailed("model path is not valid UTF-8".to_string())
        })?;

        let context =
            WhisperContext::new_with_params(path_str, WhisperContextParameters::default())
                .map_err(|e| TranscriptionError::ModelLoadFailed(e.to_string()))?;

        tracing::info!(model = %model_path.display(), "Whisper model loaded");

        Ok(Self {
            context: Arc::new(Mutex::new(context)),
        })
    }
}

#[async_trait]
impl TranscriptionEngine for WhisperEngine {
    async fn transcribe(
        &self,
        audio_path: &Path,
        options: &TranscribeOptions,
    ) -> Result<Transcript, TranscriptionError> {
        let context = Arc::clone(&self.context);
        let path = audio_path.to_path_buf();
        let options = options.clone();

        tokio::task::spawn_blocking(move || run_inference(&context, &path, &options))
            .await
            .map_err(|e| {
                TranscriptionError::TranscriptionFailed(format!("inference task failed: {}", e))
            })?
    }
}

fn run_inference(
    context: &Mutex<WhisperContext>,
    path: &Path,
    options: &TranscribeOptions,
) -> Result<Transcript, TranscriptionError> {
    let pcm = decode_file_to_pcm(path)?;
    let threads = inference_threads();

    let guard = context
        .lock()
        .map_err(|_| TranscriptionError::TranscriptionFailed("engine mutex poisoned".to_string()))?;
    let mut state = guard
        .create_state()
        .map_err(|e| TranscriptionError::TranscriptionFailed(format!("state: {}", e)))?;

    let (language, language_prob) = match options.language.clone() {
        Some(lang) => (lang, 1.0),
        None => detect_language(&mut state, &pcm, threads)?,
    };

    let mut params = FullParams::new(SamplingStrategy::BeamSearch {
        beam_size: 5,
        patience: -1.0,
    });
    params.set_language(Some(language.as_str()));
    if let Some(prompt) = options.initial_prompt.as_deref() {
        params.set_initial_prompt(prompt);
    }
    params.set_translate(false);
    params.set_print_special(false);
    params.set_print_progress(false);
    params.set_print_realtime(false);
    params.set_print_timestamps(false);
    params.set_suppress_blank(true);
    params.set_n_threads(threads as i32);

    state
        .full(params, &pcm)
        .map_err(|e| TranscriptionError::TranscriptionFailed(format!("inference: {}", e)))?;

    let count = state
        .full_n_segments()
        .map_err(|e| TranscriptionError::TranscriptionFailed(format!("segment count: {}", e)))?;

    let mut segments = Vec::with_capacity(count as usize);
    for i in 0..count {
        let text = state
            .full_get_segment_text(i)
            .map_err(|e| TranscriptionError::TranscriptionFailed(format!("segment text: {}", e)))?;
        // Segment timestamps are in centiseconds.
        let start = state
            .full_get_segment_t0(i)
            .map_err(|e| TranscriptionError::TranscriptionFailed(format!("segment time: {}", e)))?
            as f64
            / 100.0;
        segments.push(Segment { start, text });
    }

    // Contract with the orchestrator: start times are non-decreasing.
    segments.sort_by(|a, b| a.start.total_cmp(&b.start));

    Ok(Transcript {
        language,
        language_prob,
        segments,
    })
}

/// Auto-detect the spoken language from the mel spectrogram, returning the
/// top candidate and its probability.
fn detect_language(
    state: &mut WhisperState,
    pcm: &[f32],
    threads: usize,
) -> Result<(String, f32), TranscriptionError> {
    state
        .pcm_to_mel(pcm, threads)
        .map_err(|e| TranscriptionError::TranscriptionFailed(format!("mel spectrogram: {}", e)))?;

    let probs = state
        .lang_detect(0, threads)
        .map_err(|e| TranscriptionError::TranscriptionFailed(format!("language detection: {}", e)))?;

    let (lang_id, prob) = probs
        .1
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.total_cmp(b.1))
        .map(|(i, p)| (i, *p))
        .unwrap_or((0, 0.0));

    let language = whisper_rs::get_lang_str(lang_id as i32)
        .unwrap_or("en")
        .to_string();

    Ok((language, prob))
}

fn inference_threads() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
        .min(4)
}
