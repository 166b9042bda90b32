use std::f32::consts::PI;
use std::path::{Path, PathBuf};

use lyrebird::application::ports::{TranscribeOptions, TranscriptionEngine, TranscriptionError};
use lyrebird::infrastructure::audio::WhisperEngine;

#[test]
fn given_missing_model_file_when_loading_then_returns_model_load_error() {
    let result = WhisperEngine::load(Path::new("/nonexistent/ggml-tiny.bin"));

    assert!(matches!(
        result,
        Err(TranscriptionError::ModelLoadFailed(_))
    ));
}

fn model_path() -> PathBuf {
    let dir = std::env::var("WHISPER_MODEL_DIR").unwrap_or_else(|_| "models".to_string());
    PathBuf::from(dir).join("ggml-tiny.bin")
}

fn write_fixture(dir: &tempfile::TempDir) -> PathBuf {
    let path = dir.path().join("fixture.wav");
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: 16_000,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut writer = hound::WavWriter::create(&path, spec).unwrap();
    for i in 0..(16_000 * 3) {
        let t = i as f32 / 16_000.0;
        let amplitude = (2.0 * PI * 440.0 * t).sin() * 0.3;
        writer
            .write_sample((amplitude * i16::MAX as f32) as i16)
            .unwrap();
    }
    writer.finalize().unwrap();
    path
}

#[tokio::test]
#[ignore] // Requires a ggml model file under WHISPER_MODEL_DIR.
async fn given_three_second_fixture_when_transcribing_then_result_is_well_formed() {
    let engine = WhisperEngine::load(&model_path()).expect("failed to load model");

    let dir = tempfile::TempDir::new().unwrap();
    let audio = write_fixture(&dir);

    let options = TranscribeOptions {
        language: Some("en".to_string()),
        initial_prompt: None,
    };
    let transcript = engine.transcribe(&audio, &options).await.unwrap();

    assert_eq!(transcript.language, "en");
    assert!((0.0..=1.0).contains(&transcript.language_prob));
    for pair in transcript.segments.windows(2) {
        assert!(pair[0].start <= pair[1].start);
    }
    if let Some(first) = transcript.segments.first() {
        assert!(first.start >= 0.0);
    }
}
