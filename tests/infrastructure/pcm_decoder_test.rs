use std::f32::consts::PI;
use std::path::PathBuf;

use lyrebird::infrastructure::audio::pcm_decoder::decode_file_to_pcm;

fn write_sine_wav(dir: &tempfile::TempDir, sample_rate: u32, channels: u16, secs: f32) -> PathBuf {
    let path = dir.path().join("fixture.wav");
    let spec = hound::WavSpec {
        channels,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut writer = hound::WavWriter::create(&path, spec).unwrap();
    let frames = (sample_rate as f32 * secs) as u32;
    for i in 0..frames {
        let t = i as f32 / sample_rate as f32;
        let amplitude = (2.0 * PI * 440.0 * t).sin() * 0.5;
        let sample = (amplitude * i16::MAX as f32) as i16;
        for _ in 0..channels {
            writer.write_sample(sample).unwrap();
        }
    }
    writer.finalize().unwrap();
    path
}

#[test]
fn given_16khz_mono_wav_when_decoding_then_sample_count_matches_duration() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = write_sine_wav(&dir, 16_000, 1, 1.0);

    let pcm = decode_file_to_pcm(&path).unwrap();

    assert_eq!(pcm.len(), 16_000);
}

#[test]
fn given_8khz_wav_when_decoding_then_output_is_resampled_to_16khz() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = write_sine_wav(&dir, 8_000, 1, 1.0);

    let pcm = decode_file_to_pcm(&path).unwrap();

    // One second of audio lands close to the 16 kHz target after resampling.
    assert!(
        (15_000..=16_000).contains(&pcm.len()),
        "unexpected sample count: {}",
        pcm.len()
    );
}

#[test]
fn given_stereo_wav_when_decoding_then_channels_are_downmixed_to_mono() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = write_sine_wav(&dir, 16_000, 2, 0.5);

    let pcm = decode_file_to_pcm(&path).unwrap();

    assert_eq!(pcm.len(), 8_000);
}

#[test]
fn given_non_audio_bytes_when_decoding_then_returns_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("junk.wav");
    std::fs::write(&path, b"definitely not a riff header").unwrap();

    assert!(decode_file_to_pcm(&path).is_err());
}

#[test]
fn given_missing_file_when_decoding_then_returns_error() {
    let path = PathBuf::from("/nonexistent/audio.flac");
    assert!(decode_file_to_pcm(&path).is_err());
}
