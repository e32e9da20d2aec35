use std::time::Duration;

use sfconv::{render_tone, to_wav_bytes, ConversionConfig, ConversionTables, PanTableMode, ToneParams};

mod common;
use common::{channel_peak, dominant_frequency};

const SAMPLE_RATE: u32 = 44100;
const FFT_SIZE: usize = 16384;

fn left_channel(frames: &[[f32; 2]]) -> Vec<f32> {
    frames.iter().take(FFT_SIZE).map(|f| f[0]).collect()
}

#[test]
fn test_rendered_pitch_matches_cents() {
    let tables = ConversionTables::new();
    let bin_width = SAMPLE_RATE as f32 / FFT_SIZE as f32;

    for (cents, expected_hz) in [(5700.0, 220.0), (6900.0, 440.0), (8100.0, 880.0), (7600.0, 659.26)] {
        let params = ToneParams {
            pitch: cents,
            sample_rate: SAMPLE_RATE,
            ..ToneParams::default()
        };
        let frames = render_tone(&tables, &params).unwrap();
        let measured = dominant_frequency(&left_channel(&frames), SAMPLE_RATE);

        println!("{} cents: expected {:.2} Hz, measured {:.2} Hz", cents, expected_hz, measured);
        assert!(
            (measured - expected_hz).abs() <= bin_width,
            "{} cents rendered at {} Hz, expected {} Hz",
            cents,
            measured,
            expected_hz
        );
    }
}

#[test]
fn test_attenuation_scales_output() {
    let tables = ConversionTables::new();

    let reference = render_tone(&tables, &ToneParams::default()).unwrap();
    let attenuated = render_tone(
        &tables,
        &ToneParams {
            attenuation: 200.0, // 20 dB
            ..ToneParams::default()
        },
    )
    .unwrap();

    let ratio = channel_peak(&attenuated, 0) / channel_peak(&reference, 0);
    assert!((ratio - 0.1).abs() < 1e-4, "ratio = {}", ratio);
}

#[test]
fn test_precomputed_pan_renders_the_same() {
    let computed = ConversionTables::with_config(&ConversionConfig::with_pan_table(PanTableMode::Computed));
    let precomputed =
        ConversionTables::with_config(&ConversionConfig::with_pan_table(PanTableMode::Precomputed));

    let params = ToneParams {
        pan: -180.0,
        key_on: Duration::from_millis(100),
        ..ToneParams::default()
    };

    let a = render_tone(&computed, &params).unwrap();
    let b = render_tone(&precomputed, &params).unwrap();
    assert_eq!(a.len(), b.len());
    for (x, y) in a.iter().zip(&b) {
        assert!((x[0] - y[0]).abs() < 1e-6 && (x[1] - y[1]).abs() < 1e-6);
    }
}

#[test]
fn test_wav_round_trip_length() {
    let tables = ConversionTables::new();
    let params = ToneParams {
        key_on: Duration::from_millis(50),
        release: -32768.0,
        ..ToneParams::default()
    };
    let frames = render_tone(&tables, &params).unwrap();
    let wav = to_wav_bytes(&frames, SAMPLE_RATE).unwrap();

    let reader = hound::WavReader::new(std::io::Cursor::new(wav)).unwrap();
    assert_eq!(reader.spec().channels, 2);
    assert_eq!(reader.spec().sample_rate, SAMPLE_RATE);
    assert_eq!(reader.len() as usize, frames.len() * 2);
}
