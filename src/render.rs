//! Stereo test tone renderer
//!
//! Drives every conversion the way a sample voice would: pitch from cents,
//! level from attenuation plus velocity, stereo image from pan and balance,
//! and a delay/attack/release envelope from timecents.

use std::time::Duration;

use anyhow::{bail, Context, Result};
use hound::{SampleFormat, WavSpec, WavWriter};
use log::{debug, trace};

use crate::conv::{tc2sec_attack, tc2sec_delay, tc2sec_release, ConversionTables, PEAK_ATTENUATION};

/// Samples rendered between two envelope/log checkpoints
const BLOCK_SIZE: usize = 64;

/// Parameters of one rendered note, in SoundFont units
#[derive(Clone, Debug, PartialEq)]
pub struct ToneParams {
    /// Pitch in absolute cents (6900 = A4 = 440 Hz)
    pub pitch: f32,
    /// Initial attenuation in centibels
    pub attenuation: f32,
    /// MIDI velocity (0-127)
    pub velocity: u8,
    /// Pan position, -500 (left) to 500 (right)
    pub pan: f32,
    /// Balance in centibels, -960 to 960
    pub balance: f32,
    /// Envelope delay in timecents
    pub delay: f32,
    /// Envelope attack in timecents
    pub attack: f32,
    /// Envelope release in timecents
    pub release: f32,
    /// Time between note-on and note-off
    pub key_on: Duration,
    /// Output sample rate in Hz
    pub sample_rate: u32,
}

impl Default for ToneParams {
    fn default() -> Self {
        Self {
            pitch: 6900.0,
            attenuation: 0.0,
            velocity: 127,
            pan: 0.0,
            balance: 0.0,
            delay: -32768.0,
            attack: -32768.0,
            release: -6000.0,
            key_on: Duration::from_millis(1000),
            sample_rate: 44100,
        }
    }
}

/// Envelope segment lengths in seconds
#[derive(Clone, Copy, Debug)]
struct Envelope {
    delay: f32,
    attack: f32,
    key_off: f32,
    release: f32,
}

impl Envelope {
    fn total(&self) -> f32 {
        self.key_off + self.release
    }

    fn sustain_level(&self, t: f32) -> f32 {
        if t < self.delay {
            0.0
        } else if t < self.delay + self.attack {
            (t - self.delay) / self.attack
        } else {
            1.0
        }
    }

    fn level(&self, t: f32) -> f32 {
        if t < self.key_off {
            return self.sustain_level(t);
        }
        if self.release <= 0.0 {
            return 0.0;
        }
        let start = self.sustain_level(self.key_off);
        (start * (1.0 - (t - self.key_off) / self.release)).max(0.0)
    }
}

/// Render a sine tone into interleaved stereo frames
pub fn render_tone(tables: &ConversionTables, params: &ToneParams) -> Result<Vec<[f32; 2]>> {
    if params.sample_rate == 0 {
        bail!("Invalid sample rate: 0");
    }
    if params.key_on.is_zero() {
        bail!("Key-on duration must be greater than zero");
    }
    if params.velocity > 127 {
        bail!("Invalid velocity: {}", params.velocity);
    }

    let sample_rate = params.sample_rate as f32;
    let frequency = tables.ct2hz_real(params.pitch);
    if frequency >= sample_rate / 2.0 {
        bail!(
            "Pitch {} cents ({} Hz) is above Nyquist for {} Hz",
            params.pitch,
            frequency,
            params.sample_rate
        );
    }

    // Default SF2 velocity modulator: concave, negative, unipolar into attenuation.
    let velocity_cb = PEAK_ATTENUATION as f32 * tables.concave(127.0 - params.velocity as f32);
    let gain = tables.cb2amp(params.attenuation + velocity_cb);
    let left_gain = gain * tables.pan(params.pan, true) * tables.balance(params.balance, true);
    let right_gain = gain * tables.pan(params.pan, false) * tables.balance(params.balance, false);

    let envelope = Envelope {
        delay: tc2sec_delay(params.delay),
        attack: tc2sec_attack(params.attack),
        key_off: params.key_on.as_secs_f32(),
        release: tc2sec_release(params.release),
    };

    debug!(
        "RENDER: {} Hz, gain={} (velocity {} cB), left={}, right={}, envelope={:?}",
        frequency, gain, velocity_cb, left_gain, right_gain, envelope
    );

    let n_frames = (envelope.total() * sample_rate).ceil() as usize;
    let phase_inc = frequency / sample_rate;
    let mut phase = 0.0f32;
    let mut frames = Vec::with_capacity(n_frames);

    for block_start in (0..n_frames).step_by(BLOCK_SIZE) {
        let block_end = (block_start + BLOCK_SIZE).min(n_frames);
        for n in block_start..block_end {
            let level = envelope.level(n as f32 / sample_rate);
            let sample = (phase * std::f32::consts::TAU).sin() * level;
            frames.push([sample * left_gain, sample * right_gain]);

            phase += phase_inc;
            if phase >= 1.0 {
                phase -= 1.0;
            }
        }
        trace!("RENDER: block at frame {} done", block_start);
    }

    Ok(frames)
}

/// Encode stereo frames as a 32-bit float WAV file
pub fn to_wav_bytes(frames: &[[f32; 2]], sample_rate: u32) -> Result<Vec<u8>> {
    let wav_spec = WavSpec {
        channels: 2,
        sample_rate,
        bits_per_sample: 32,
        sample_format: SampleFormat::Float,
    };

    let mut ret = vec![];
    let mut cursor = std::io::Cursor::new(&mut ret);

    let mut wav_writer =
        WavWriter::new(&mut cursor, wav_spec).context("unable to start wav stream")?;
    for [left, right] in frames {
        wav_writer.write_sample(*left)?;
        wav_writer.write_sample(*right)?;
    }
    wav_writer.finalize().context("unable to finalize wav stream")?;

    Ok(ret)
}
