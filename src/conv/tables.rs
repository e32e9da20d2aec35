//! Conversion lookup tables
//!
//! All the transcendental work (`pow`, `log`, `sin`) happens once, here.
//! Afterwards the tables are only ever read, so a single instance can be
//! shared by any number of voices and threads.

use log::debug;

use super::pan_lut::{PAN_STEP, PAN_TABLE};
use super::{CB_AMP_SIZE, CENTS_HZ_SIZE, PAN_SIZE, PEAK_ATTENUATION, VEL_CB_SIZE};
use crate::config::{ConversionConfig, PanTableMode};

/// Immutable set of lookup tables backing every table-driven conversion
#[derive(Clone)]
pub struct ConversionTables {
    pub(crate) ct2hz: [f32; CENTS_HZ_SIZE],
    pub(crate) cb2amp: [f32; CB_AMP_SIZE],
    pub(crate) concave: [f32; VEL_CB_SIZE],
    pub(crate) convex: [f32; VEL_CB_SIZE],
    pub(crate) pan: [f32; PAN_SIZE],
}

impl Default for ConversionTables {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ConversionTables {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConversionTables")
            .field("ct2hz", &self.ct2hz.len())
            .field("cb2amp", &self.cb2amp.len())
            .field("concave", &self.concave.len())
            .field("convex", &self.convex.len())
            .field("pan", &self.pan.len())
            .finish()
    }
}

impl ConversionTables {
    /// Build all tables using the default configuration
    pub fn new() -> Self {
        Self::with_config(&ConversionConfig::default())
    }

    /// Build all tables
    pub fn with_config(config: &ConversionConfig) -> Self {
        debug!(
            "CONV: building conversion tables (pan table: {:?})",
            config.pan_table
        );

        let (concave, convex) = build_curve_tables();
        let pan = match config.pan_table {
            PanTableMode::Computed => build_pan_table(),
            PanTableMode::Precomputed => PAN_TABLE,
        };

        Self {
            ct2hz: build_ct2hz_table(),
            cb2amp: build_cb2amp_table(),
            concave,
            convex,
            pan,
        }
    }

    /// Fractional octave multipliers, `2^(i/1200)`
    pub fn ct2hz_table(&self) -> &[f32; CENTS_HZ_SIZE] {
        &self.ct2hz
    }

    /// Linear gain for 0 to 144 dB of attenuation in centibel steps
    pub fn cb2amp_table(&self) -> &[f32; CB_AMP_SIZE] {
        &self.cb2amp
    }

    /// Concave unipolar positive curve
    pub fn concave_table(&self) -> &[f32; VEL_CB_SIZE] {
        &self.concave
    }

    /// Convex unipolar positive curve
    pub fn convex_table(&self) -> &[f32; VEL_CB_SIZE] {
        &self.convex
    }

    /// Quarter sine period used for panning
    pub fn pan_table(&self) -> &[f32; PAN_SIZE] {
        &self.pan
    }
}

fn build_ct2hz_table() -> [f32; CENTS_HZ_SIZE] {
    let mut table = [0.0f32; CENTS_HZ_SIZE];
    for (i, entry) in table.iter_mut().enumerate() {
        *entry = 2.0_f64.powf(i as f64 / 1200.0) as f32;
    }
    table
}

/// Attenuation is a magnitude (0 to 144 dB), so there are no boost entries.
fn build_cb2amp_table() -> [f32; CB_AMP_SIZE] {
    let mut table = [0.0f32; CB_AMP_SIZE];
    for (i, entry) in table.iter_mut().enumerate() {
        *entry = 10.0_f64.powf(i as f64 / -200.0) as f32;
    }
    table
}

/// Returns `(concave, convex)`.
///
/// The curves follow the plots of the SoundFont 2.01 modulator section rather
/// than its printed equation, which disagrees with them. The printed form
/// would be `log(i^2 / 127^2)`; here the square is pulled out of the log as
/// a factor of 2. The end points are pinned since the log diverges at 0.
fn build_curve_tables() -> ([f32; VEL_CB_SIZE], [f32; VEL_CB_SIZE]) {
    let mut concave = [0.0f32; VEL_CB_SIZE];
    let mut convex = [0.0f32; VEL_CB_SIZE];

    let last = VEL_CB_SIZE - 1;
    concave[0] = 0.0;
    concave[last] = 1.0;
    convex[0] = 0.0;
    convex[last] = 1.0;

    for i in 1..last {
        let x = (-200.0 / PEAK_ATTENUATION) * 2.0 * (i as f64 / last as f64).ln()
            / std::f64::consts::LN_10;
        convex[i] = (1.0 - x) as f32;
        concave[last - i] = x as f32;
    }

    (concave, convex)
}

fn build_pan_table() -> [f32; PAN_SIZE] {
    let mut table = [0.0f32; PAN_SIZE];
    for (i, entry) in table.iter_mut().enumerate() {
        *entry = (i as f64 * PAN_STEP).sin() as f32;
    }
    table
}
