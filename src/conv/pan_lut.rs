//! Pan table evaluated at compile time
//!
//! Used when the tables are built in [`PanTableMode::Precomputed`] mode.
//!
//! [`PanTableMode::Precomputed`]: crate::config::PanTableMode::Precomputed

use super::PAN_SIZE;

/// Phase step between two pan table entries (a quarter period over 1001 steps)
pub const PAN_STEP: f64 = std::f64::consts::FRAC_PI_2 / (PAN_SIZE - 1) as f64;

/// Quarter sine period sampled at `PAN_SIZE` points
pub static PAN_TABLE: [f32; PAN_SIZE] = {
    let mut table = [0.0f32; PAN_SIZE];
    let mut i = 0;
    while i < PAN_SIZE {
        table[i] = const_sin(i as f64 * PAN_STEP) as f32;
        i += 1;
    }
    table
};

/// Taylor series sine, accurate to f64 precision on [0, pi/2]
const fn const_sin(x: f64) -> f64 {
    let x2 = x * x;
    let mut term = x;
    let mut sum = x;
    let mut n = 1;
    while n < 13 {
        term = -term * x2 / ((2 * n * (2 * n + 1)) as f64);
        sum += term;
        n += 1;
    }
    sum
}
