// Copyright 2025 Tyler Neely (tylerneely@gmail.com).
// Copyright 2021 Emilie Gillet (emilie.o.gillet@gmail.com)
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.
//
// See http://creativecommons.org/licenses/MIT/ for more information.

//! SoundFont unit conversions
//!
//! Two ways in:
//!
//! * Own a [`ConversionTables`] and call its methods.
//! * Call [`init`] once at startup and use the free functions in this module,
//!   which read a process-wide instance.
//!
//! Either way the tables are never written after they are built, so lookups
//! need no locking.

use std::sync::OnceLock;

use log::debug;

use crate::config::ConversionConfig;

pub mod atten;
pub mod curves;
pub mod pan_lut;
pub mod pitch;
pub mod tables;
pub mod timecents;

pub use pitch::{act2hz, hz2ct};
pub use tables::ConversionTables;
pub use timecents::{tc2sec, tc2sec_attack, tc2sec_delay, tc2sec_release};

/// Cents per octave
pub const CENTS_HZ_SIZE: usize = 1200;

/// Velocity / controller steps of the modulator curves
pub const VEL_CB_SIZE: usize = 128;

/// Centibel steps from 0 to 144 dB inclusive
pub const CB_AMP_SIZE: usize = 1441;

/// Pan positions from hard left to hard right
pub const PAN_SIZE: usize = 1002;

/// Attenuation covered by a full sweep of a modulator curve, in centibels
pub const PEAK_ATTENUATION: f64 = 960.0;

static TABLES: OnceLock<ConversionTables> = OnceLock::new();

/// Build the process-wide tables with the default configuration.
///
/// Call this once before the audio thread starts so the first lookup does
/// not pay for it. Further calls do nothing.
pub fn init() {
    init_with_config(&ConversionConfig::default());
}

/// Build the process-wide tables; ignored if they already exist
pub fn init_with_config(config: &ConversionConfig) {
    let mut built = false;
    TABLES.get_or_init(|| {
        built = true;
        ConversionTables::with_config(config)
    });
    if !built {
        debug!("CONV: tables already initialized, keeping existing ones");
    }
}

/// The process-wide tables, built on first use if [`init`] was never called
#[inline]
pub fn tables() -> &'static ConversionTables {
    TABLES.get_or_init(ConversionTables::new)
}

/// Truncate a non-negative table position to an index.
///
/// `as` truncates toward zero and maps NaN to 0. The cap keeps f32 rounding
/// right below a range edge from landing one past the end.
#[inline]
pub(crate) fn table_index(position: f32, len: usize) -> usize {
    (position as usize).min(len - 1)
}

/// See [`ConversionTables::ct2hz_real`]
#[inline]
pub fn ct2hz_real(cents: f32) -> f32 {
    tables().ct2hz_real(cents)
}

/// See [`ConversionTables::ct2hz`]
#[inline]
pub fn ct2hz(cents: f32) -> f32 {
    tables().ct2hz(cents)
}

/// See [`ConversionTables::cb2amp`]
#[inline]
pub fn cb2amp(cb: f32) -> f32 {
    tables().cb2amp(cb)
}

/// See [`ConversionTables::balance`]
#[inline]
pub fn balance(balance: f32, left: bool) -> f32 {
    tables().balance(balance, left)
}

/// See [`ConversionTables::pan`]
#[inline]
pub fn pan(position: f32, left: bool) -> f32 {
    tables().pan(position, left)
}

/// See [`ConversionTables::concave`]
#[inline]
pub fn concave(val: f32) -> f32 {
    tables().concave(val)
}

/// See [`ConversionTables::convex`]
#[inline]
pub fn convex(val: f32) -> f32 {
    tables().convex(val)
}
