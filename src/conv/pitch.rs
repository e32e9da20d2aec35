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

//! Pitch conversions (cents to Hertz and back)

use num_traits::clamp;

use super::tables::ConversionTables;
use super::table_index;

/// Lowest filter cutoff, 20 Hz (SF2.01 generator 8)
pub const MIN_FILTER_CENTS: f32 = 1500.0;

/// Highest filter cutoff, 20 kHz (SF2.01 generator 8)
pub const MAX_FILTER_CENTS: f32 = 13500.0;

/// One octave band of the cents to Hertz lookup
struct OctaveBand {
    /// Exclusive upper bound in cents
    end: f32,
    /// Cents value that maps to table index 0
    start: f32,
    /// Frequency at `start`
    reference: f32,
}

const fn band(end: f32, reference: f32) -> OctaveBand {
    OctaveBand {
        end,
        start: end - 1200.0,
        reference,
    }
}

/// The first band is only 900 cents wide; it starts 300 cents into the table.
const OCTAVE_BANDS: [OctaveBand; 12] = [
    band(900.0, 6.875),
    band(2100.0, 13.75),
    band(3300.0, 27.5),
    band(4500.0, 55.0),
    band(5700.0, 110.0),
    band(6900.0, 220.0),
    band(8100.0, 440.0),
    band(9300.0, 880.0),
    band(10500.0, 1760.0),
    band(11700.0, 3520.0),
    band(12900.0, 7040.0),
    band(14100.0, 14080.0),
];

impl ConversionTables {
    /// Convert absolute cents to Hertz, without the filter range clamp.
    ///
    /// Negative cents and anything from 14100 cents up return 1.0.
    #[inline]
    pub fn ct2hz_real(&self, cents: f32) -> f32 {
        if cents < 0.0 {
            return 1.0;
        }

        for band in &OCTAVE_BANDS {
            if cents < band.end {
                let index = table_index(cents - band.start, self.ct2hz.len());
                return band.reference * self.ct2hz[index];
            }
        }

        // some loony trying to make you deaf
        1.0
    }

    /// Convert absolute cents to Hertz, limited to the 20 Hz - 20 kHz filter range
    #[inline]
    pub fn ct2hz(&self, cents: f32) -> f32 {
        self.ct2hz_real(clamp_filter_cents(cents))
    }
}

/// Clamp cents into `[MIN_FILTER_CENTS, MAX_FILTER_CENTS]`
#[inline]
pub fn clamp_filter_cents(cents: f32) -> f32 {
    clamp(cents, MIN_FILTER_CENTS, MAX_FILTER_CENTS)
}

/// Convert absolute cents to Hertz with the closed-form formula.
///
/// Unclamped and table-free; 0 cents is MIDI note 0 (8.176 Hz).
#[inline]
pub fn act2hz(cents: f32) -> f32 {
    (8.176 * 2.0_f64.powf(cents as f64 / 1200.0)) as f32
}

/// Convert Hertz to absolute cents (A4 = 440 Hz = 6900 cents).
///
/// `hz` must be positive.
#[inline]
pub fn hz2ct(hz: f32) -> f32 {
    (6900.0 + 1200.0 * (hz as f64 / 440.0).log2()) as f32
}
