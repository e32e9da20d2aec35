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

//! Attenuation, balance and pan gains

use super::tables::ConversionTables;
use super::{table_index, CB_AMP_SIZE};

/// Pan positions at or beyond this magnitude are hard left / hard right
pub const PAN_LIMIT: f32 = 500.0;

impl ConversionTables {
    /// Convert an attenuation in centibels to a linear gain.
    ///
    /// * in: 0 (no attenuation) to 1440 (144 dB, SF2.01 generator 48)
    /// * out: 1.0 down to 0.0
    ///
    /// Negative attenuation would be a boost and is treated as 0.
    #[inline]
    pub fn cb2amp(&self, cb: f32) -> f32 {
        if cb < 0.0 {
            return 1.0;
        }
        if cb >= CB_AMP_SIZE as f32 {
            return 0.0;
        }
        self.cb2amp[table_index(cb, CB_AMP_SIZE)]
    }

    /// Gain of one channel for a balance setting in centibels (-960 to 960).
    ///
    /// A negative balance leaves the left channel alone and attenuates the
    /// right one; a positive balance does the opposite.
    #[inline]
    pub fn balance(&self, balance: f32, left: bool) -> f32 {
        if balance == 0.0 {
            return 1.0;
        }
        if (left && balance < 0.0) || (!left && balance > 0.0) {
            return 1.0;
        }
        self.cb2amp(balance.abs())
    }

    /// Gain of one channel for a pan position (-500 hard left to 500 hard right).
    ///
    /// The left channel sees the mirrored position, so the two gains follow a
    /// sine/cosine law around the center.
    #[inline]
    pub fn pan(&self, position: f32, left: bool) -> f32 {
        let c = if left { -position } else { position };

        if c <= -PAN_LIMIT {
            0.0
        } else if c >= PAN_LIMIT {
            1.0
        } else {
            self.pan[table_index(c + PAN_LIMIT, self.pan.len())]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cb2amp() {
        let tables = ConversionTables::new();
        assert_eq!(tables.cb2amp(0.0), 1.0);
        assert_eq!(tables.cb2amp(-5.0), 1.0);
        assert_eq!(tables.cb2amp(1441.0), 0.0);
        assert_eq!(tables.cb2amp(1e9), 0.0);
        assert!((tables.cb2amp(60.0) - 0.501187).abs() < 1e-5); // -6 dB
        assert_eq!(tables.cb2amp(60.7), tables.cb2amp(60.0));
        assert!(tables.cb2amp(1440.9) > 0.0);
    }

    #[test]
    fn test_balance() {
        let tables = ConversionTables::new();
        assert_eq!(tables.balance(0.0, true), 1.0);
        assert_eq!(tables.balance(0.0, false), 1.0);
        assert_eq!(tables.balance(-200.0, true), 1.0);
        assert_eq!(tables.balance(-200.0, false), tables.cb2amp(200.0));
        assert_eq!(tables.balance(200.0, false), 1.0);
        assert_eq!(tables.balance(200.0, true), tables.cb2amp(200.0));
        assert_eq!(tables.balance(960.0, true), tables.cb2amp(960.0));
    }

    #[test]
    fn test_pan() {
        let tables = ConversionTables::new();
        let center = std::f32::consts::FRAC_1_SQRT_2;

        assert_eq!(tables.pan(0.0, false), tables.pan(0.0, true));
        assert!((tables.pan(0.0, false) - center).abs() < 1e-3);
        assert_eq!(tables.pan(500.0, false), 1.0);
        assert_eq!(tables.pan(-500.0, false), 0.0);
        assert_eq!(tables.pan(500.0, true), 0.0);
        assert_eq!(tables.pan(-500.0, true), 1.0);
    }

    #[test]
    fn test_pan_is_mirrored() {
        let tables = ConversionTables::new();
        for position in [-499.0, -250.0, -1.0, 1.0, 120.0, 499.0] {
            assert_eq!(tables.pan(position, true), tables.pan(-position, false));
        }
        assert!(tables.pan(250.0, false) > tables.pan(250.0, true));
    }
}
