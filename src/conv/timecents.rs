//! Timecents to seconds
//!
//! SoundFont envelope and LFO times are encoded as `1200 * log2(seconds)`.
//! The per-generator variants differ only in their range limits.

use num_traits::clamp;

/// Most negative 16 bit value, meaning "no time at all" for delay-like generators
pub const TC_INSTANT: f32 = -32768.0;

/// Lower limit shared by every time generator (about 1 ms)
pub const TC_MIN: f32 = -12000.0;

/// Upper limit of delay generators (about 18 s)
pub const TC_MAX_DELAY: f32 = 5000.0;

/// Upper limit of attack and release generators (about 100 s)
pub const TC_MAX_ATTACK_RELEASE: f32 = 8000.0;

/// Convert timecents to seconds with no range checking
#[inline]
pub fn tc2sec(tc: f32) -> f32 {
    2.0_f64.powf(tc as f64 / 1200.0) as f32
}

/// Delay generators (SF2.01 8.1.2/8.1.3 items 21, 23, 25, 33)
#[inline]
pub fn tc2sec_delay(tc: f32) -> f32 {
    if tc <= TC_INSTANT {
        return 0.0;
    }
    tc2sec(clamp(tc, TC_MIN, TC_MAX_DELAY))
}

/// Attack generators (SF2.01 8.1.2/8.1.3 items 26, 34)
#[inline]
pub fn tc2sec_attack(tc: f32) -> f32 {
    if tc <= TC_INSTANT {
        return 0.0;
    }
    tc2sec(clamp(tc, TC_MIN, TC_MAX_ATTACK_RELEASE))
}

/// Release generators (SF2.01 8.1.2/8.1.3 items 30, 38)
///
/// The standard gives release no "most negative value" rule, but -32768 still
/// maps to 0 s here, as it always has for existing sound banks.
#[inline]
pub fn tc2sec_release(tc: f32) -> f32 {
    if tc <= TC_INSTANT {
        return 0.0;
    }
    tc2sec(clamp(tc, TC_MIN, TC_MAX_ATTACK_RELEASE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tc2sec() {
        assert_eq!(tc2sec(0.0), 1.0);
        assert_eq!(tc2sec(1200.0), 2.0);
        assert_eq!(tc2sec(-1200.0), 0.5);
        // no clamping
        assert!(tc2sec(12000.0) > 1000.0);
    }

    #[test]
    fn test_delay() {
        assert_eq!(tc2sec_delay(-32768.0), 0.0);
        assert_eq!(tc2sec_delay(-40000.0), 0.0);
        assert_eq!(tc2sec_delay(-20000.0), tc2sec(-12000.0));
        assert_eq!(tc2sec_delay(6000.0), tc2sec(5000.0));
        assert_eq!(tc2sec_delay(0.0), 1.0);
    }

    #[test]
    fn test_attack() {
        assert_eq!(tc2sec_attack(-32768.0), 0.0);
        assert_eq!(tc2sec_attack(10000.0), tc2sec_attack(8000.0));
        assert_eq!(tc2sec_attack(-32767.0), tc2sec(-12000.0));
    }

    #[test]
    fn test_release_keeps_instant_sentinel() {
        assert_eq!(tc2sec_release(-32768.0), 0.0);
        assert_eq!(tc2sec_release(-32767.0), tc2sec(-12000.0));
        assert_eq!(tc2sec_release(9000.0), tc2sec(8000.0));
    }
}
