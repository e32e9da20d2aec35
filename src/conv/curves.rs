//! Concave and convex modulator curves
//!
//! Only the curve evaluation lives here; deciding which source feeds which
//! curve is up to the modulator routing of the host.

use super::tables::ConversionTables;
use super::{table_index, VEL_CB_SIZE};

impl ConversionTables {
    /// Concave unipolar positive curve for a 0-127 step
    #[inline]
    pub fn concave(&self, val: f32) -> f32 {
        curve_lookup(&self.concave, val)
    }

    /// Convex unipolar positive curve for a 0-127 step
    #[inline]
    pub fn convex(&self, val: f32) -> f32 {
        curve_lookup(&self.convex, val)
    }
}

#[inline]
fn curve_lookup(table: &[f32; VEL_CB_SIZE], val: f32) -> f32 {
    if val < 0.0 {
        0.0
    } else if val >= VEL_CB_SIZE as f32 {
        1.0
    } else {
        table[table_index(val, VEL_CB_SIZE)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curve_bounds() {
        let tables = ConversionTables::new();
        assert_eq!(tables.concave(0.0), 0.0);
        assert_eq!(tables.concave(127.0), 1.0);
        assert_eq!(tables.convex(0.0), 0.0);
        assert_eq!(tables.convex(127.0), 1.0);
        assert_eq!(tables.concave(-3.0), 0.0);
        assert_eq!(tables.convex(128.0), 1.0);
        assert_eq!(tables.concave(127.9), 1.0);
    }

    #[test]
    fn test_curves_are_not_exact_complements() {
        let tables = ConversionTables::new();
        let sum = tables.concave(64.0) + tables.convex(64.0);
        assert!((sum - 1.0028).abs() < 1e-3, "sum = {}", sum);
    }

    #[test]
    fn test_concave_stays_below_convex() {
        let tables = ConversionTables::new();
        for i in 1..127 {
            let v = i as f32;
            assert!(tables.concave(v) < tables.convex(v), "step {}", i);
        }
    }
}
