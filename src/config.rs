//! Build configuration for the conversion tables
//!
//! The only knob is how the pan table gets filled. Callers never see the
//! difference; it only trades a few microseconds of startup for a larger
//! read-only data segment.

use serde::{Deserialize, Serialize};

/// How the pan table is produced
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PanTableMode {
    /// Evaluate `sin()` for every entry when the tables are built
    Computed,
    /// Copy the table evaluated at compile time
    Precomputed,
}

impl Default for PanTableMode {
    fn default() -> Self {
        if cfg!(feature = "const-tables") {
            PanTableMode::Precomputed
        } else {
            PanTableMode::Computed
        }
    }
}

/// Configuration used when building [`crate::conv::ConversionTables`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionConfig {
    /// Pan table build mode
    #[serde(default)]
    pub pan_table: PanTableMode,
}

impl ConversionConfig {
    /// Configuration with an explicit pan table mode
    pub fn with_pan_table(pan_table: PanTableMode) -> Self {
        Self { pan_table }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mode_follows_feature() {
        let config = ConversionConfig::default();
        if cfg!(feature = "const-tables") {
            assert_eq!(config.pan_table, PanTableMode::Precomputed);
        } else {
            assert_eq!(config.pan_table, PanTableMode::Computed);
        }
    }

    #[test]
    fn test_with_pan_table() {
        let config = ConversionConfig::with_pan_table(PanTableMode::Precomputed);
        assert_eq!(config.pan_table, PanTableMode::Precomputed);
    }
}
