//! Island generation parameters.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::band::BandThresholds;
use crate::decoration::DecorationTable;
use crate::error::ConfigurationError;
use crate::sampler::{DEFAULT_EXPONENT, DEFAULT_FREQUENCY};

/// Everything one generation pass depends on, apart from the random sources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    /// Half-width of the scanned lattice square. Scans `[-extent, extent)` on both axes.
    pub scan_extent: i32,
    /// Tiles whose center lies farther than this from the origin are skipped.
    pub cutoff_radius: f32,
    /// Height of a tile that samples 1.0.
    pub max_height: f32,
    /// Band lower bounds as fractions of `max_height`.
    pub thresholds: BandThresholds,
    /// Prop placement rules.
    pub decorations: DecorationTable,
    /// Lattice-to-noise scale.
    pub noise_frequency: f64,
    /// Shaping exponent applied to the normalized noise.
    pub noise_exponent: f64,
    /// Noise and RNG seed. `None` picks a fresh one per pass.
    pub seed: Option<u64>,
    /// Also build the sea, floor and dome.
    pub scenery: bool,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            scan_extent: 15,
            cutoff_radius: 16.0,
            max_height: 10.0,
            thresholds: BandThresholds::default(),
            decorations: DecorationTable::standard(),
            noise_frequency: DEFAULT_FREQUENCY,
            noise_exponent: DEFAULT_EXPONENT,
            seed: None,
            scenery: true,
        }
    }
}

impl TerrainConfig {
    /// The lattice range scanned on each axis.
    pub fn scan_range(&self) -> Range<i32> {
        -self.scan_extent..self.scan_extent
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if !self.max_height.is_finite() || self.max_height < 0.0 {
            return Err(ConfigurationError::InvalidMaxHeight(self.max_height));
        }
        if !self.cutoff_radius.is_finite() || self.cutoff_radius < 0.0 {
            return Err(ConfigurationError::InvalidCutoffRadius(self.cutoff_radius));
        }
        if self.scan_extent < 0 {
            return Err(ConfigurationError::NegativeScanExtent(self.scan_extent));
        }
        for (name, value) in [
            ("frequency", self.noise_frequency),
            ("exponent", self.noise_exponent),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigurationError::InvalidNoiseParameter { name, value });
            }
        }
        self.thresholds.validate()?;
        self.decorations.validate()
    }
}
