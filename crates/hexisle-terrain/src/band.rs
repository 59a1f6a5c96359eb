//! Terrain bands and the height-threshold classifier.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

/// Terrain classification of a tile, highest first.
///
/// Each band is rendered as one batched buffer with one material.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TerrainBand {
    /// Peaks.
    Stone,
    /// High slopes.
    Dirt,
    /// Primary grassland. Also carries every tree prop.
    Grass,
    /// Low shore.
    Sand,
    /// Flat base land at the bottom of the height range. Also carries every house prop.
    Base,
}

impl TerrainBand {
    /// All bands, highest first.
    pub const ALL: [TerrainBand; 5] = [
        TerrainBand::Stone,
        TerrainBand::Dirt,
        TerrainBand::Grass,
        TerrainBand::Sand,
        TerrainBand::Base,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TerrainBand::Stone => "stone",
            TerrainBand::Dirt => "dirt",
            TerrainBand::Grass => "grass",
            TerrainBand::Sand => "sand",
            TerrainBand::Base => "base",
        }
    }

    /// Name of the surface texture the renderer pairs with this band's buffer.
    pub fn texture_name(self) -> &'static str {
        match self {
            TerrainBand::Stone => "stone",
            TerrainBand::Dirt => "dirt",
            TerrainBand::Grass => "grass",
            TerrainBand::Sand => "sand",
            TerrainBand::Base => "dirt2",
        }
    }
}

/// The surface material a renderer should pair with one band buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MaterialSlot {
    pub band: TerrainBand,
    /// Texture name, without extension.
    pub texture: &'static str,
}

impl From<TerrainBand> for MaterialSlot {
    fn from(band: TerrainBand) -> Self {
        Self {
            band,
            texture: band.texture_name(),
        }
    }
}

impl fmt::Display for TerrainBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lower bounds of each band as fractions of the maximum height.
///
/// A tile belongs to the first band whose threshold its height strictly
/// exceeds. `base` is the floor of the height range; heights at or below the
/// `sand` threshold, including zero, classify as [`TerrainBand::Base`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BandThresholds {
    pub stone: f32,
    pub dirt: f32,
    pub grass: f32,
    pub sand: f32,
    /// Lower bound of the height range. Only checked by [`validate`](Self::validate);
    /// classification sends everything at or below `sand` to Base regardless.
    pub base: f32,
}

impl Default for BandThresholds {
    fn default() -> Self {
        Self {
            stone: 0.8,
            dirt: 0.7,
            grass: 0.5,
            sand: 0.3,
            base: 0.0,
        }
    }
}

impl BandThresholds {
    /// Threshold of `band`, as a fraction of the maximum height.
    pub fn fraction(&self, band: TerrainBand) -> f32 {
        match band {
            TerrainBand::Stone => self.stone,
            TerrainBand::Dirt => self.dirt,
            TerrainBand::Grass => self.grass,
            TerrainBand::Sand => self.sand,
            TerrainBand::Base => self.base,
        }
    }

    /// Checks that every threshold is finite and strictly below the one above it.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        for band in TerrainBand::ALL {
            let value = self.fraction(band);
            if !value.is_finite() {
                return Err(ConfigurationError::NonFiniteThreshold { band, value });
            }
        }
        for pair in TerrainBand::ALL.windows(2) {
            let (upper, lower) = (pair[0], pair[1]);
            if self.fraction(upper) <= self.fraction(lower) {
                return Err(ConfigurationError::ThresholdsNotDescending {
                    upper,
                    upper_value: self.fraction(upper),
                    lower,
                    lower_value: self.fraction(lower),
                });
            }
        }
        Ok(())
    }
}

/// Classifies absolute tile heights into bands.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BandClassifier {
    stone: f32,
    dirt: f32,
    grass: f32,
    sand: f32,
}

impl BandClassifier {
    /// Scales `thresholds` by `max_height`. Expects validated input.
    pub fn new(max_height: f32, thresholds: &BandThresholds) -> Self {
        Self {
            stone: thresholds.stone * max_height,
            dirt: thresholds.dirt * max_height,
            grass: thresholds.grass * max_height,
            sand: thresholds.sand * max_height,
        }
    }

    pub fn classify(&self, height: f32) -> TerrainBand {
        if height > self.stone {
            TerrainBand::Stone
        } else if height > self.dirt {
            TerrainBand::Dirt
        } else if height > self.grass {
            TerrainBand::Grass
        } else if height > self.sand {
            TerrainBand::Sand
        } else {
            TerrainBand::Base
        }
    }
}
