//! Prop decoration policy: which props may appear on which bands, how often,
//! and which band buffer receives their geometry.
//!
//! Props are batched into a band chosen for its material rather than the band
//! of the tile they stand on. Trees share the grass material and houses share
//! the base material wherever they are placed.

use std::fmt;

use rand::Rng;
use rand::rngs::StdRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::band::TerrainBand;
use crate::error::ConfigurationError;

/// Source of uniform draws in `[0, 1)`.
///
/// Decoration rolls and prop shape variation both pull from the same source,
/// so a scripted source pins down an entire generation pass.
pub trait UniformSource {
    fn next_uniform(&mut self) -> f64;

    /// A uniform draw in `[low, high)`.
    fn uniform_range(&mut self, low: f64, high: f64) -> f64 {
        low + (high - low) * self.next_uniform()
    }
}

impl UniformSource for ChaCha8Rng {
    fn next_uniform(&mut self) -> f64 {
        self.random::<f64>()
    }
}

impl UniformSource for StdRng {
    fn next_uniform(&mut self) -> f64 {
        self.random::<f64>()
    }
}

impl<T: UniformSource + ?Sized> UniformSource for &mut T {
    fn next_uniform(&mut self) -> f64 {
        (**self).next_uniform()
    }
}

/// Returns the same draw forever.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConstantSource(pub f64);

impl UniformSource for ConstantSource {
    fn next_uniform(&mut self) -> f64 {
        self.0
    }
}

/// Replays a fixed list of draws, wrapping around at the end.
#[derive(Clone, Debug)]
pub struct SequenceSource {
    values: Vec<f64>,
    cursor: usize,
}

impl SequenceSource {
    /// # Panics
    ///
    /// Panics if `values` is empty.
    pub fn new(values: Vec<f64>) -> Self {
        assert!(!values.is_empty(), "SequenceSource needs at least one value");
        Self { values, cursor: 0 }
    }

    /// Number of draws taken so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl UniformSource for SequenceSource {
    fn next_uniform(&mut self) -> f64 {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}

/// Decorative prop archetypes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PropKind {
    /// Layered conifer built from stacked three-sided cones.
    Conifer,
    /// Round tree built from two sphere puffs on a trunk.
    Broadleaf,
    /// Box house with a pyramid roof.
    House,
}

impl fmt::Display for PropKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PropKind::Conifer => "conifer",
            PropKind::Broadleaf => "broadleaf",
            PropKind::House => "house",
        })
    }
}

/// One independent Bernoulli trial per tile of `band`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DecorationRule {
    /// Band of the supporting tile.
    pub band: TerrainBand,
    pub prop: PropKind,
    /// Chance of placement per tile, in `[0, 1]`.
    pub probability: f64,
    /// Band buffer the prop geometry is merged into.
    pub target: TerrainBand,
}

impl DecorationRule {
    pub const fn new(band: TerrainBand, prop: PropKind, probability: f64, target: TerrainBand) -> Self {
        Self {
            band,
            prop,
            probability,
            target,
        }
    }

    /// Takes one draw and reports whether the prop is placed.
    pub fn roll<R: UniformSource + ?Sized>(&self, rng: &mut R) -> bool {
        rng.next_uniform() < self.probability
    }
}

/// Ordered decoration rules. Rules for the same band are rolled in order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DecorationTable {
    rules: Vec<DecorationRule>,
}

impl DecorationTable {
    pub fn new(rules: Vec<DecorationRule>) -> Self {
        Self { rules }
    }

    /// A table that never places props.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// The island's stock decoration:
    ///
    /// | Tile  | Chance | Prop      | Buffer |
    /// |-------|--------|-----------|--------|
    /// | Stone | 20%    | house     | Base   |
    /// | Dirt  | 10%    | conifer   | Grass  |
    /// | Grass | 20%    | conifer   | Grass  |
    /// | Grass | 10%    | house     | Base   |
    /// | Sand  | 2%     | broadleaf | Grass  |
    pub fn standard() -> Self {
        use PropKind::*;
        use TerrainBand::*;
        Self::new(vec![
            DecorationRule::new(Stone, House, 0.2, Base),
            DecorationRule::new(Dirt, Conifer, 0.1, Grass),
            DecorationRule::new(Grass, Conifer, 0.2, Grass),
            DecorationRule::new(Grass, House, 0.1, Base),
            DecorationRule::new(Sand, Broadleaf, 0.02, Grass),
        ])
    }

    pub fn rules(&self) -> &[DecorationRule] {
        &self.rules
    }

    /// Rules that apply to tiles of `band`, in roll order.
    pub fn rules_for(&self, band: TerrainBand) -> impl Iterator<Item = &DecorationRule> {
        self.rules.iter().filter(move |rule| rule.band == band)
    }

    /// Buffer that receives `prop` when placed on `band`, if any rule places it.
    pub fn target_band(&self, band: TerrainBand, prop: PropKind) -> Option<TerrainBand> {
        self.rules_for(band)
            .find(|rule| rule.prop == prop)
            .map(|rule| rule.target)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        for rule in &self.rules {
            if !(0.0..=1.0).contains(&rule.probability) {
                return Err(ConfigurationError::InvalidProbability {
                    band: rule.band,
                    prop: rule.prop,
                    probability: rule.probability,
                });
            }
        }
        Ok(())
    }
}

impl Default for DecorationTable {
    fn default() -> Self {
        Self::standard()
    }
}
