//! Procedural hex-tile island generation.
//!
//! A pass maps a square of lattice indices to ground positions, culls them to a
//! circle, samples a noise height per tile, classifies it into a
//! [`TerrainBand`] and batches hex columns and decorative props into one
//! geometry per band. See [`generate_terrain`] for the seeded entry point and
//! [`TerrainGenerator`] for injecting samplers and random sources.

mod band;
mod builders;
mod config;
mod decoration;
mod error;
mod generator;
mod lattice;
mod sampler;
mod scenery;

pub mod debug_viz;

pub use band::{BandClassifier, BandThresholds, MaterialSlot, TerrainBand};
pub use builders::{HEX_RADIUS, broadleaf, conifer, hex_column, house};
pub use config::TerrainConfig;
pub use decoration::{
    ConstantSource, DecorationRule, DecorationTable, PropKind, SequenceSource, UniformSource,
};
pub use error::{ConfigurationError, TerrainError};
pub use generator::{
    GenerationStats, PropRecord, TerrainGenerator, TerrainMeshes, TileRecord, generate_terrain,
};
pub use lattice::{LatticeIndex, LatticeScan, ROW_SPACING_X, ROW_SPACING_Y, scan_square, tile_to_position};
pub use sampler::{DEFAULT_EXPONENT, DEFAULT_FREQUENCY, HeightSampler, NoiseSampler};
pub use scenery::Scenery;
