//! Terrain generation error types.

use hexisle_mesh::MeshError;

use crate::band::TerrainBand;
use crate::decoration::PropKind;

/// A [`TerrainConfig`](crate::TerrainConfig) that cannot be generated from.
///
/// Always reported before any tile is built.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("max height must be finite and non-negative, got {0}")]
    InvalidMaxHeight(f32),

    #[error("cutoff radius must be finite and non-negative, got {0}")]
    InvalidCutoffRadius(f32),

    #[error("scan extent must be non-negative, got {0}")]
    NegativeScanExtent(i32),

    #[error("{band} threshold is not finite: {value}")]
    NonFiniteThreshold { band: TerrainBand, value: f32 },

    #[error(
        "band thresholds must be strictly descending: {upper} ({upper_value}) <= {lower} ({lower_value})"
    )]
    ThresholdsNotDescending {
        upper: TerrainBand,
        upper_value: f32,
        lower: TerrainBand,
        lower_value: f32,
    },

    #[error("noise {name} must be finite and positive, got {value}")]
    InvalidNoiseParameter { name: &'static str, value: f64 },

    #[error("{prop} probability on {band} tiles must be within [0, 1], got {probability}")]
    InvalidProbability {
        band: TerrainBand,
        prop: PropKind,
        probability: f64,
    },
}

/// Errors that abort a generation pass.
#[derive(Debug, thiserror::Error)]
pub enum TerrainError {
    #[error("invalid terrain configuration: {0}")]
    Config(#[from] ConfigurationError),

    #[error("failed to batch terrain geometry: {0}")]
    Mesh(#[from] MeshError),
}
