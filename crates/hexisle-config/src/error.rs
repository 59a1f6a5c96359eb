//! Configuration error types.

use hexisle_terrain::ConfigurationError;

/// Errors from loading, saving, parsing or checking `config.ron`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    ReadError(#[source] std::io::Error),

    #[error("failed to write config: {0}")]
    WriteError(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    ParseError(#[source] ron::error::SpannedError),

    #[error("failed to serialize config: {0}")]
    SerializeError(#[source] ron::Error),

    /// The file parsed but describes an island that cannot be generated.
    #[error("invalid terrain section: {0}")]
    InvalidTerrain(#[from] ConfigurationError),
}
