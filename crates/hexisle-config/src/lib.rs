//! Settings for the island generator, persisted as `config.ron`.
//!
//! Every section is `#[serde(default)]`, so partial files and files written by
//! older versions still load. Command-line flags override the loaded values.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{CONFIG_FILE_NAME, Config, DebugConfig};
pub use error::ConfigError;
pub use hexisle_terrain::TerrainConfig;
