//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use hexisle_terrain::DecorationTable;

use crate::Config;

/// Hex island generator.
///
/// Flags override the values loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "hexisle", about = "Procedural hex-tile island generator")]
pub struct CliArgs {
    /// Seed for the noise field and prop placement.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Half-width of the scanned lattice square.
    #[arg(long)]
    pub extent: Option<i32>,

    /// Tiles farther than this from the center are dropped.
    #[arg(long)]
    pub cutoff_radius: Option<f32>,

    /// Height of the tallest possible tile.
    #[arg(long)]
    pub max_height: Option<f32>,

    /// Skip the sea, floor and dome.
    #[arg(long)]
    pub no_scenery: bool,

    /// Place no trees or houses.
    #[arg(long)]
    pub no_props: bool,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write a band map PNG to this path.
    #[arg(long)]
    pub band_map: Option<PathBuf>,

    /// Write a height map PNG to this path.
    #[arg(long)]
    pub height_map: Option<PathBuf>,

    /// Side length of the debug maps in pixels.
    #[arg(long)]
    pub map_size: Option<u32>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(seed) = args.seed {
            self.terrain.seed = Some(seed);
        }
        if let Some(extent) = args.extent {
            self.terrain.scan_extent = extent;
        }
        if let Some(radius) = args.cutoff_radius {
            self.terrain.cutoff_radius = radius;
        }
        if let Some(height) = args.max_height {
            self.terrain.max_height = height;
        }
        if args.no_scenery {
            self.terrain.scenery = false;
        }
        if args.no_props {
            self.terrain.decorations = DecorationTable::empty();
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
        if let Some(ref path) = args.band_map {
            self.debug.band_map = Some(path.clone());
        }
        if let Some(ref path) = args.height_map {
            self.debug.height_map = Some(path.clone());
        }
        if let Some(size) = args.map_size {
            self.debug.map_size = size;
        }
    }
}
