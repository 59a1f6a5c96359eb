//! Generates one hex island and reports what was built.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI flags.
//! Run with `cargo run -p hexisle-demo -- --seed 42 --band-map island.png`.

mod export;

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use hexisle_config::{CliArgs, Config};
use hexisle_mesh::TerrainVertex;
use hexisle_terrain::{TerrainMeshes, debug_viz, generate_terrain};
use tracing::{info, warn};

fn main() -> Result<(), Box<dyn Error>> {
    let args = CliArgs::parse();

    let config_dir = match args.config.clone() {
        Some(dir) => dir,
        None => default_config_dir()?,
    };

    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    hexisle_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config.debug));

    config.validate()?;
    let meshes = generate_terrain(&config.terrain)?;
    report(&meshes);
    write_debug_maps(&config, &meshes)?;

    Ok(())
}

fn default_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    let base = dirs::config_dir().ok_or("could not resolve a config directory; pass --config")?;
    Ok(base.join("hexisle"))
}

fn report(meshes: &TerrainMeshes) {
    let stats = &meshes.stats;
    info!(
        "Kept {} of {} tiles ({} culled), placed {} props",
        stats.tiles_kept, stats.tiles_scanned, stats.tiles_culled, stats.props_placed
    );

    for (slot, geometry) in meshes.material_slots() {
        let vertices = geometry.to_vertices();
        let bytes: &[u8] = bytemuck::cast_slice(&vertices);
        info!(
            "{} [{}]: {} tiles, {} vertices, {} triangles, {} KiB",
            slot.band,
            slot.texture,
            stats.tiles_per_band.get(&slot.band).copied().unwrap_or(0),
            geometry.vertex_count(),
            geometry.triangle_count(),
            bytes.len() / 1024
        );
    }

    if let Some(scenery) = &meshes.scenery {
        info!(
            "Scenery: {} vertices ({} bytes per vertex)",
            scenery.vertex_count(),
            std::mem::size_of::<TerrainVertex>()
        );
    }
}

fn write_debug_maps(config: &Config, meshes: &TerrainMeshes) -> Result<(), Box<dyn Error>> {
    let size = config.debug.map_size;
    if size == 0 {
        if config.debug.band_map.is_some() || config.debug.height_map.is_some() {
            warn!("map_size is 0, skipping debug maps");
        }
        return Ok(());
    }
    // Frame the cutoff circle plus one hex of margin.
    let view_radius = config.terrain.cutoff_radius + 1.0;

    if let Some(path) = &config.debug.band_map {
        let image = debug_viz::render_band_map(&meshes.tiles, size, size, view_radius);
        export::write_png(&image, path)?;
        info!("Wrote band map to {}", path.display());
    }
    if let Some(path) = &config.debug.height_map {
        let image = debug_viz::render_height_map(
            &meshes.tiles,
            size,
            size,
            view_radius,
            config.terrain.max_height,
        );
        export::write_png(&image, path)?;
        info!("Wrote height map to {}", path.display());
    }
    Ok(())
}
