//! Top-down renders of a generation pass.

use std::collections::HashMap;

use glam::Vec2;

use super::image::{DebugImage, Rgba};
use crate::band::TerrainBand;
use crate::builders::HEX_RADIUS;
use crate::generator::TileRecord;
use crate::lattice::{LatticeIndex, ROW_SPACING_X, ROW_SPACING_Y};

/// Scene background, used where no tile covers the pixel.
pub const BACKGROUND: Rgba = [0xea, 0xdb, 0xea, 0xff];

/// Flat color for a band.
pub fn band_color(band: TerrainBand) -> Rgba {
    match band {
        TerrainBand::Stone => [136, 136, 140, 255],
        TerrainBand::Dirt => [128, 92, 58, 255],
        TerrainBand::Grass => [96, 168, 64, 255],
        TerrainBand::Sand => [222, 200, 142, 255],
        TerrainBand::Base => [104, 84, 60, 255],
    }
}

/// Maps tile heights to grey levels, black at 0 and white at `max_height`.
pub fn height_color(height: f32, max_height: f32) -> Rgba {
    let t = if max_height > 0.0 {
        (height / max_height).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let level = (t * 255.0).round() as u8;
    [level, level, level, 255]
}

/// Looks up the kept tile whose hex covers a ground-plane point.
struct TileLookup<'a> {
    tiles: HashMap<LatticeIndex, &'a TileRecord>,
}

impl<'a> TileLookup<'a> {
    fn new(tiles: &'a [TileRecord]) -> Self {
        Self {
            tiles: tiles.iter().map(|tile| (tile.index, tile)).collect(),
        }
    }

    /// Nearest kept tile within the hex circumradius of `point`.
    fn covering(&self, point: Vec2) -> Option<&'a TileRecord> {
        let row = (point.y / ROW_SPACING_Y).round() as i32;
        let mut best: Option<(f32, &'a TileRecord)> = None;
        for j in row.saturating_sub(1)..=row.saturating_add(1) {
            let shift = (j % 2) as f32 * 0.5;
            let column = (point.x / ROW_SPACING_X - shift).round() as i32;
            for i in column.saturating_sub(1)..=column.saturating_add(1) {
                let Some(&tile) = self.tiles.get(&LatticeIndex::new(i, j)) else {
                    continue;
                };
                let distance = tile.position.distance(point);
                if distance <= HEX_RADIUS && best.is_none_or(|(d, _)| distance < d) {
                    best = Some((distance, tile));
                }
            }
        }
        best.map(|(_, tile)| tile)
    }
}

/// Renders tiles viewed from above into a `width x height` image covering the
/// square `[-view_radius, view_radius]` on both ground axes.
///
/// Ground `+y` (world `+z`) points down the image.
fn render_tiles(
    tiles: &[TileRecord],
    width: u32,
    height: u32,
    view_radius: f32,
    color: impl Fn(&TileRecord) -> Rgba,
) -> DebugImage {
    let mut image = DebugImage::filled(width, height, BACKGROUND);
    let lookup = TileLookup::new(tiles);
    let extent = view_radius * 2.0;

    for py in 0..height {
        for px in 0..width {
            let point = Vec2::new(
                -view_radius + (px as f32 + 0.5) / width as f32 * extent,
                -view_radius + (py as f32 + 0.5) / height as f32 * extent,
            );
            if let Some(tile) = lookup.covering(point) {
                image.set_pixel(px, py, color(tile));
            }
        }
    }

    image
}

/// Each pixel takes the band color of the tile covering it.
pub fn render_band_map(tiles: &[TileRecord], width: u32, height: u32, view_radius: f32) -> DebugImage {
    render_tiles(tiles, width, height, view_radius, |tile| band_color(tile.band))
}

/// Each pixel takes a grey level proportional to the height of the tile covering it.
pub fn render_height_map(
    tiles: &[TileRecord],
    width: u32,
    height: u32,
    view_radius: f32,
    max_height: f32,
) -> DebugImage {
    render_tiles(tiles, width, height, view_radius, |tile| {
        height_color(tile.height, max_height)
    })
}
