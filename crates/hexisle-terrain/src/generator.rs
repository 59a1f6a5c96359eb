//! The island generation pass.
//!
//! One pass scans the lattice square, culls tiles outside the cutoff circle,
//! samples a height for the rest, builds a hex column per tile and merges it
//! into its band's batch, then rolls that band's decoration rules. The batcher
//! lives for exactly one pass and is handed off as [`TerrainMeshes`].

use std::collections::BTreeMap;
use std::ops::Range;

use glam::Vec2;
use hexisle_mesh::{Geometry, GeometryBatcher};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, instrument};

use crate::band::{BandClassifier, MaterialSlot, TerrainBand};
use crate::builders::hex_column;
use crate::config::TerrainConfig;
use crate::decoration::{PropKind, UniformSource};
use crate::error::TerrainError;
use crate::lattice::{LatticeIndex, scan_square};
use crate::sampler::{HeightSampler, NoiseSampler};
use crate::scenery::Scenery;

/// A tile that survived the cutoff.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TileRecord {
    pub index: LatticeIndex,
    pub position: Vec2,
    pub height: f32,
    pub band: TerrainBand,
}

/// A placed prop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PropRecord {
    /// Tile the prop stands on.
    pub index: LatticeIndex,
    pub kind: PropKind,
    /// Buffer that received the geometry.
    pub target: TerrainBand,
}

/// Counters for one pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GenerationStats {
    pub tiles_scanned: usize,
    pub tiles_kept: usize,
    pub tiles_culled: usize,
    /// Kept tiles per band. Bands without tiles are absent.
    pub tiles_per_band: BTreeMap<TerrainBand, usize>,
    pub props_placed: usize,
}

/// Output of one pass: one merged geometry per populated band.
#[derive(Clone, Debug)]
pub struct TerrainMeshes {
    /// Band buffers. Bands that received nothing are absent.
    pub bands: BTreeMap<TerrainBand, Geometry>,
    /// Kept tiles in scan order.
    pub tiles: Vec<TileRecord>,
    /// Placed props in placement order.
    pub props: Vec<PropRecord>,
    pub stats: GenerationStats,
    pub scenery: Option<Scenery>,
}

impl TerrainMeshes {
    pub fn band(&self, band: TerrainBand) -> Option<&Geometry> {
        self.bands.get(&band)
    }

    /// Each populated buffer paired with the material it is drawn with.
    pub fn material_slots(&self) -> impl Iterator<Item = (MaterialSlot, &Geometry)> {
        self.bands
            .iter()
            .map(|(&band, geometry)| (MaterialSlot::from(band), geometry))
    }

    /// Vertices across all band buffers, scenery excluded.
    pub fn vertex_count(&self) -> usize {
        self.bands.values().map(Geometry::vertex_count).sum()
    }

    pub fn triangle_count(&self) -> usize {
        self.bands.values().map(Geometry::triangle_count).sum()
    }
}

/// Runs generation passes for a validated configuration.
#[derive(Clone, Debug)]
pub struct TerrainGenerator {
    config: TerrainConfig,
    classifier: BandClassifier,
}

impl TerrainGenerator {
    /// Validates `config`. Nothing is sampled or built on failure.
    pub fn new(config: TerrainConfig) -> Result<Self, TerrainError> {
        config.validate()?;
        let classifier = BandClassifier::new(config.max_height, &config.thresholds);
        Ok(Self { config, classifier })
    }

    pub fn config(&self) -> &TerrainConfig {
        &self.config
    }

    /// Generates over the configured scan square.
    pub fn generate<S, R>(&self, sampler: &S, rng: &mut R) -> Result<TerrainMeshes, TerrainError>
    where
        S: HeightSampler + ?Sized,
        R: UniformSource + ?Sized,
    {
        self.generate_in(self.config.scan_range(), sampler, rng)
    }

    /// Generates with simplex noise and a ChaCha stream, both seeded from `seed`.
    pub fn generate_seeded(&self, seed: u64) -> Result<TerrainMeshes, TerrainError> {
        let sampler = NoiseSampler::simplex(
            seed,
            self.config.noise_frequency,
            self.config.noise_exponent,
        );
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.generate(&sampler, &mut rng)
    }

    /// Generates over the square `range x range`.
    #[instrument(skip_all, fields(range = ?range))]
    pub fn generate_in<S, R>(
        &self,
        range: Range<i32>,
        sampler: &S,
        rng: &mut R,
    ) -> Result<TerrainMeshes, TerrainError>
    where
        S: HeightSampler + ?Sized,
        R: UniformSource + ?Sized,
    {
        let cutoff = self.config.cutoff_radius;
        let max_height = self.config.max_height;

        let mut batcher = GeometryBatcher::new();
        let mut tiles = Vec::new();
        let mut props = Vec::new();
        let mut stats = GenerationStats::default();

        for index in scan_square(range) {
            stats.tiles_scanned += 1;
            let position = index.world_position();
            if position.length() > cutoff {
                stats.tiles_culled += 1;
                continue;
            }

            let height = sampler.sample(index) as f32 * max_height;
            let band = self.classifier.classify(height);
            batcher.merge(band, hex_column(height, position))?;

            for rule in self.config.decorations.rules_for(band) {
                if !rule.roll(rng) {
                    continue;
                }
                let geometry = rule.prop.build(height, position, rng)?;
                batcher.merge(rule.target, geometry)?;
                props.push(PropRecord {
                    index,
                    kind: rule.prop,
                    target: rule.target,
                });
            }

            *stats.tiles_per_band.entry(band).or_default() += 1;
            tiles.push(TileRecord {
                index,
                position,
                height,
                band,
            });
        }

        stats.tiles_kept = tiles.len();
        stats.props_placed = props.len();

        debug!(parts = batcher.total_part_count(), "merging band buffers");
        let bands = batcher.finish()?;
        for (band, geometry) in &bands {
            debug!(
                %band,
                tiles = stats.tiles_per_band.get(band).copied().unwrap_or(0),
                vertices = geometry.vertex_count(),
                triangles = geometry.triangle_count(),
                "band buffer ready"
            );
        }

        let scenery = self
            .config
            .scenery
            .then(|| Scenery::build(cutoff, max_height));

        info!(
            scanned = stats.tiles_scanned,
            kept = stats.tiles_kept,
            culled = stats.tiles_culled,
            props = stats.props_placed,
            bands = bands.len(),
            "terrain generated"
        );

        Ok(TerrainMeshes {
            bands,
            tiles,
            props,
            stats,
            scenery,
        })
    }
}

/// Validates `config` and runs one seeded pass.
///
/// A `None` seed draws a fresh one, so repeated calls produce different islands.
pub fn generate_terrain(config: &TerrainConfig) -> Result<TerrainMeshes, TerrainError> {
    let generator = TerrainGenerator::new(config.clone())?;
    let seed = config.seed.unwrap_or_else(rand::random);
    info!(seed, "generating island");
    generator.generate_seeded(seed)
}

#[cfg(test)]
mod tests {
    use hexisle_mesh::{CylinderParams, cylinder};

    use super::*;
    use crate::decoration::{ConstantSource, DecorationRule, DecorationTable, SequenceSource};
    use crate::error::ConfigurationError;

    fn column_vertices() -> usize {
        cylinder(&CylinderParams::new(1.0, 1.0, 1.0, 6)).vertex_count()
    }

    fn open_config() -> TerrainConfig {
        TerrainConfig {
            cutoff_radius: 100.0,
            scenery: false,
            ..Default::default()
        }
    }

    #[test]
    fn test_flat_noise_fills_only_base() {
        let generator = TerrainGenerator::new(open_config()).unwrap();
        let flat = |_: LatticeIndex| 0.0;
        let out = generator
            .generate_in(-1..2, &flat, &mut ConstantSource(0.0))
            .unwrap();

        assert_eq!(out.bands.len(), 1, "only the base buffer should exist");
        let base = out.band(TerrainBand::Base).unwrap();
        assert_eq!(base.vertex_count(), 9 * column_vertices());
        assert!(out.props.is_empty(), "base tiles never carry props");
        assert!(out.tiles.iter().all(|t| t.height == 0.0));
    }

    #[test]
    fn test_full_noise_fills_stone() {
        let generator = TerrainGenerator::new(open_config()).unwrap();
        let peak = |_: LatticeIndex| 1.0;
        let out = generator
            .generate_in(-1..2, &peak, &mut ConstantSource(0.99))
            .unwrap();

        let stone = out.band(TerrainBand::Stone).unwrap();
        assert_eq!(stone.vertex_count(), 9 * column_vertices());
        for band in [TerrainBand::Dirt, TerrainBand::Grass, TerrainBand::Sand] {
            assert!(out.band(band).is_none(), "{band} should be empty");
        }
        assert!(out.band(TerrainBand::Base).is_none());
        assert_eq!(out.stats.tiles_per_band[&TerrainBand::Stone], 9);
    }

    #[test]
    fn test_stone_houses_land_in_base() {
        let generator = TerrainGenerator::new(open_config()).unwrap();
        let peak = |_: LatticeIndex| 1.0;
        let out = generator
            .generate_in(-1..2, &peak, &mut ConstantSource(0.0))
            .unwrap();

        assert_eq!(out.props.len(), 9);
        assert!(out.props.iter().all(|p| p.kind == PropKind::House));
        assert!(out.props.iter().all(|p| p.target == TerrainBand::Base));

        let base = out.band(TerrainBand::Base).unwrap();
        let house_vertices = crate::builders::house(0.0, Vec2::ZERO).unwrap().vertex_count();
        assert_eq!(base.vertex_count(), 9 * house_vertices);
        assert_eq!(
            out.band(TerrainBand::Stone).unwrap().vertex_count(),
            9 * column_vertices(),
            "props must not leak into the stone buffer"
        );
    }

    #[test]
    fn test_grass_tile_can_take_tree_and_house() {
        let generator = TerrainGenerator::new(open_config()).unwrap();
        // 0.6 * 10 = 6, inside the grass band.
        let meadow = |_: LatticeIndex| 0.6;
        let out = generator
            .generate_in(0..1, &meadow, &mut ConstantSource(0.0))
            .unwrap();

        let kinds: Vec<_> = out.props.iter().map(|p| p.kind).collect();
        assert_eq!(kinds, vec![PropKind::Conifer, PropKind::House]);
        assert!(out.band(TerrainBand::Grass).is_some());
        assert!(out.band(TerrainBand::Base).is_some());
    }

    #[test]
    fn test_draw_order_is_roll_then_shape() {
        let config = TerrainConfig {
            decorations: DecorationTable::new(vec![DecorationRule::new(
                TerrainBand::Stone,
                PropKind::Conifer,
                0.5,
                TerrainBand::Grass,
            )]),
            ..open_config()
        };
        let generator = TerrainGenerator::new(config).unwrap();
        let peak = |_: LatticeIndex| 1.0;
        // One tile: a roll of 0.1 places, then 0.7 shapes the tree. 0.9 is never drawn.
        let mut rng = SequenceSource::new(vec![0.1, 0.7, 0.9]);
        let out = generator.generate_in(0..1, &peak, &mut rng).unwrap();
        assert_eq!(out.props.len(), 1);
        assert_eq!(rng.draws(), 2);
    }

    #[test]
    fn test_high_draws_place_no_props() {
        let generator = TerrainGenerator::new(open_config()).unwrap();
        let ramp = |index: LatticeIndex| ((index.i + 5) as f64 / 10.0).clamp(0.0, 1.0);
        let out = generator
            .generate_in(-5..5, &ramp, &mut ConstantSource(0.99))
            .unwrap();
        assert!(out.props.is_empty());
        assert!(out.bands.len() >= 4, "ramp should cover most bands");
    }

    #[test]
    fn test_cutoff_boundary_is_inclusive() {
        let edge = LatticeIndex::new(2, 0);
        let config = TerrainConfig {
            cutoff_radius: edge.world_position().length(),
            ..open_config()
        };
        let generator = TerrainGenerator::new(config).unwrap();
        let out = generator
            .generate_in(-3..3, &|_: LatticeIndex| 0.5, &mut ConstantSource(0.99))
            .unwrap();

        assert!(out.tiles.iter().any(|t| t.index == edge), "edge tile should be kept");
        assert!(out.tiles.iter().all(|t| t.index != LatticeIndex::new(-3, 0)));
    }

    #[test]
    fn test_cull_partition() {
        let generator = TerrainGenerator::new(TerrainConfig {
            scenery: false,
            ..Default::default()
        })
        .unwrap();
        let out = generator
            .generate(&|_: LatticeIndex| 0.4, &mut ConstantSource(0.99))
            .unwrap();

        let cutoff = generator.config().cutoff_radius;
        assert_eq!(out.stats.tiles_scanned, 900);
        assert_eq!(out.stats.tiles_kept + out.stats.tiles_culled, 900);
        assert!(out.stats.tiles_culled > 0);

        for tile in &out.tiles {
            assert!(tile.position.length() <= cutoff);
        }
        let kept: std::collections::HashSet<_> = out.tiles.iter().map(|t| t.index).collect();
        for index in scan_square(-15..15).filter(|idx| !kept.contains(idx)) {
            assert!(index.world_position().length() > cutoff, "{index:?} wrongly culled");
        }
    }

    #[test]
    fn test_every_kept_tile_lands_in_one_buffer() {
        let generator = TerrainGenerator::new(TerrainConfig {
            decorations: DecorationTable::empty(),
            scenery: false,
            ..Default::default()
        })
        .unwrap();
        let out = generator.generate_seeded(42).unwrap();
        let per_tile = column_vertices();
        assert_eq!(out.vertex_count(), out.tiles.len() * per_tile);
        for (band, geometry) in &out.bands {
            assert_eq!(geometry.vertex_count(), out.stats.tiles_per_band[band] * per_tile);
        }
    }

    #[test]
    fn test_seeded_heights_are_reproducible() {
        let generator = TerrainGenerator::new(open_config()).unwrap();
        let a = generator.generate_seeded(7).unwrap();
        let b = generator.generate_seeded(7).unwrap();
        let heights = |m: &TerrainMeshes| m.tiles.iter().map(|t| t.height).collect::<Vec<_>>();
        assert_eq!(heights(&a), heights(&b));
    }

    #[test]
    fn test_invalid_config_fails_before_generation() {
        let config = TerrainConfig {
            max_height: f32::NAN,
            ..Default::default()
        };
        let err = TerrainGenerator::new(config.clone()).unwrap_err();
        assert!(matches!(
            err,
            TerrainError::Config(ConfigurationError::InvalidMaxHeight(_))
        ));
        assert!(generate_terrain(&config).is_err());
    }

    #[test]
    fn test_scenery_follows_flag() {
        let with = generate_terrain(&TerrainConfig {
            seed: Some(3),
            scan_extent: 2,
            ..Default::default()
        })
        .unwrap();
        assert!(with.scenery.is_some());

        let without = generate_terrain(&TerrainConfig {
            seed: Some(3),
            scan_extent: 2,
            scenery: false,
            ..Default::default()
        })
        .unwrap();
        assert!(without.scenery.is_none());
    }

    #[test]
    fn test_material_slots_cover_populated_bands() {
        let out = generate_terrain(&TerrainConfig {
            seed: Some(11),
            ..Default::default()
        })
        .unwrap();
        let slots: Vec<_> = out.material_slots().map(|(slot, _)| slot.band).collect();
        let bands: Vec<_> = out.bands.keys().copied().collect();
        assert_eq!(slots, bands);
    }

    #[test]
    fn test_empty_range_yields_nothing() {
        let generator = TerrainGenerator::new(open_config()).unwrap();
        let out = generator
            .generate_in(0..0, &|_: LatticeIndex| 1.0, &mut ConstantSource(0.0))
            .unwrap();
        assert!(out.bands.is_empty());
        assert_eq!(out.stats, GenerationStats::default());
    }
}
