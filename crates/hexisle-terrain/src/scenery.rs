//! Static scenery around the island: the sea disc, the map floor and the glass dome.
//!
//! Radii follow the cutoff radius so the scenery always frames the kept tiles.

use glam::Vec3;
use hexisle_mesh::{CylinderParams, Geometry, SphereParams, cylinder, sphere};

/// Radial segments of the sea and floor discs.
const DISC_SEGMENTS: u32 = 50;

/// Horizontal sweep of the dome. Slightly short of a full turn, which leaves a seam.
const DOME_PHI_LENGTH: f32 = 6.28;

/// Vertical sweep of the dome from the pole. Slightly past the equator.
const DOME_THETA_LENGTH: f32 = 1.67;

/// Scenery geometry, world-placed.
#[derive(Clone, Debug)]
pub struct Scenery {
    /// Water disc filling the low ground, rising `0.2 * max_height` from the floor.
    pub sea: Geometry,
    /// Slab under the whole map.
    pub floor: Geometry,
    /// Open-bottomed glass dome over the island.
    pub dome: Geometry,
}

impl Scenery {
    pub fn build(cutoff_radius: f32, max_height: f32) -> Self {
        let slab_height = max_height * 0.2;

        let sea = cylinder(&CylinderParams::new(
            cutoff_radius + 2.5,
            cutoff_radius + 2.5,
            slab_height,
            DISC_SEGMENTS,
        ))
        .translated(Vec3::new(0.0, max_height * 0.1, 0.0));

        let floor = cylinder(&CylinderParams::new(
            cutoff_radius + 3.5,
            cutoff_radius + 3.5,
            slab_height,
            DISC_SEGMENTS,
        ))
        .translated(Vec3::new(0.0, -max_height * 0.05, 0.0));

        let dome = sphere(&SphereParams {
            radius: cutoff_radius + 3.0,
            width_segments: 32,
            height_segments: 16,
            phi_length: DOME_PHI_LENGTH,
            theta_length: DOME_THETA_LENGTH,
            ..Default::default()
        });

        Self { sea, floor, dome }
    }

    pub fn vertex_count(&self) -> usize {
        self.sea.vertex_count() + self.floor.vertex_count() + self.dome.vertex_count()
    }
}
