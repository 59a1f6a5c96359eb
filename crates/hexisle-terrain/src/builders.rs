//! World-placed geometry for tiles and props.
//!
//! Every builder bakes its world translation in, so the generator only has to
//! merge the result into a batch.

use glam::{Vec2, Vec3};
use hexisle_mesh::{CylinderParams, Geometry, MeshError, SphereParams, cuboid, cylinder, sphere};

use crate::decoration::{PropKind, UniformSource};

/// Circumradius of a tile's hexagonal column.
pub const HEX_RADIUS: f32 = 1.0;

/// Gap between the tile surface and the base of a tree's first layer.
const TREE_LIFT: f32 = 1.0;

/// Conifer layers as `(base radius, vertical offset in tree heights)`, trunk first.
const CONIFER_LAYERS: [(f32, f32); 4] = [(0.2, -0.1), (1.5, 0.3), (1.3, 0.6), (0.8, 1.25)];

/// A closed hexagonal prism standing on `y = 0` with its top at `y = height`.
pub fn hex_column(height: f32, position: Vec2) -> Geometry {
    cylinder(&CylinderParams::new(HEX_RADIUS, HEX_RADIUS, height, 6))
        .translated(Vec3::new(position.x, height * 0.5, position.y))
}

/// A layered conifer rising from a tile surface at `height`.
///
/// The tree height is drawn from `[1.25, 2.25)`.
pub fn conifer<R: UniformSource + ?Sized>(
    height: f32,
    position: Vec2,
    rng: &mut R,
) -> Result<Geometry, MeshError> {
    let tree_height = rng.uniform_range(1.25, 2.25) as f32;
    Geometry::concat(CONIFER_LAYERS.iter().map(|&(radius, offset)| {
        cylinder(&CylinderParams::new(0.0, radius, tree_height, 3)).translated(Vec3::new(
            position.x,
            height + tree_height * offset + TREE_LIFT,
            position.y,
        ))
    }))
}

/// A round tree: a trunk cone under two sphere puffs, the smaller one off to the side.
///
/// The tree height is drawn from `[1, 2)`.
pub fn broadleaf<R: UniformSource + ?Sized>(
    height: f32,
    position: Vec2,
    rng: &mut R,
) -> Result<Geometry, MeshError> {
    let tree_height = rng.uniform_range(1.0, 2.0) as f32;

    let trunk = cylinder(&CylinderParams::new(0.0, 0.2, tree_height, 3)).translated(Vec3::new(
        position.x,
        height - tree_height * 0.1 + TREE_LIFT,
        position.y,
    ));
    let crown = sphere(&SphereParams::new(0.8, 6, 7)).translated(Vec3::new(
        position.x,
        height + tree_height * 0.3 + TREE_LIFT,
        position.y,
    ));
    let puff = sphere(&SphereParams::new(0.55, 7, 7)).translated(Vec3::new(
        position.x + 0.5,
        height + tree_height + 0.4,
        position.y,
    ));

    Geometry::concat([crown, puff, trunk])
}

/// A box house half sunk into the tile, under a four-sided roof turned 0.8 rad.
pub fn house(height: f32, position: Vec2) -> Result<Geometry, MeshError> {
    let body = cuboid(0.9, 1.7, 1.0).translated(Vec3::new(position.x, height, position.y));
    let roof = cylinder(&CylinderParams::new(0.0, 0.9, 0.7, 4).with_theta_start(0.8))
        .translated(Vec3::new(position.x, height + 1.2, position.y));
    Geometry::concat([body, roof])
}

impl PropKind {
    /// Builds this prop on a tile of the given surface height.
    pub fn build<R: UniformSource + ?Sized>(
        self,
        height: f32,
        position: Vec2,
        rng: &mut R,
    ) -> Result<Geometry, MeshError> {
        match self {
            PropKind::Conifer => conifer(height, position, rng),
            PropKind::Broadleaf => broadleaf(height, position, rng),
            PropKind::House => house(height, position),
        }
    }
}
