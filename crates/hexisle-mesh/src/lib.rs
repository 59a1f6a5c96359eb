//! Mesh data for the hexisle terrain: indexed geometry, parametric shape
//! builders, per-material batching, and the GPU vertex layout.

pub mod batch;
pub mod error;
pub mod geometry;
pub mod shapes;
pub mod vertex_format;

pub use batch::GeometryBatcher;
pub use error::MeshError;
pub use geometry::{Geometry, VertexAttributes};
pub use shapes::{CylinderParams, SphereParams, cuboid, cylinder, sphere};
pub use vertex_format::{
    TERRAIN_VERTEX_ATTRIBUTES, TERRAIN_VERTEX_LAYOUT, TerrainVertex, terrain_vertex_buffer_layout,
};
