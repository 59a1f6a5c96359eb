//! Mesh error types.

use crate::geometry::VertexAttributes;

/// Errors raised while combining geometry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MeshError {
    /// Two geometries with different vertex attribute sets were merged.
    #[error("cannot merge {found} geometry into a {expected} buffer")]
    IncompatibleAttributes {
        /// Schema of the receiving buffer.
        expected: VertexAttributes,
        /// Schema of the rejected geometry.
        found: VertexAttributes,
    },

    /// The merged vertex count no longer fits a `u32` index buffer.
    #[error("merged geometry has {vertices} vertices, more than u32 indices can address")]
    IndexOverflow {
        /// Vertex count the merge would have produced.
        vertices: usize,
    },
}
