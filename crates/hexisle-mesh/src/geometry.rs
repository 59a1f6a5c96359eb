//! Indexed triangle geometry with a declared vertex attribute schema.

use std::fmt;

use glam::Vec3;

use crate::error::MeshError;
use crate::vertex_format::TerrainVertex;

/// The set of per-vertex attributes a [`Geometry`] carries.
///
/// Positions are always present. Two geometries can only be merged when their
/// attribute sets are equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct VertexAttributes {
    /// Per-vertex normals.
    pub normal: bool,
    /// Per-vertex texture coordinates.
    pub uv: bool,
}

impl VertexAttributes {
    /// Position, normal and UV. Every shape builder emits this schema.
    pub const STANDARD: Self = Self {
        normal: true,
        uv: true,
    };

    /// Positions only.
    pub const POSITION_ONLY: Self = Self {
        normal: false,
        uv: false,
    };
}

impl Default for VertexAttributes {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl fmt::Display for VertexAttributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("position")?;
        if self.normal {
            f.write_str("+normal")?;
        }
        if self.uv {
            f.write_str("+uv")?;
        }
        Ok(())
    }
}

/// Triangle mesh data: vertex streams plus a triangle index buffer.
///
/// Streams for attributes missing from the schema stay empty. All other
/// streams always have exactly one entry per vertex.
#[derive(Clone, Debug, PartialEq)]
pub struct Geometry {
    attributes: VertexAttributes,
    positions: Vec<Vec3>,
    normals: Vec<Vec3>,
    uvs: Vec<[f32; 2]>,
    indices: Vec<u32>,
}

impl Geometry {
    /// Creates an empty geometry with the [`VertexAttributes::STANDARD`] schema.
    pub fn new() -> Self {
        Self::with_attributes(VertexAttributes::STANDARD)
    }

    /// Creates an empty geometry with the given schema.
    pub fn with_attributes(attributes: VertexAttributes) -> Self {
        Self {
            attributes,
            positions: Vec::new(),
            normals: Vec::new(),
            uvs: Vec::new(),
            indices: Vec::new(),
        }
    }

    /// Appends a vertex and returns its index.
    ///
    /// `normal` and `uv` are dropped when the schema does not carry them.
    pub fn push_vertex(&mut self, position: Vec3, normal: Vec3, uv: [f32; 2]) -> u32 {
        let index = self.positions.len() as u32;
        self.positions.push(position);
        if self.attributes.normal {
            self.normals.push(normal);
        }
        if self.attributes.uv {
            self.uvs.push(uv);
        }
        index
    }

    /// Appends one triangle. Winding is counter-clockwise for front faces.
    pub fn push_triangle(&mut self, a: u32, b: u32, c: u32) {
        debug_assert!(
            (a.max(b).max(c) as usize) < self.positions.len(),
            "triangle references a vertex that does not exist"
        );
        self.indices.extend_from_slice(&[a, b, c]);
    }

    /// The vertex attribute schema.
    pub fn attributes(&self) -> VertexAttributes {
        self.attributes
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    pub fn uvs(&self) -> &[[f32; 2]] {
        &self.uvs
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns `true` if the geometry has no vertices.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Rigidly offsets every vertex by `offset`.
    pub fn translate(&mut self, offset: Vec3) {
        for p in &mut self.positions {
            *p += offset;
        }
    }

    /// Builder-style variant of [`translate`](Self::translate).
    pub fn translated(mut self, offset: Vec3) -> Self {
        self.translate(offset);
        self
    }

    /// Appends `other` to this geometry, rebasing its indices.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::IncompatibleAttributes`] if the schemas differ, or
    /// [`MeshError::IndexOverflow`] if the result cannot be indexed with `u32`.
    /// On error `self` is left untouched.
    pub fn merge(&mut self, other: &Geometry) -> Result<(), MeshError> {
        if self.attributes != other.attributes {
            return Err(MeshError::IncompatibleAttributes {
                expected: self.attributes,
                found: other.attributes,
            });
        }
        let total = self.positions.len() + other.positions.len();
        if total > u32::MAX as usize {
            return Err(MeshError::IndexOverflow { vertices: total });
        }

        let base = self.positions.len() as u32;
        self.positions.extend_from_slice(&other.positions);
        self.normals.extend_from_slice(&other.normals);
        self.uvs.extend_from_slice(&other.uvs);
        self.indices.extend(other.indices.iter().map(|&i| i + base));
        Ok(())
    }

    /// Concatenates all `parts` into one geometry.
    ///
    /// An empty iterator yields an empty [`VertexAttributes::STANDARD`] geometry.
    /// The schema of the first part is the schema of the result.
    pub fn concat<I>(parts: I) -> Result<Geometry, MeshError>
    where
        I: IntoIterator<Item = Geometry>,
    {
        let mut parts = parts.into_iter();
        let Some(mut merged) = parts.next() else {
            return Ok(Geometry::new());
        };
        for part in parts {
            merged.merge(&part)?;
        }
        Ok(merged)
    }

    /// Axis-aligned bounds as `(min, max)`, or `None` for an empty geometry.
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let first = *self.positions.first()?;
        Some(
            self.positions
                .iter()
                .fold((first, first), |(lo, hi), &p| (lo.min(p), hi.max(p))),
        )
    }

    /// Interleaves the vertex streams for GPU upload.
    ///
    /// Missing attributes are written as zeros.
    pub fn to_vertices(&self) -> Vec<TerrainVertex> {
        (0..self.positions.len())
            .map(|i| TerrainVertex {
                position: self.positions[i].to_array(),
                normal: self.normals.get(i).map_or([0.0; 3], |n| n.to_array()),
                uv: self.uvs.get(i).copied().unwrap_or([0.0; 2]),
            })
            .collect()
    }
}

impl Default for Geometry {
    fn default() -> Self {
        Self::new()
    }
}
