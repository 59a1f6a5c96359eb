//! Interleaved vertex format and the matching `wgpu::VertexBufferLayout`.
//!
//! Every batched terrain buffer is uploaded with [`TERRAIN_VERTEX_LAYOUT`], so
//! all band materials can share one pipeline layout.
//!
//! ## Attribute Packing
//!
//! | Location | Offset | Format    | Field    |
//! |----------|--------|-----------|----------|
//! | 0        | 0      | Float32x3 | position |
//! | 1        | 12     | Float32x3 | normal   |
//! | 2        | 24     | Float32x2 | uv       |

use std::mem;

use wgpu::{VertexAttribute, VertexBufferLayout, VertexFormat, VertexStepMode};

/// A single interleaved vertex, 32 bytes.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TerrainVertex {
    /// World-space position.
    pub position: [f32; 3],
    /// Unit surface normal.
    pub normal: [f32; 3],
    /// Texture coordinates.
    pub uv: [f32; 2],
}

static_assertions::assert_eq_size!(TerrainVertex, [u8; 32]);

/// Vertex attributes for [`TerrainVertex`].
pub const TERRAIN_VERTEX_ATTRIBUTES: [VertexAttribute; 3] = [
    VertexAttribute {
        format: VertexFormat::Float32x3,
        offset: 0,
        shader_location: 0,
    },
    VertexAttribute {
        format: VertexFormat::Float32x3,
        offset: 12,
        shader_location: 1,
    },
    VertexAttribute {
        format: VertexFormat::Float32x2,
        offset: 24,
        shader_location: 2,
    },
];

/// The vertex buffer layout shared by all terrain and prop buffers.
pub const TERRAIN_VERTEX_LAYOUT: VertexBufferLayout<'static> = VertexBufferLayout {
    array_stride: mem::size_of::<TerrainVertex>() as u64,
    step_mode: VertexStepMode::Vertex,
    attributes: &TERRAIN_VERTEX_ATTRIBUTES,
};

/// Owned copy of [`TERRAIN_VERTEX_LAYOUT`].
pub fn terrain_vertex_buffer_layout() -> VertexBufferLayout<'static> {
    TERRAIN_VERTEX_LAYOUT
}

const _: () = assert!(TERRAIN_VERTEX_ATTRIBUTES[0].offset == mem::offset_of!(TerrainVertex, position) as u64);
const _: () = assert!(TERRAIN_VERTEX_ATTRIBUTES[1].offset == mem::offset_of!(TerrainVertex, normal) as u64);
const _: () = assert!(TERRAIN_VERTEX_ATTRIBUTES[2].offset == mem::offset_of!(TerrainVertex, uv) as u64);

const _: () = assert!(
    TERRAIN_VERTEX_ATTRIBUTES[2].offset + 8 <= mem::size_of::<TerrainVertex>() as u64,
    "Last attribute exceeds vertex stride"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_stride_matches_vertex_struct_size() {
        assert_eq!(
            TERRAIN_VERTEX_LAYOUT.array_stride,
            mem::size_of::<TerrainVertex>() as u64
        );
    }

    #[test]
    fn test_attribute_formats() {
        assert_eq!(TERRAIN_VERTEX_ATTRIBUTES[0].format, VertexFormat::Float32x3);
        assert_eq!(TERRAIN_VERTEX_ATTRIBUTES[1].format, VertexFormat::Float32x3);
        assert_eq!(TERRAIN_VERTEX_ATTRIBUTES[2].format, VertexFormat::Float32x2);
    }

    #[test]
    fn test_shader_locations_are_sequential() {
        for (i, attr) in TERRAIN_VERTEX_ATTRIBUTES.iter().enumerate() {
            assert_eq!(attr.shader_location, i as u32);
        }
    }

    #[test]
    fn test_helper_returns_same_layout() {
        let layout = terrain_vertex_buffer_layout();
        assert_eq!(layout.array_stride, TERRAIN_VERTEX_LAYOUT.array_stride);
        assert_eq!(layout.attributes.len(), 3);
    }

    #[test]
    fn test_vertex_casts_to_bytes() {
        let verts = [TerrainVertex {
            position: [1.0, 2.0, 3.0],
            normal: [0.0, 1.0, 0.0],
            uv: [0.5, 0.25],
        }];
        let bytes: &[u8] = bytemuck::cast_slice(&verts);
        assert_eq!(bytes.len(), 32);
        assert_eq!(&bytes[0..4], &1.0f32.to_ne_bytes());
        assert_eq!(&bytes[28..32], &0.25f32.to_ne_bytes());
    }
}
