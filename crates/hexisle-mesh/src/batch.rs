//! Geometry batching: collect geometry per material key and concatenate each
//! key into a single buffer, so every material costs one draw call.
//!
//! Merges are deferred. [`GeometryBatcher::merge`] only validates and queues;
//! [`GeometryBatcher::finish`] performs one concatenation per key, which keeps
//! the total cost linear in the number of vertices.

use std::collections::BTreeMap;

use crate::error::MeshError;
use crate::geometry::{Geometry, VertexAttributes};

/// Per-key accumulator of pending geometry.
#[derive(Debug)]
pub struct GeometryBatcher<K> {
    attributes: VertexAttributes,
    pending: BTreeMap<K, Vec<Geometry>>,
}

impl<K: Ord + Copy> GeometryBatcher<K> {
    /// Creates a batcher accepting [`VertexAttributes::STANDARD`] geometry.
    pub fn new() -> Self {
        Self::with_attributes(VertexAttributes::STANDARD)
    }

    /// Creates a batcher accepting only geometry with the given schema.
    pub fn with_attributes(attributes: VertexAttributes) -> Self {
        Self {
            attributes,
            pending: BTreeMap::new(),
        }
    }

    /// The schema every merged geometry must match.
    pub fn attributes(&self) -> VertexAttributes {
        self.attributes
    }

    /// Queues `geometry` for the buffer identified by `key`.
    ///
    /// Empty geometry is accepted and contributes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::IncompatibleAttributes`] if the schema differs
    /// from the batcher's. The geometry is not queued in that case.
    pub fn merge(&mut self, key: K, geometry: Geometry) -> Result<(), MeshError> {
        if geometry.attributes() != self.attributes {
            return Err(MeshError::IncompatibleAttributes {
                expected: self.attributes,
                found: geometry.attributes(),
            });
        }
        self.pending.entry(key).or_default().push(geometry);
        Ok(())
    }

    /// Number of geometries queued under `key`.
    pub fn part_count(&self, key: K) -> usize {
        self.pending.get(&key).map_or(0, Vec::len)
    }

    /// Number of geometries queued across all keys.
    pub fn total_part_count(&self) -> usize {
        self.pending.values().map(Vec::len).sum()
    }

    /// Vertices queued under `key`.
    pub fn vertex_count(&self, key: K) -> usize {
        self.pending
            .get(&key)
            .map_or(0, |parts| parts.iter().map(Geometry::vertex_count).sum())
    }

    /// Keys that have at least one queued geometry, in order.
    pub fn keys(&self) -> impl Iterator<Item = K> + '_ {
        self.pending.keys().copied()
    }

    /// Returns `true` if nothing has been queued.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Concatenates each key's queue into one geometry.
    ///
    /// Keys that never received geometry are absent from the result.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::IndexOverflow`] if a buffer outgrows `u32` indices.
    pub fn finish(self) -> Result<BTreeMap<K, Geometry>, MeshError> {
        let mut out = BTreeMap::new();
        for (key, parts) in self.pending {
            let vertices: usize = parts.iter().map(Geometry::vertex_count).sum();
            if vertices > u32::MAX as usize {
                return Err(MeshError::IndexOverflow { vertices });
            }
            let mut merged = Geometry::with_attributes(self.attributes);
            for part in &parts {
                merged.merge(part)?;
            }
            out.insert(key, merged);
        }
        Ok(out)
    }
}

impl<K: Ord + Copy> Default for GeometryBatcher<K> {
    fn default() -> Self {
        Self::new()
    }
}
