//! Hex lattice addressing and the lattice-to-world mapping.
//!
//! Tiles are addressed by integer `(i, j)` pairs. Odd rows shift by half a
//! column, so the flat grid becomes a honeycomb of interlocking hex columns.

use std::ops::Range;

use glam::Vec2;

/// World-space distance between neighbouring columns.
pub const ROW_SPACING_X: f32 = 1.77;

/// World-space distance between neighbouring rows.
pub const ROW_SPACING_Y: f32 = 1.535;

/// Logical position of a tile in the lattice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LatticeIndex {
    /// Column.
    pub i: i32,
    /// Row.
    pub j: i32,
}

impl LatticeIndex {
    pub const fn new(i: i32, j: i32) -> Self {
        Self { i, j }
    }

    /// Ground-plane position of the tile center.
    pub fn world_position(self) -> Vec2 {
        tile_to_position(self.i, self.j)
    }
}

/// Maps a lattice index to its ground-plane position.
///
/// Uses the truncating remainder, so negative odd rows shift by half a column
/// towards -X while positive odd rows shift towards +X.
pub fn tile_to_position(i: i32, j: i32) -> Vec2 {
    Vec2::new(
        (i as f32 + (j % 2) as f32 * 0.5) * ROW_SPACING_X,
        j as f32 * ROW_SPACING_Y,
    )
}

/// Iterates the square `range x range`, column-major (`i` outer, `j` inner).
pub fn scan_square(range: Range<i32>) -> LatticeScan {
    LatticeScan::new(range)
}

/// Iterator over every index of a square lattice region.
#[derive(Clone, Debug)]
pub struct LatticeScan {
    range: Range<i32>,
    i: i32,
    j: i32,
}

impl LatticeScan {
    pub fn new(range: Range<i32>) -> Self {
        Self {
            i: range.start,
            j: range.start,
            range,
        }
    }

    /// The half-open square `[-extent, extent)` on both axes.
    pub fn centered(extent: i32) -> Self {
        Self::new(-extent..extent)
    }

    pub fn range(&self) -> Range<i32> {
        self.range.clone()
    }

    fn side(&self) -> usize {
        self.range.len()
    }
}

impl Iterator for LatticeScan {
    type Item = LatticeIndex;

    fn next(&mut self) -> Option<LatticeIndex> {
        if self.i >= self.range.end || self.range.is_empty() {
            return None;
        }
        let index = LatticeIndex::new(self.i, self.j);
        self.j += 1;
        if self.j >= self.range.end {
            self.j = self.range.start;
            self.i += 1;
        }
        Some(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let side = self.side();
        let remaining = if side == 0 || self.i >= self.range.end {
            0
        } else {
            let rows_left = (self.range.end - self.i) as usize;
            let done_in_row = (self.j - self.range.start) as usize;
            rows_left * side - done_in_row
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for LatticeScan {}
