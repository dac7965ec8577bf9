//! Transvoxel regular-cell lookup tables
//!
//! The three lookup tables are kept in the canonical packed layout published
//! with the Transvoxel algorithm (Eric Lengyel, 2010). Corner `i` has lattice
//! bits `(i & 1, (i >> 1) & 1, (i >> 2) & 1)`; the lattice is mapped onto world
//! axes as `x = bit 0`, `y = bit 2` and `z = -bit 1`, so corners 0-3 form the
//! bottom face and 4-7 the top face. The mapping is a proper rotation, which
//! keeps the tables' triangle winding intact.

use crate::error::TableError;
use glam::Vec3;

/// Number of case codes (one per inside/outside corner pattern).
pub const CASE_COUNT: usize = 256;

/// Maximum number of vertex codes a regular cell can reference.
pub const MAX_CELL_VERTICES: usize = 12;

/// Maximum number of triangles a regular cell can emit.
pub const MAX_CELL_TRIANGLES: usize = 5;

/// Number of reuse slots per owner voxel.
pub const REUSE_SLOTS: usize = 4;

/// Unit-cube corner offsets in world axes, components ±1.
///
/// Multiply by half the voxel size to get the offset from a voxel's center.
pub const CORNER_OFFSETS: [Vec3; 8] = [
    Vec3::new(-1.0, -1.0, 1.0),
    Vec3::new(1.0, -1.0, 1.0),
    Vec3::new(-1.0, -1.0, -1.0),
    Vec3::new(1.0, -1.0, -1.0),
    Vec3::new(-1.0, 1.0, 1.0),
    Vec3::new(1.0, 1.0, 1.0),
    Vec3::new(-1.0, 1.0, -1.0),
    Vec3::new(1.0, 1.0, -1.0),
];

/// Triangulation for one cell class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegularCellData {
    /// High nibble: vertex count. Low nibble: triangle count.
    pub geometry_counts: u8,
    /// Triangle vertex indices, three per triangle, into the case's vertex codes.
    pub vertex_index: [u8; 15],
}

impl RegularCellData {
    const fn new(geometry_counts: u8, vertex_index: [u8; 15]) -> Self {
        Self {
            geometry_counts,
            vertex_index,
        }
    }

    pub const fn vertex_count(&self) -> usize {
        (self.geometry_counts >> 4) as usize
    }

    pub const fn triangle_count(&self) -> usize {
        (self.geometry_counts & 0x0F) as usize
    }

    /// The triangle index list, clamped to the storage size.
    pub fn indices(&self) -> &[u8] {
        let len = (self.triangle_count() * 3).min(self.vertex_index.len());
        &self.vertex_index[..len]
    }
}

/// Maps a case code to its cell class.
#[rustfmt::skip]
pub const REGULAR_CELL_CLASS: [u8; CASE_COUNT] = [
    0x00, 0x01, 0x01, 0x03, 0x01, 0x03, 0x02, 0x04, 0x01, 0x02, 0x03, 0x04, 0x03, 0x04, 0x04, 0x03,
    0x01, 0x03, 0x02, 0x04, 0x02, 0x04, 0x06, 0x0C, 0x02, 0x05, 0x05, 0x0B, 0x05, 0x0A, 0x07, 0x04,
    0x01, 0x02, 0x03, 0x04, 0x02, 0x05, 0x05, 0x0A, 0x02, 0x06, 0x04, 0x0C, 0x05, 0x07, 0x0B, 0x04,
    0x03, 0x04, 0x04, 0x03, 0x05, 0x0B, 0x07, 0x04, 0x05, 0x07, 0x0A, 0x04, 0x08, 0x0E, 0x0E, 0x03,
    0x01, 0x02, 0x02, 0x05, 0x03, 0x04, 0x05, 0x0B, 0x02, 0x06, 0x05, 0x07, 0x04, 0x0C, 0x0A, 0x04,
    0x03, 0x04, 0x05, 0x0A, 0x04, 0x03, 0x07, 0x04, 0x05, 0x07, 0x08, 0x0E, 0x0B, 0x04, 0x0E, 0x03,
    0x02, 0x06, 0x05, 0x07, 0x05, 0x07, 0x08, 0x0E, 0x06, 0x09, 0x07, 0x0F, 0x07, 0x0F, 0x0E, 0x0D,
    0x04, 0x0C, 0x0B, 0x04, 0x0A, 0x04, 0x0E, 0x03, 0x07, 0x0F, 0x0E, 0x0D, 0x0E, 0x0D, 0x02, 0x01,
    0x01, 0x02, 0x02, 0x05, 0x02, 0x05, 0x06, 0x07, 0x03, 0x05, 0x04, 0x0A, 0x04, 0x0B, 0x0C, 0x04,
    0x02, 0x05, 0x06, 0x07, 0x06, 0x07, 0x09, 0x0F, 0x05, 0x08, 0x07, 0x0E, 0x07, 0x0E, 0x0F, 0x0D,
    0x03, 0x05, 0x04, 0x0B, 0x05, 0x08, 0x07, 0x0E, 0x04, 0x07, 0x03, 0x04, 0x0A, 0x0E, 0x04, 0x03,
    0x04, 0x0A, 0x0C, 0x04, 0x07, 0x0E, 0x0F, 0x0D, 0x0B, 0x0E, 0x04, 0x03, 0x0E, 0x02, 0x0D, 0x01,
    0x03, 0x05, 0x05, 0x08, 0x04, 0x0A, 0x07, 0x0E, 0x04, 0x07, 0x0B, 0x0E, 0x03, 0x04, 0x04, 0x03,
    0x04, 0x0B, 0x07, 0x0E, 0x0C, 0x04, 0x0F, 0x0D, 0x0A, 0x0E, 0x0E, 0x02, 0x04, 0x03, 0x0D, 0x01,
    0x04, 0x07, 0x0A, 0x0E, 0x0B, 0x0E, 0x0E, 0x02, 0x0C, 0x0F, 0x04, 0x0D, 0x04, 0x0D, 0x03, 0x01,
    0x03, 0x04, 0x04, 0x03, 0x04, 0x03, 0x0D, 0x01, 0x04, 0x0D, 0x03, 0x01, 0x03, 0x01, 0x01, 0x00,
];

/// Triangulation for each of the 16 cell classes.
#[rustfmt::skip]
pub const REGULAR_CELL_DATA: [RegularCellData; 16] = [
    RegularCellData::new(0x00, [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
    RegularCellData::new(0x31, [0, 1, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
    RegularCellData::new(0x62, [0, 1, 2, 3, 4, 5, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
    RegularCellData::new(0x42, [0, 1, 2, 0, 2, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
    RegularCellData::new(0x53, [0, 1, 4, 1, 3, 4, 1, 2, 3, 0, 0, 0, 0, 0, 0]),
    RegularCellData::new(0x73, [0, 1, 2, 0, 2, 3, 4, 5, 6, 0, 0, 0, 0, 0, 0]),
    RegularCellData::new(0x93, [0, 1, 2, 3, 4, 5, 6, 7, 8, 0, 0, 0, 0, 0, 0]),
    RegularCellData::new(0x84, [0, 1, 4, 1, 3, 4, 1, 2, 3, 5, 6, 7, 0, 0, 0]),
    RegularCellData::new(0x84, [0, 1, 2, 0, 2, 3, 4, 5, 6, 4, 6, 7, 0, 0, 0]),
    RegularCellData::new(0xC4, [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 0, 0, 0]),
    RegularCellData::new(0x64, [0, 4, 5, 0, 1, 4, 1, 3, 4, 1, 2, 3, 0, 0, 0]),
    RegularCellData::new(0x64, [0, 5, 4, 0, 4, 1, 1, 4, 3, 1, 3, 2, 0, 0, 0]),
    RegularCellData::new(0x64, [0, 4, 5, 0, 3, 4, 0, 1, 3, 1, 2, 3, 0, 0, 0]),
    RegularCellData::new(0x64, [0, 1, 2, 0, 2, 3, 0, 3, 4, 0, 4, 5, 0, 0, 0]),
    RegularCellData::new(0x75, [0, 1, 2, 0, 2, 3, 0, 3, 4, 0, 4, 5, 0, 5, 6]),
    RegularCellData::new(0x95, [0, 4, 5, 0, 3, 4, 0, 1, 3, 1, 2, 3, 6, 7, 8]),
];

/// Vertex codes for each case code, zero padded to twelve entries.
///
/// Layout of one code: bits 0-3 high corner, bits 4-7 low corner, bits 8-11
/// reuse slot, bits 12-15 owner direction.
#[rustfmt::skip]
pub const REGULAR_VERTEX_DATA: [[u16; MAX_CELL_VERTICES]; CASE_COUNT] = [
    padded([]),
    padded([0x6201, 0x5102, 0x3304]),
    padded([0x6201, 0x2315, 0x4113]),
    padded([0x5102, 0x3304, 0x2315, 0x4113]),
    padded([0x5102, 0x4223, 0x1326]),
    padded([0x3304, 0x6201, 0x4223, 0x1326]),
    padded([0x6201, 0x2315, 0x4113, 0x5102, 0x4223, 0x1326]),
    padded([0x4223, 0x1326, 0x3304, 0x2315, 0x4113]),
    padded([0x4113, 0x8337, 0x4223]),
    padded([0x6201, 0x5102, 0x3304, 0x4223, 0x4113, 0x8337]),
    padded([0x6201, 0x2315, 0x8337, 0x4223]),
    padded([0x5102, 0x3304, 0x2315, 0x8337, 0x4223]),
    padded([0x5102, 0x4113, 0x8337, 0x1326]),
    padded([0x4113, 0x8337, 0x1326, 0x3304, 0x6201]),
    padded([0x6201, 0x2315, 0x8337, 0x1326, 0x5102]),
    padded([0x3304, 0x2315, 0x8337, 0x1326]),
    padded([0x3304, 0x1146, 0x2245]),
    padded([0x6201, 0x5102, 0x1146, 0x2245]),
    padded([0x6201, 0x2315, 0x4113, 0x3304, 0x1146, 0x2245]),
    padded([0x2315, 0x4113, 0x5102, 0x1146, 0x2245]),
    padded([0x5102, 0x4223, 0x1326, 0x3304, 0x1146, 0x2245]),
    padded([0x1146, 0x2245, 0x6201, 0x4223, 0x1326]),
    padded([0x3304, 0x1146, 0x2245, 0x6201, 0x2315, 0x4113, 0x5102, 0x4223, 0x1326]),
    padded([0x4223, 0x1326, 0x1146, 0x2245, 0x2315, 0x4113]),
    padded([0x4223, 0x4113, 0x8337, 0x3304, 0x1146, 0x2245]),
    padded([0x6201, 0x5102, 0x1146, 0x2245, 0x4223, 0x4113, 0x8337]),
    padded([0x4223, 0x6201, 0x2315, 0x8337, 0x3304, 0x1146, 0x2245]),
    padded([0x4223, 0x8337, 0x2315, 0x2245, 0x1146, 0x5102]),
    padded([0x5102, 0x4113, 0x8337, 0x1326, 0x3304, 0x1146, 0x2245]),
    padded([0x4113, 0x8337, 0x1326, 0x1146, 0x2245, 0x6201]),
    padded([0x6201, 0x2315, 0x8337, 0x1326, 0x5102, 0x3304, 0x1146, 0x2245]),
    padded([0x2245, 0x2315, 0x8337, 0x1326, 0x1146]),
    padded([0x2315, 0x2245, 0x8157]),
    padded([0x6201, 0x5102, 0x3304, 0x2315, 0x2245, 0x8157]),
    padded([0x4113, 0x6201, 0x2245, 0x8157]),
    padded([0x2245, 0x8157, 0x4113, 0x5102, 0x3304]),
    padded([0x5102, 0x4223, 0x1326, 0x2315, 0x2245, 0x8157]),
    padded([0x6201, 0x4223, 0x1326, 0x3304, 0x2315, 0x2245, 0x8157]),
    padded([0x6201, 0x2245, 0x8157, 0x4113, 0x5102, 0x4223, 0x1326]),
    padded([0x4223, 0x1326, 0x3304, 0x2245, 0x8157, 0x4113]),
    padded([0x4223, 0x4113, 0x8337, 0x2315, 0x2245, 0x8157]),
    padded([0x6201, 0x5102, 0x3304, 0x4223, 0x4113, 0x8337, 0x2315, 0x2245, 0x8157]),
    padded([0x8337, 0x4223, 0x6201, 0x2245, 0x8157]),
    padded([0x5102, 0x3304, 0x2245, 0x8157, 0x8337, 0x4223]),
    padded([0x5102, 0x4113, 0x8337, 0x1326, 0x2315, 0x2245, 0x8157]),
    padded([0x4113, 0x8337, 0x1326, 0x3304, 0x6201, 0x2315, 0x2245, 0x8157]),
    padded([0x5102, 0x1326, 0x8337, 0x8157, 0x2245, 0x6201]),
    padded([0x8157, 0x8337, 0x1326, 0x3304, 0x2245]),
    padded([0x2315, 0x3304, 0x1146, 0x8157]),
    padded([0x6201, 0x5102, 0x1146, 0x8157, 0x2315]),
    padded([0x3304, 0x1146, 0x8157, 0x4113, 0x6201]),
    padded([0x4113, 0x5102, 0x1146, 0x8157]),
    padded([0x2315, 0x3304, 0x1146, 0x8157, 0x5102, 0x4223, 0x1326]),
    padded([0x1326, 0x4223, 0x6201, 0x2315, 0x8157, 0x1146]),
    padded([0x6201, 0x3304, 0x1146, 0x8157, 0x4113, 0x5102, 0x4223, 0x1326]),
    padded([0x1326, 0x1146, 0x8157, 0x4113, 0x4223]),
    padded([0x2315, 0x3304, 0x1146, 0x8157, 0x4223, 0x4113, 0x8337]),
    padded([0x6201, 0x5102, 0x1146, 0x8157, 0x2315, 0x4223, 0x4113, 0x8337]),
    padded([0x3304, 0x1146, 0x8157, 0x8337, 0x4223, 0x6201]),
    padded([0x4223, 0x5102, 0x1146, 0x8157, 0x8337]),
    padded([0x2315, 0x3304, 0x1146, 0x8157, 0x5102, 0x4113, 0x8337, 0x1326]),
    padded([0x6201, 0x4113, 0x8337, 0x1326, 0x1146, 0x8157, 0x2315]),
    padded([0x6201, 0x3304, 0x1146, 0x8157, 0x8337, 0x1326, 0x5102]),
    padded([0x1326, 0x1146, 0x8157, 0x8337]),
    padded([0x1326, 0x8267, 0x1146]),
    padded([0x6201, 0x5102, 0x3304, 0x1326, 0x8267, 0x1146]),
    padded([0x6201, 0x2315, 0x4113, 0x1326, 0x8267, 0x1146]),
    padded([0x5102, 0x3304, 0x2315, 0x4113, 0x1326, 0x8267, 0x1146]),
    padded([0x5102, 0x4223, 0x8267, 0x1146]),
    padded([0x3304, 0x6201, 0x4223, 0x8267, 0x1146]),
    padded([0x5102, 0x4223, 0x8267, 0x1146, 0x6201, 0x2315, 0x4113]),
    padded([0x1146, 0x8267, 0x4223, 0x4113, 0x2315, 0x3304]),
    padded([0x4113, 0x8337, 0x4223, 0x1326, 0x8267, 0x1146]),
    padded([0x6201, 0x5102, 0x3304, 0x4223, 0x4113, 0x8337, 0x1326, 0x8267, 0x1146]),
    padded([0x6201, 0x2315, 0x8337, 0x4223, 0x1326, 0x8267, 0x1146]),
    padded([0x5102, 0x3304, 0x2315, 0x8337, 0x4223, 0x1326, 0x8267, 0x1146]),
    padded([0x8267, 0x1146, 0x5102, 0x4113, 0x8337]),
    padded([0x6201, 0x4113, 0x8337, 0x8267, 0x1146, 0x3304]),
    padded([0x6201, 0x2315, 0x8337, 0x8267, 0x1146, 0x5102]),
    padded([0x1146, 0x3304, 0x2315, 0x8337, 0x8267]),
    padded([0x3304, 0x1326, 0x8267, 0x2245]),
    padded([0x1326, 0x8267, 0x2245, 0x6201, 0x5102]),
    padded([0x3304, 0x1326, 0x8267, 0x2245, 0x6201, 0x2315, 0x4113]),
    padded([0x1326, 0x8267, 0x2245, 0x2315, 0x4113, 0x5102]),
    padded([0x5102, 0x4223, 0x8267, 0x2245, 0x3304]),
    padded([0x6201, 0x4223, 0x8267, 0x2245]),
    padded([0x5102, 0x4223, 0x8267, 0x2245, 0x3304, 0x6201, 0x2315, 0x4113]),
    padded([0x4113, 0x4223, 0x8267, 0x2245, 0x2315]),
    padded([0x3304, 0x1326, 0x8267, 0x2245, 0x4223, 0x4113, 0x8337]),
    padded([0x1326, 0x8267, 0x2245, 0x6201, 0x5102, 0x4223, 0x4113, 0x8337]),
    padded([0x3304, 0x1326, 0x8267, 0x2245, 0x4223, 0x6201, 0x2315, 0x8337]),
    padded([0x5102, 0x1326, 0x8267, 0x2245, 0x2315, 0x8337, 0x4223]),
    padded([0x3304, 0x2245, 0x8267, 0x8337, 0x4113, 0x5102]),
    padded([0x8337, 0x8267, 0x2245, 0x6201, 0x4113]),
    padded([0x5102, 0x6201, 0x2315, 0x8337, 0x8267, 0x2245, 0x3304]),
    padded([0x2315, 0x8337, 0x8267, 0x2245]),
    padded([0x2315, 0x2245, 0x8157, 0x1326, 0x8267, 0x1146]),
    padded([0x6201, 0x5102, 0x3304, 0x2315, 0x2245, 0x8157, 0x1326, 0x8267, 0x1146]),
    padded([0x6201, 0x2245, 0x8157, 0x4113, 0x1326, 0x8267, 0x1146]),
    padded([0x2245, 0x8157, 0x4113, 0x5102, 0x3304, 0x1326, 0x8267, 0x1146]),
    padded([0x4223, 0x8267, 0x1146, 0x5102, 0x2315, 0x2245, 0x8157]),
    padded([0x3304, 0x6201, 0x4223, 0x8267, 0x1146, 0x2315, 0x2245, 0x8157]),
    padded([0x4223, 0x8267, 0x1146, 0x5102, 0x6201, 0x2245, 0x8157, 0x4113]),
    padded([0x3304, 0x2245, 0x8157, 0x4113, 0x4223, 0x8267, 0x1146]),
    padded([0x4223, 0x4113, 0x8337, 0x2315, 0x2245, 0x8157, 0x1326, 0x8267, 0x1146]),
    padded([
        0x6201, 0x5102, 0x3304, 0x4223, 0x4113, 0x8337,
        0x2315, 0x2245, 0x8157, 0x1326, 0x8267, 0x1146,
    ]),
    padded([0x8337, 0x4223, 0x6201, 0x2245, 0x8157, 0x1326, 0x8267, 0x1146]),
    padded([0x4223, 0x5102, 0x3304, 0x2245, 0x8157, 0x8337, 0x1326, 0x8267, 0x1146]),
    padded([0x8267, 0x1146, 0x5102, 0x4113, 0x8337, 0x2315, 0x2245, 0x8157]),
    padded([0x6201, 0x4113, 0x8337, 0x8267, 0x1146, 0x3304, 0x2315, 0x2245, 0x8157]),
    padded([0x8337, 0x8267, 0x1146, 0x5102, 0x6201, 0x2245, 0x8157]),
    padded([0x3304, 0x2245, 0x8157, 0x8337, 0x8267, 0x1146]),
    padded([0x8157, 0x2315, 0x3304, 0x1326, 0x8267]),
    padded([0x8267, 0x8157, 0x2315, 0x6201, 0x5102, 0x1326]),
    padded([0x8267, 0x1326, 0x3304, 0x6201, 0x4113, 0x8157]),
    padded([0x8267, 0x8157, 0x4113, 0x5102, 0x1326]),
    padded([0x5102, 0x4223, 0x8267, 0x8157, 0x2315, 0x3304]),
    padded([0x2315, 0x6201, 0x4223, 0x8267, 0x8157]),
    padded([0x3304, 0x5102, 0x4223, 0x8267, 0x8157, 0x4113, 0x6201]),
    padded([0x4113, 0x4223, 0x8267, 0x8157]),
    padded([0x8157, 0x2315, 0x3304, 0x1326, 0x8267, 0x4223, 0x4113, 0x8337]),
    padded([0x8157, 0x2315, 0x6201, 0x5102, 0x1326, 0x8267, 0x4223, 0x4113, 0x8337]),
    padded([0x8157, 0x8337, 0x4223, 0x6201, 0x3304, 0x1326, 0x8267]),
    padded([0x5102, 0x1326, 0x8267, 0x8157, 0x8337, 0x4223]),
    padded([0x8267, 0x8157, 0x2315, 0x3304, 0x5102, 0x4113, 0x8337]),
    padded([0x6201, 0x4113, 0x8337, 0x8267, 0x8157, 0x2315]),
    padded([0x6201, 0x3304, 0x5102, 0x8337, 0x8267, 0x8157]),
    padded([0x8337, 0x8267, 0x8157]),
    padded([0x8337, 0x8157, 0x8267]),
    padded([0x6201, 0x5102, 0x3304, 0x8337, 0x8157, 0x8267]),
    padded([0x6201, 0x2315, 0x4113, 0x8337, 0x8157, 0x8267]),
    padded([0x5102, 0x3304, 0x2315, 0x4113, 0x8337, 0x8157, 0x8267]),
    padded([0x5102, 0x4223, 0x1326, 0x8337, 0x8157, 0x8267]),
    padded([0x6201, 0x4223, 0x1326, 0x3304, 0x8337, 0x8157, 0x8267]),
    padded([0x6201, 0x2315, 0x4113, 0x5102, 0x4223, 0x1326, 0x8337, 0x8157, 0x8267]),
    padded([0x4223, 0x1326, 0x3304, 0x2315, 0x4113, 0x8337, 0x8157, 0x8267]),
    padded([0x4113, 0x8157, 0x8267, 0x4223]),
    padded([0x4223, 0x4113, 0x8157, 0x8267, 0x6201, 0x5102, 0x3304]),
    padded([0x8157, 0x8267, 0x4223, 0x6201, 0x2315]),
    padded([0x3304, 0x2315, 0x8157, 0x8267, 0x4223, 0x5102]),
    padded([0x1326, 0x5102, 0x4113, 0x8157, 0x8267]),
    padded([0x8157, 0x4113, 0x6201, 0x3304, 0x1326, 0x8267]),
    padded([0x1326, 0x5102, 0x6201, 0x2315, 0x8157, 0x8267]),
    padded([0x8267, 0x1326, 0x3304, 0x2315, 0x8157]),
    padded([0x3304, 0x1146, 0x2245, 0x8337, 0x8157, 0x8267]),
    padded([0x6201, 0x5102, 0x1146, 0x2245, 0x8337, 0x8157, 0x8267]),
    padded([0x6201, 0x2315, 0x4113, 0x3304, 0x1146, 0x2245, 0x8337, 0x8157, 0x8267]),
    padded([0x2315, 0x4113, 0x5102, 0x1146, 0x2245, 0x8337, 0x8157, 0x8267]),
    padded([0x5102, 0x4223, 0x1326, 0x3304, 0x1146, 0x2245, 0x8337, 0x8157, 0x8267]),
    padded([0x1146, 0x2245, 0x6201, 0x4223, 0x1326, 0x8337, 0x8157, 0x8267]),
    padded([
        0x6201, 0x2315, 0x4113, 0x5102, 0x4223, 0x1326,
        0x3304, 0x1146, 0x2245, 0x8337, 0x8157, 0x8267,
    ]),
    padded([0x4113, 0x4223, 0x1326, 0x1146, 0x2245, 0x2315, 0x8337, 0x8157, 0x8267]),
    padded([0x4223, 0x4113, 0x8157, 0x8267, 0x3304, 0x1146, 0x2245]),
    padded([0x6201, 0x5102, 0x1146, 0x2245, 0x4223, 0x4113, 0x8157, 0x8267]),
    padded([0x8157, 0x8267, 0x4223, 0x6201, 0x2315, 0x3304, 0x1146, 0x2245]),
    padded([0x2315, 0x8157, 0x8267, 0x4223, 0x5102, 0x1146, 0x2245]),
    padded([0x1326, 0x5102, 0x4113, 0x8157, 0x8267, 0x3304, 0x1146, 0x2245]),
    padded([0x1326, 0x1146, 0x2245, 0x6201, 0x4113, 0x8157, 0x8267]),
    padded([0x5102, 0x6201, 0x2315, 0x8157, 0x8267, 0x1326, 0x3304, 0x1146, 0x2245]),
    padded([0x1326, 0x1146, 0x2245, 0x2315, 0x8157, 0x8267]),
    padded([0x2315, 0x2245, 0x8267, 0x8337]),
    padded([0x2315, 0x2245, 0x8267, 0x8337, 0x6201, 0x5102, 0x3304]),
    padded([0x4113, 0x6201, 0x2245, 0x8267, 0x8337]),
    padded([0x5102, 0x4113, 0x8337, 0x8267, 0x2245, 0x3304]),
    padded([0x2315, 0x2245, 0x8267, 0x8337, 0x5102, 0x4223, 0x1326]),
    padded([0x6201, 0x4223, 0x1326, 0x3304, 0x8337, 0x2315, 0x2245, 0x8267]),
    padded([0x4113, 0x6201, 0x2245, 0x8267, 0x8337, 0x5102, 0x4223, 0x1326]),
    padded([0x4113, 0x4223, 0x1326, 0x3304, 0x2245, 0x8267, 0x8337]),
    padded([0x2315, 0x2245, 0x8267, 0x4223, 0x4113]),
    padded([0x2315, 0x2245, 0x8267, 0x4223, 0x4113, 0x6201, 0x5102, 0x3304]),
    padded([0x6201, 0x2245, 0x8267, 0x4223]),
    padded([0x3304, 0x2245, 0x8267, 0x4223, 0x5102]),
    padded([0x5102, 0x4113, 0x2315, 0x2245, 0x8267, 0x1326]),
    padded([0x4113, 0x2315, 0x2245, 0x8267, 0x1326, 0x3304, 0x6201]),
    padded([0x5102, 0x6201, 0x2245, 0x8267, 0x1326]),
    padded([0x3304, 0x2245, 0x8267, 0x1326]),
    padded([0x8267, 0x8337, 0x2315, 0x3304, 0x1146]),
    padded([0x5102, 0x1146, 0x8267, 0x8337, 0x2315, 0x6201]),
    padded([0x3304, 0x1146, 0x8267, 0x8337, 0x4113, 0x6201]),
    padded([0x8337, 0x4113, 0x5102, 0x1146, 0x8267]),
    padded([0x8267, 0x8337, 0x2315, 0x3304, 0x1146, 0x5102, 0x4223, 0x1326]),
    padded([0x1146, 0x8267, 0x8337, 0x2315, 0x6201, 0x4223, 0x1326]),
    padded([0x8267, 0x8337, 0x4113, 0x6201, 0x3304, 0x1146, 0x5102, 0x4223, 0x1326]),
    padded([0x4113, 0x4223, 0x1326, 0x1146, 0x8267, 0x8337]),
    padded([0x3304, 0x2315, 0x4113, 0x4223, 0x8267, 0x1146]),
    padded([0x2315, 0x6201, 0x5102, 0x1146, 0x8267, 0x4223, 0x4113]),
    padded([0x1146, 0x8267, 0x4223, 0x6201, 0x3304]),
    padded([0x5102, 0x1146, 0x8267, 0x4223]),
    padded([0x8267, 0x1326, 0x5102, 0x4113, 0x2315, 0x3304, 0x1146]),
    padded([0x6201, 0x4113, 0x2315, 0x1326, 0x1146, 0x8267]),
    padded([0x6201, 0x3304, 0x1146, 0x8267, 0x1326, 0x5102]),
    padded([0x1326, 0x1146, 0x8267]),
    padded([0x1326, 0x8337, 0x8157, 0x1146]),
    padded([0x8337, 0x8157, 0x1146, 0x1326, 0x6201, 0x5102, 0x3304]),
    padded([0x8337, 0x8157, 0x1146, 0x1326, 0x6201, 0x2315, 0x4113]),
    padded([0x4113, 0x5102, 0x3304, 0x2315, 0x1326, 0x8337, 0x8157, 0x1146]),
    padded([0x8337, 0x8157, 0x1146, 0x5102, 0x4223]),
    padded([0x6201, 0x4223, 0x8337, 0x8157, 0x1146, 0x3304]),
    padded([0x8337, 0x8157, 0x1146, 0x5102, 0x4223, 0x6201, 0x2315, 0x4113]),
    padded([0x4223, 0x8337, 0x8157, 0x1146, 0x3304, 0x2315, 0x4113]),
    padded([0x4223, 0x4113, 0x8157, 0x1146, 0x1326]),
    padded([0x4223, 0x4113, 0x8157, 0x1146, 0x1326, 0x6201, 0x5102, 0x3304]),
    padded([0x1146, 0x8157, 0x2315, 0x6201, 0x4223, 0x1326]),
    padded([0x4223, 0x5102, 0x3304, 0x2315, 0x8157, 0x1146, 0x1326]),
    padded([0x4113, 0x8157, 0x1146, 0x5102]),
    padded([0x6201, 0x4113, 0x8157, 0x1146, 0x3304]),
    padded([0x2315, 0x8157, 0x1146, 0x5102, 0x6201]),
    padded([0x2315, 0x8157, 0x1146, 0x3304]),
    padded([0x2245, 0x3304, 0x1326, 0x8337, 0x8157]),
    padded([0x6201, 0x2245, 0x8157, 0x8337, 0x1326, 0x5102]),
    padded([0x2245, 0x3304, 0x1326, 0x8337, 0x8157, 0x6201, 0x2315, 0x4113]),
    padded([0x2245, 0x2315, 0x4113, 0x5102, 0x1326, 0x8337, 0x8157]),
    padded([0x4223, 0x8337, 0x8157, 0x2245, 0x3304, 0x5102]),
    padded([0x8157, 0x2245, 0x6201, 0x4223, 0x8337]),
    padded([0x2245, 0x3304, 0x5102, 0x4223, 0x8337, 0x8157, 0x4113, 0x6201, 0x2315]),
    padded([0x4223, 0x8337, 0x8157, 0x2245, 0x2315, 0x4113]),
    padded([0x4113, 0x8157, 0x2245, 0x3304, 0x1326, 0x4223]),
    padded([0x1326, 0x4223, 0x4113, 0x8157, 0x2245, 0x6201, 0x5102]),
    padded([0x8157, 0x2245, 0x3304, 0x1326, 0x4223, 0x6201, 0x2315]),
    padded([0x5102, 0x1326, 0x4223, 0x2315, 0x8157, 0x2245]),
    padded([0x3304, 0x5102, 0x4113, 0x8157, 0x2245]),
    padded([0x4113, 0x8157, 0x2245, 0x6201]),
    padded([0x5102, 0x6201, 0x2315, 0x8157, 0x2245, 0x3304]),
    padded([0x2315, 0x8157, 0x2245]),
    padded([0x1146, 0x1326, 0x8337, 0x2315, 0x2245]),
    padded([0x1146, 0x1326, 0x8337, 0x2315, 0x2245, 0x6201, 0x5102, 0x3304]),
    padded([0x6201, 0x2245, 0x1146, 0x1326, 0x8337, 0x4113]),
    padded([0x2245, 0x1146, 0x1326, 0x8337, 0x4113, 0x5102, 0x3304]),
    padded([0x5102, 0x1146, 0x2245, 0x2315, 0x8337, 0x4223]),
    padded([0x1146, 0x3304, 0x6201, 0x4223, 0x8337, 0x2315, 0x2245]),
    padded([0x8337, 0x4113, 0x6201, 0x2245, 0x1146, 0x5102, 0x4223]),
    padded([0x4223, 0x8337, 0x4113, 0x3304, 0x2245, 0x1146]),
    padded([0x4113, 0x2315, 0x2245, 0x1146, 0x1326, 0x4223]),
    padded([0x1326, 0x4223, 0x4113, 0x2315, 0x2245, 0x1146, 0x3304, 0x6201, 0x5102]),
    padded([0x1326, 0x4223, 0x6201, 0x2245, 0x1146]),
    padded([0x4223, 0x5102, 0x3304, 0x2245, 0x1146, 0x1326]),
    padded([0x1146, 0x5102, 0x4113, 0x2315, 0x2245]),
    padded([0x4113, 0x2315, 0x2245, 0x1146, 0x3304, 0x6201]),
    padded([0x6201, 0x2245, 0x1146, 0x5102]),
    padded([0x3304, 0x2245, 0x1146]),
    padded([0x3304, 0x1326, 0x8337, 0x2315]),
    padded([0x5102, 0x1326, 0x8337, 0x2315, 0x6201]),
    padded([0x6201, 0x3304, 0x1326, 0x8337, 0x4113]),
    padded([0x4113, 0x5102, 0x1326, 0x8337]),
    padded([0x4223, 0x8337, 0x2315, 0x3304, 0x5102]),
    padded([0x6201, 0x4223, 0x8337, 0x2315]),
    padded([0x3304, 0x5102, 0x4223, 0x8337, 0x4113, 0x6201]),
    padded([0x4113, 0x4223, 0x8337]),
    padded([0x4113, 0x2315, 0x3304, 0x1326, 0x4223]),
    padded([0x1326, 0x4223, 0x4113, 0x2315, 0x6201, 0x5102]),
    padded([0x3304, 0x1326, 0x4223, 0x6201]),
    padded([0x5102, 0x1326, 0x4223]),
    padded([0x5102, 0x4113, 0x2315, 0x3304]),
    padded([0x6201, 0x4113, 0x2315]),
    padded([0x6201, 0x3304, 0x5102]),
    padded([]),
];

const fn padded<const N: usize>(codes: [u16; N]) -> [u16; MAX_CELL_VERTICES] {
    let mut row = [0; MAX_CELL_VERTICES];
    let mut i = 0;
    while i < N {
        row[i] = codes[i];
        i += 1;
    }
    row
}

/// Borrowed view over a set of regular-cell lookup tables.
#[derive(Debug, Clone, Copy)]
pub struct TriangulationTables<'t> {
    pub cell_class: &'t [u8],
    pub cell_data: &'t [RegularCellData],
    pub vertex_data: &'t [[u16; MAX_CELL_VERTICES]],
}

impl TriangulationTables<'static> {
    /// The built-in Transvoxel regular-cell tables.
    pub const REGULAR: Self = Self::new(
        &REGULAR_CELL_CLASS,
        &REGULAR_CELL_DATA,
        &REGULAR_VERTEX_DATA,
    );
}

impl Default for TriangulationTables<'static> {
    fn default() -> Self {
        Self::REGULAR
    }
}

impl<'t> TriangulationTables<'t> {
    pub const fn new(
        cell_class: &'t [u8],
        cell_data: &'t [RegularCellData],
        vertex_data: &'t [[u16; MAX_CELL_VERTICES]],
    ) -> Self {
        Self {
            cell_class,
            cell_data,
            vertex_data,
        }
    }

    /// Check every case code against the tables.
    ///
    /// Returns the first inconsistency found, naming the offending case code
    /// or cell class.
    pub fn validate(&self) -> Result<(), TableError> {
        if self.cell_class.len() != CASE_COUNT {
            return Err(TableError::CaseTableLength {
                len: self.cell_class.len(),
            });
        }
        if self.vertex_data.len() != CASE_COUNT {
            return Err(TableError::VertexTableLength {
                len: self.vertex_data.len(),
            });
        }

        for (class, data) in self.cell_data.iter().enumerate() {
            let class = class as u8;
            if data.vertex_count() > MAX_CELL_VERTICES {
                return Err(TableError::TooManyVertices {
                    class,
                    vertices: data.vertex_count(),
                });
            }
            if data.triangle_count() > MAX_CELL_TRIANGLES {
                return Err(TableError::TooManyTriangles {
                    class,
                    triangles: data.triangle_count(),
                });
            }
            if let Some(&index) = data
                .indices()
                .iter()
                .find(|&&index| usize::from(index) >= data.vertex_count())
            {
                return Err(TableError::TriangleIndexOutOfRange {
                    class,
                    index,
                    vertices: data.vertex_count(),
                });
            }
        }

        for case in 0..CASE_COUNT {
            let case_code = case as u8;
            let class = self.cell_class[case];
            let data = self
                .cell_data
                .get(usize::from(class))
                .ok_or(TableError::ClassOutOfRange {
                    case: case_code,
                    class,
                    available: self.cell_data.len(),
                })?;
            for &code in &self.vertex_data[case][..data.vertex_count()] {
                let high = (code & 0x0F) as u8;
                let low = ((code >> 4) & 0x0F) as u8;
                let slot = ((code >> 8) & 0x0F) as u8;
                if let Some(corner) = [high, low].into_iter().find(|&corner| corner >= 8) {
                    return Err(TableError::CornerOutOfRange {
                        case: case_code,
                        code,
                        corner,
                    });
                }
                if high == low {
                    return Err(TableError::DegenerateEdge {
                        case: case_code,
                        code,
                    });
                }
                if usize::from(slot) >= REUSE_SLOTS {
                    return Err(TableError::SlotOutOfRange {
                        case: case_code,
                        code,
                        slot,
                    });
                }
            }
        }

        Ok(())
    }

    /// Number of case codes that map to each cell class.
    pub fn class_histogram(&self) -> Vec<usize> {
        let mut histogram = vec![0; self.cell_data.len()];
        for &class in self.cell_class {
            if let Some(count) = histogram.get_mut(usize::from(class)) {
                *count += 1;
            }
        }
        histogram
    }
}
