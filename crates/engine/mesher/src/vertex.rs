//! Vertex resolution and cross-voxel reuse
//!
//! Every logical vertex of a voxel's triangulation is keyed by the voxel that
//! owns it plus a reuse slot. Voxels that share an edge or a corner compute the
//! same key for the vertex on it, so the vertex is created once and referenced
//! by id afterwards.

use crate::classify::CornerSamples;
use crate::error::{MesherError, Result};
use crate::frame::CellFrame;
use crate::mesh::Mesh;
use crate::tables::{CORNER_OFFSETS, REUSE_SLOTS};
use glam::{IVec3, Vec3};
use std::collections::HashMap;

/// Decoded form of a packed 16-bit vertex code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VertexCode {
    pub high_corner: u8,
    pub low_corner: u8,
    pub reuse_slot: u8,
    /// Owner direction. Bit 3 marks a vertex the current voxel creates itself;
    /// bits 0-2 select the owning neighbour.
    pub direction: u8,
}

impl VertexCode {
    pub const fn decode(code: u16) -> Self {
        Self {
            high_corner: (code & 0x0F) as u8,
            low_corner: ((code >> 4) & 0x0F) as u8,
            reuse_slot: ((code >> 8) & 0x0F) as u8,
            direction: ((code >> 12) & 0x0F) as u8,
        }
    }

    pub const fn encode(self) -> u16 {
        (self.high_corner as u16 & 0x0F)
            | (self.low_corner as u16 & 0x0F) << 4
            | (self.reuse_slot as u16 & 0x0F) << 8
            | (self.direction as u16 & 0x0F) << 12
    }

    /// Offset from the current voxel to the owner voxel.
    ///
    /// Each of the three low direction bits steps one voxel back along an axis:
    /// bit 0 along -x, bit 2 along -y, bit 1 along +z.
    pub fn owner_offset(self) -> IVec3 {
        let d = i32::from(self.direction);
        IVec3::new(-(d & 1), -((d >> 2) & 1), (d >> 1) & 1)
    }

    /// The endpoint whose sample is exactly zero, if any, low corner first.
    pub fn zero_corner(self, samples: &CornerSamples) -> Option<u8> {
        if samples.get(self.low_corner) == 0.0 {
            Some(self.low_corner)
        } else if samples.get(self.high_corner) == 0.0 {
            Some(self.high_corner)
        } else {
            None
        }
    }

    /// Re-key a vertex that sits exactly on `corner`.
    ///
    /// The 3-bit complement of a corner index points at the voxel for which
    /// that lattice point is corner 7, so all eight voxels sharing the point
    /// agree on one owner and slot 0.
    pub fn anchored_at(self, corner: u8) -> Self {
        Self {
            direction: !corner & 0x7,
            reuse_slot: 0,
            ..self
        }
    }

    /// Interpolated position along the edge in unit-cube corner space.
    ///
    /// With `t = d_high / (d_high - d_low)` the point is
    /// `t * low + (1 - t) * high`. Equal samples fall back to the midpoint.
    pub fn interpolate(self, samples: &CornerSamples) -> Vec3 {
        let d_low = samples.get(self.low_corner);
        let d_high = samples.get(self.high_corner);
        let denominator = d_high - d_low;
        let t = if denominator == 0.0 {
            0.5
        } else {
            d_high / denominator
        };
        CORNER_OFFSETS[usize::from(self.low_corner & 0x7)] * t
            + CORNER_OFFSETS[usize::from(self.high_corner & 0x7)] * (1.0 - t)
    }
}

/// Owner voxel plus reuse slot; equal keys denote the same mesh vertex.
///
/// The slot is always below `REUSE_SLOTS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VertexKey {
    owner: IVec3,
    slot: u8,
}

impl VertexKey {
    /// Build a key, or `None` when the slot is out of range.
    pub fn new(owner: IVec3, slot: u8) -> Option<Self> {
        (usize::from(slot) < REUSE_SLOTS).then_some(Self { owner, slot })
    }

    pub fn owner(&self) -> IVec3 {
        self.owner
    }

    pub fn slot(&self) -> u8 {
        self.slot
    }
}

/// Vertex ids cached per owner voxel. Entries are never removed during a pass.
#[derive(Debug, Clone, Default)]
pub struct VertexMap {
    slots: HashMap<IVec3, [Option<u32>; REUSE_SLOTS]>,
    len: usize,
}

impl VertexMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: VertexKey) -> Option<u32> {
        self.slots
            .get(&key.owner)
            .and_then(|slots| slots.get(usize::from(key.slot)).copied().flatten())
    }

    /// Store an id, returning the one previously held at the key.
    pub fn insert(&mut self, key: VertexKey, id: u32) -> Option<u32> {
        let slot = &mut self.slots.entry(key.owner).or_default()[usize::from(key.slot)];
        let previous = slot.replace(id);
        if previous.is_none() {
            self.len += 1;
        }
        previous
    }

    /// Number of vertex ids stored
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of distinct owner voxels
    pub fn voxel_count(&self) -> usize {
        self.slots.len()
    }
}

/// Turns vertex codes into mesh vertex ids, creating each shared vertex once.
#[derive(Debug, Default)]
pub struct VertexResolver {
    map: VertexMap,
    created: u64,
    reused: u64,
}

impl VertexResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve one vertex code of `voxel` to a mesh vertex id.
    ///
    /// Returns the cached id when the ownership key was seen before; otherwise
    /// appends the vertex to `mesh` and caches its id. A vertex on a zero
    /// corner is placed at that lattice corner exactly.
    pub fn resolve(
        &mut self,
        mesh: &mut Mesh,
        frame: &CellFrame,
        voxel: IVec3,
        packed: u16,
        samples: &CornerSamples,
    ) -> Result<u32> {
        let code = VertexCode::decode(packed);
        let zero_corner = code.zero_corner(samples);
        let code = match zero_corner {
            Some(corner) => code.anchored_at(corner),
            None => code,
        };

        let key = VertexKey::new(voxel + code.owner_offset(), code.reuse_slot).ok_or(
            MesherError::ReuseSlot {
                code: packed,
                slot: code.reuse_slot,
            },
        )?;
        if let Some(id) = self.map.get(key) {
            self.reused += 1;
            return Ok(id);
        }

        let position = match zero_corner {
            Some(corner) => frame.corner_position(voxel, usize::from(corner)),
            None => frame.world_position(voxel, code.interpolate(samples)),
        };
        let id = mesh.push_vertex(position)?;
        self.map.insert(key, id);
        self.created += 1;
        Ok(id)
    }

    pub fn map(&self) -> &VertexMap {
        &self.map
    }

    /// Vertices appended to the mesh so far
    pub fn created(&self) -> u64 {
        self.created
    }

    /// Lookups answered from the map
    pub fn reused(&self) -> u64 {
        self.reused
    }
}
