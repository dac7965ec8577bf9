//! Output mesh and mesh sinks

use crate::error::{MesherError, Result};
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Indexed triangle mesh produced by one generation pass.
///
/// Vertex ids are indices into `positions`. Triangles wind so that
/// `(b - a).cross(c - a)` points from inside the solid towards outside.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    positions: Vec<Vec3>,
    triangles: Vec<[u32; 3]>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a vertex and return its id.
    ///
    /// Fails once the id would not fit in a `u32`.
    pub fn push_vertex(&mut self, position: Vec3) -> Result<u32> {
        let id = next_vertex_id(self.positions.len())?;
        self.positions.push(position);
        Ok(id)
    }

    pub fn push_triangle(&mut self, triangle: [u32; 3]) {
        debug_assert!(
            triangle.iter().all(|&id| (id as usize) < self.positions.len()),
            "triangle references unknown vertex"
        );
        self.triangles.push(triangle);
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Corner positions of a triangle
    pub fn triangle_positions(&self, triangle: [u32; 3]) -> [Vec3; 3] {
        triangle.map(|id| self.positions[id as usize])
    }

    /// Unnormalized geometric normal of each triangle
    pub fn face_normals(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.triangles.iter().map(|&triangle| {
            let [a, b, c] = self.triangle_positions(triangle);
            (b - a).cross(c - a)
        })
    }

    /// Flatten into renderer-ready buffers.
    pub fn to_buffers(&self) -> MeshBuffers {
        MeshBuffers {
            vertices: self.positions.iter().flat_map(|p| p.to_array()).collect(),
            indices: self.triangles.iter().flatten().copied().collect(),
        }
    }

    pub fn into_parts(self) -> (Vec<Vec3>, Vec<[u32; 3]>) {
        (self.positions, self.triangles)
    }
}

fn next_vertex_id(len: usize) -> Result<u32> {
    u32::try_from(len).map_err(|_| MesherError::VertexLimit { vertices: len })
}

/// Flat vertex and index buffers, three floats per vertex and three indices per triangle
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeshBuffers {
    pub vertices: Vec<f32>,
    pub indices: Vec<u32>,
}

impl MeshBuffers {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Receiver for finished meshes
pub trait MeshSink {
    type Error;

    /// Take ownership of a finished mesh
    fn accept(&mut self, mesh: Mesh) -> std::result::Result<(), Self::Error>;
}

/// Sink that appends every accepted mesh into one set of flat buffers
#[derive(Debug, Clone, Default)]
pub struct BufferSink {
    pub buffers: MeshBuffers,
    meshes: usize,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of meshes accepted so far
    pub fn mesh_count(&self) -> usize {
        self.meshes
    }

    pub fn into_buffers(self) -> MeshBuffers {
        self.buffers
    }
}

impl MeshSink for BufferSink {
    type Error = MesherError;

    fn accept(&mut self, mesh: Mesh) -> Result<()> {
        let (positions, triangles) = mesh.into_parts();
        let base = self.buffers.vertex_count();
        // The highest merged id must still fit in a u32
        next_vertex_id((base + positions.len()).saturating_sub(1))?;
        let base_index = next_vertex_id(base)?;

        for position in &positions {
            self.buffers.vertices.extend_from_slice(&position.to_array());
        }
        for triangle in &triangles {
            self.buffers
                .indices
                .extend(triangle.iter().map(|&id| base_index + id));
        }

        self.meshes += 1;
        Ok(())
    }
}
