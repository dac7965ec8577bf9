//! Wavefront OBJ output

use mesher::{Mesh, MeshSink};
use std::io::{self, Write};

/// Writes accepted meshes as OBJ objects, one `o` group per mesh
pub struct ObjSink<W: Write> {
    writer: W,
    vertex_offset: u32,
    meshes: usize,
}

impl<W: Write> ObjSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            vertex_offset: 0,
            meshes: 0,
        }
    }

    /// Flush and return the underlying writer.
    pub fn finish(mut self) -> io::Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl<W: Write> MeshSink for ObjSink<W> {
    type Error = io::Error;

    fn accept(&mut self, mesh: Mesh) -> io::Result<()> {
        if self.meshes == 0 {
            writeln!(self.writer, "# generated by meshtool")?;
        }
        writeln!(self.writer, "o mesh_{}", self.meshes)?;
        for p in mesh.positions() {
            writeln!(self.writer, "v {} {} {}", p.x, p.y, p.z)?;
        }
        // OBJ indices are 1-based and global across objects
        let base = self.vertex_offset + 1;
        for &[a, b, c] in mesh.triangles() {
            writeln!(self.writer, "f {} {} {}", a + base, b + base, c + base)?;
        }

        self.vertex_offset += mesh.vertex_count() as u32;
        self.meshes += 1;
        Ok(())
    }
}
