//! Transvoxel regular-cell mesher
//!
//! Converts a scalar density field sampled over a voxel grid into an indexed
//! triangle mesh. Each voxel is classified by the signs of its eight corner
//! samples, triangulated from the Transvoxel regular-cell tables, and every
//! vertex lying on an edge or corner shared with a neighbouring voxel is
//! created exactly once.
//!
//! ```no_run
//! use mesher::{generate, MesherConfig, Sphere};
//! use mesher::glam::{UVec3, Vec3};
//!
//! let config = MesherConfig::default().with_dimensions(UVec3::splat(8));
//! let field = Sphere { center: Vec3::splat(4.5), radius: 3.0 };
//! let mesh = generate(&config, &field)?;
//! println!("{} vertices, {} triangles", mesh.vertex_count(), mesh.triangle_count());
//! # Ok::<(), mesher::MesherError>(())
//! ```

pub mod classify;
pub mod config;
pub mod density;
pub mod error;
pub mod frame;
pub mod mesh;
pub mod tables;
pub mod vertex;
pub mod walker;

pub use classify::{CaseCode, CellClassification, CornerSamples};
pub use config::{MesherConfig, RenderOrigin, MAX_DIMENSION};
pub use density::{DensityField, FieldConfig, NoiseTerrain, Plane, Sphere, TerrainConfig};
pub use error::{ConfigError, MesherError, Result, TableError};
pub use frame::CellFrame;
pub use mesh::{BufferSink, Mesh, MeshBuffers, MeshSink};
pub use tables::{TriangulationTables, CORNER_OFFSETS};
pub use vertex::{VertexCode, VertexKey, VertexMap, VertexResolver};
pub use walker::{generate, Generation, GenerationStats, GridWalker};

// Re-export glam for convenience
pub use glam;
