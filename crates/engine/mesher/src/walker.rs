//! Grid walker: drives one full mesh generation pass
//!
//! Voxels are visited x outer, y middle, z inner over `[1, dimension]` on each
//! axis. Vertex ids depend on this order; the set of triangles does not.

use crate::classify::CornerSamples;
use crate::config::MesherConfig;
use crate::density::DensityField;
use crate::error::Result;
use crate::frame::CellFrame;
use crate::mesh::Mesh;
use crate::tables::TriangulationTables;
use crate::vertex::VertexResolver;
use glam::IVec3;
use serde::{Deserialize, Serialize};

/// Counters for one generation pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationStats {
    pub voxels_visited: u64,
    /// Voxels whose case produced at least one triangle
    pub surface_voxels: u64,
    pub vertices_created: u64,
    /// Vertex lookups answered by an existing id
    pub vertices_reused: u64,
    pub triangles: u64,
    /// Triangles dropped because `cull_degenerate` is set
    pub degenerate_culled: u64,
}

/// A finished pass: the mesh plus its counters
#[derive(Debug, Clone, Default)]
pub struct Generation {
    pub mesh: Mesh,
    pub stats: GenerationStats,
}

/// Walks a render volume and extracts the density field's zero surface.
#[derive(Debug, Clone)]
pub struct GridWalker<'t> {
    config: MesherConfig,
    tables: TriangulationTables<'t>,
}

impl GridWalker<'static> {
    /// Create a walker over the built-in tables.
    pub fn new(config: MesherConfig) -> Result<Self> {
        Self::with_tables(config, TriangulationTables::REGULAR)
    }
}

impl<'t> GridWalker<'t> {
    /// Create a walker over custom tables.
    ///
    /// Both the configuration and the tables are validated here, so a broken
    /// table asset fails before any sampling happens.
    pub fn with_tables(config: MesherConfig, tables: TriangulationTables<'t>) -> Result<Self> {
        config.validate()?;
        tables.validate()?;
        Ok(Self { config, tables })
    }

    pub fn config(&self) -> &MesherConfig {
        &self.config
    }

    /// Run one complete pass over the render volume.
    pub fn walk<F>(&self, field: &F) -> Result<Generation>
    where
        F: DensityField + ?Sized,
    {
        let dimensions = self.config.dimensions.as_ivec3();
        let span = tracing::debug_span!(
            "walk",
            dimensions = ?self.config.dimensions,
            voxel_size = self.config.voxel_size
        );
        let _enter = span.enter();

        let frame = CellFrame::from_config(&self.config);
        let mut mesh = Mesh::new();
        let mut resolver = VertexResolver::new();
        let mut stats = GenerationStats::default();

        for x in 1..=dimensions.x {
            for y in 1..=dimensions.y {
                for z in 1..=dimensions.z {
                    let voxel = IVec3::new(x, y, z);
                    stats.voxels_visited += 1;

                    let samples = CornerSamples::from_fn(|corner| {
                        field.sample(frame.corner_position(voxel, corner))
                    });
                    let cell = self.tables.classify(&samples)?;
                    if cell.is_empty() {
                        continue;
                    }
                    stats.surface_voxels += 1;
                    tracing::trace!(
                        ?voxel,
                        case = cell.case_code.bits(),
                        class = cell.cell_class,
                        "surface voxel"
                    );

                    for codes in cell.triangle_codes() {
                        let mut triangle = [0u32; 3];
                        for (id, code) in triangle.iter_mut().zip(codes) {
                            *id = resolver.resolve(&mut mesh, &frame, voxel, code, &samples)?;
                        }
                        if self.config.cull_degenerate && is_degenerate(triangle) {
                            stats.degenerate_culled += 1;
                            continue;
                        }
                        mesh.push_triangle(triangle);
                        stats.triangles += 1;
                    }
                }
            }
        }

        stats.vertices_created = resolver.created();
        stats.vertices_reused = resolver.reused();
        tracing::info!(
            voxels = stats.voxels_visited,
            surface_voxels = stats.surface_voxels,
            vertices = stats.vertices_created,
            reused = stats.vertices_reused,
            triangles = stats.triangles,
            culled = stats.degenerate_culled,
            "mesh generation complete"
        );

        Ok(Generation { mesh, stats })
    }
}

fn is_degenerate([a, b, c]: [u32; 3]) -> bool {
    a == b || b == c || a == c
}

/// Generate the mesh for one render volume with the built-in tables.
pub fn generate<F>(config: &MesherConfig, field: &F) -> Result<Mesh>
where
    F: DensityField + ?Sized,
{
    let walker = GridWalker::new(config.clone())?;
    Ok(walker.walk(field)?.mesh)
}
