//! End-to-end mesh generation tests
//!
//! These walk small grids over analytic and pseudo-random density fields and
//! check the seam-free sharing of vertices, winding, and the counters.

use mesher::glam::{IVec3, Quat, UVec3, Vec3};
use mesher::tables::{REGULAR_CELL_CLASS, REGULAR_CELL_DATA};
use mesher::{
    generate, CaseCode, CellFrame, FieldConfig, GridWalker, Mesh, MesherConfig, RenderOrigin,
    Sphere, TriangulationTables, VertexCode,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::{HashMap, HashSet};

/// Quantized position, so co-located vertices compare equal
fn grid_key(p: Vec3) -> IVec3 {
    (p * 1.0e4).round().as_ivec3()
}

fn assert_no_duplicate_positions(mesh: &Mesh) {
    let mut seen = HashSet::new();
    for p in mesh.positions() {
        assert!(seen.insert(grid_key(*p)), "duplicate vertex at {p:?}");
    }
}

/// Pairwise check with a tolerance scaled to the voxel size, so vertices that
/// differ only by rounding are still caught.
fn assert_no_coincident_vertices(mesh: &Mesh, voxel_size: f32, context: &str) {
    let tolerance = voxel_size * 1.0e-3;
    let positions = mesh.positions();
    for (i, p) in positions.iter().enumerate() {
        for q in &positions[i + 1..] {
            assert!(
                p.distance(*q) > tolerance,
                "{context}: coincident vertices {p:?} and {q:?}"
            );
        }
    }
}

fn directed_edges(mesh: &Mesh) -> HashMap<(u32, u32), usize> {
    let mut edges = HashMap::new();
    for &[a, b, c] in mesh.triangles() {
        for edge in [(a, b), (b, c), (c, a)] {
            *edges.entry(edge).or_insert(0) += 1;
        }
    }
    edges
}

/// Every directed edge appears once and is matched by its reverse.
fn assert_closed_manifold(mesh: &Mesh) {
    let edges = directed_edges(mesh);
    for (&(a, b), &count) in &edges {
        assert_eq!(count, 1, "edge {a}->{b} used {count} times");
        assert!(edges.contains_key(&(b, a)), "open edge {a}->{b}");
    }
}

fn signed_volume(mesh: &Mesh) -> f32 {
    mesh.triangles()
        .iter()
        .map(|&triangle| {
            let [a, b, c] = mesh.triangle_positions(triangle);
            a.dot(b.cross(c)) / 6.0
        })
        .sum()
}

// ============================================================================
// Single Voxel
// ============================================================================

#[test]
fn test_single_voxel_bottom_inside() {
    // Voxel 1 shifted so its center sits at the world origin
    let config = MesherConfig::default()
        .with_dimensions(UVec3::ONE)
        .with_origin(RenderOrigin::from_translation(Vec3::splat(-1.0)));
    let field = |p: Vec3| -> f32 { if p.y < 0.0 { -1.0 } else { 1.0 } };

    let generation = GridWalker::new(config).unwrap().walk(&field).unwrap();
    let mesh = &generation.mesh;

    assert_eq!(mesh.vertex_count(), 4);
    assert_eq!(mesh.triangle_count(), 2);
    assert_eq!(generation.stats.surface_voxels, 1);

    // One vertex on each vertical edge, halfway up
    let expected: HashSet<IVec3> = [
        Vec3::new(-0.5, 0.0, -0.5),
        Vec3::new(0.5, 0.0, -0.5),
        Vec3::new(-0.5, 0.0, 0.5),
        Vec3::new(0.5, 0.0, 0.5),
    ]
    .into_iter()
    .map(grid_key)
    .collect();
    let actual: HashSet<IVec3> = mesh.positions().iter().copied().map(grid_key).collect();
    assert_eq!(actual, expected);

    // The cap faces up, out of the solid
    for normal in mesh.face_normals() {
        assert!(normal.y > 0.0, "normal {normal:?} should point up");
        assert!(normal.x.abs() < 1e-6 && normal.z.abs() < 1e-6);
    }
}

#[test]
fn test_corner_exact_vertices_snap_to_corners() {
    // Corners at x = 1.5 sample exactly zero, corners at x = 0.5 are inside
    let config = MesherConfig::default().with_dimensions(UVec3::ONE);
    let field = |p: Vec3| p.x - 1.5;
    let mesh = generate(&config, &field).unwrap();

    assert_eq!(mesh.vertex_count(), 4);
    assert_eq!(mesh.triangle_count(), 2);

    let frame = CellFrame::from_config(&config);
    let corners: HashSet<IVec3> = [1, 3, 5, 7]
        .into_iter()
        .map(|corner| grid_key(frame.corner_position(IVec3::ONE, corner)))
        .collect();
    for p in mesh.positions() {
        assert_eq!(p.x, 1.5);
        assert!(corners.contains(&grid_key(*p)), "{p:?} is not a voxel corner");
    }
    for normal in mesh.face_normals() {
        assert!(normal.x > 0.0);
    }
}

// ============================================================================
// Vertex Sharing
// ============================================================================

#[test]
fn test_adjacent_voxels_share_boundary_vertices() {
    let config = MesherConfig::default().with_dimensions(UVec3::new(2, 1, 1));
    let field = |p: Vec3| p.y - 1.0 - 0.1 * (p.x - 1.5);
    let mesh = generate(&config, &field).unwrap();

    // Two quads over three columns of vertical edges
    assert_eq!(mesh.vertex_count(), 6);
    assert_eq!(mesh.triangle_count(), 4);
    assert_no_duplicate_positions(&mesh);

    let first: HashSet<u32> = mesh.triangles()[..2].iter().flatten().copied().collect();
    let second: HashSet<u32> = mesh.triangles()[2..].iter().flatten().copied().collect();
    let shared: Vec<u32> = first.intersection(&second).copied().collect();
    assert_eq!(shared.len(), 2);
    for id in shared {
        assert!((mesh.positions()[id as usize].x - 1.5).abs() < 1e-6);
    }
}

#[test]
fn test_full_grid_step_field() {
    // Samples are -1 on the y = 0.5 corner layer and +1 above it
    let config = MesherConfig::default().with_dimensions(UVec3::splat(2));
    let field = |p: Vec3| -> f32 { if p.y < 1.5 { -1.0 } else { 1.0 } };
    let generation = GridWalker::new(config).unwrap().walk(&field).unwrap();
    let mesh = &generation.mesh;

    assert_eq!(mesh.vertex_count(), 9);
    assert_eq!(mesh.triangle_count(), 8);
    assert_eq!(generation.stats.surface_voxels, 4);
    assert_no_duplicate_positions(mesh);
    assert!(mesh.positions().iter().all(|p| p.y == 1.0));
    assert!(mesh.face_normals().all(|n| n.y > 0.0));
}

#[test]
fn test_full_grid_surface_through_corner_layer() {
    // Surface passes exactly through the corner layer at y = 1.5
    let config = MesherConfig::default().with_dimensions(UVec3::splat(2));
    let field = |p: Vec3| -> f32 { if p.y < 1.5 { -1.0 } else { p.y - 1.5 } };
    let generation = GridWalker::new(config).unwrap().walk(&field).unwrap();
    let mesh = &generation.mesh;

    assert_eq!(mesh.vertex_count(), 9);
    assert_eq!(mesh.triangle_count(), 8);
    assert_eq!(generation.stats.surface_voxels, 4);
    assert_no_duplicate_positions(mesh);
    assert!(mesh.positions().iter().all(|p| p.y == 1.5));
    assert!(mesh.face_normals().all(|n| n.y > 0.0));
}

#[test]
fn test_random_field_is_watertight() {
    // Values on the outermost lattice layer are outside, so the surface closes
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut values = HashMap::new();
    for x in 0..=6 {
        for y in 0..=6 {
            for z in 0..=6 {
                let magnitude: f32 = rng.random_range(0.1..1.0);
                let shell = [x, y, z].iter().any(|&c| c == 0 || c == 6);
                let value = if shell || rng.random_bool(0.5) {
                    magnitude
                } else {
                    -magnitude
                };
                values.insert(IVec3::new(x, y, z), value);
            }
        }
    }
    let field = |p: Vec3| values[&p.floor().as_ivec3()];

    let config = MesherConfig::default().with_dimensions(UVec3::splat(6));
    let generation = GridWalker::new(config).unwrap().walk(&field).unwrap();
    let mesh = &generation.mesh;

    assert!(!mesh.is_empty());
    assert_no_duplicate_positions(mesh);
    assert_closed_manifold(mesh);

    let used: HashSet<u32> = mesh.triangles().iter().flatten().copied().collect();
    assert_eq!(used.len(), mesh.vertex_count());
}

#[test]
fn test_zero_samples_do_not_duplicate_vertices() {
    let field = |p: Vec3| {
        let [i, j, k] = p.floor().as_ivec3().to_array().map(|c| c as u64);
        let hash = (i.wrapping_mul(73_856_093)
            ^ j.wrapping_mul(19_349_663)
            ^ k.wrapping_mul(83_492_791))
            .wrapping_mul(0x9E37_79B9_7F4A_7C15);
        [-1.0f32, 0.0, 1.0, 1.0][(hash >> 62) as usize]
    };
    let config = MesherConfig::default().with_dimensions(UVec3::splat(6));

    let kept = GridWalker::new(config.clone()).unwrap().walk(&field).unwrap();
    assert_no_duplicate_positions(&kept.mesh);
    let degenerate = kept
        .mesh
        .triangles()
        .iter()
        .filter(|t| t[0] == t[1] || t[1] == t[2] || t[0] == t[2])
        .count();
    assert!(degenerate > 0, "field should produce collapsed triangles");

    let culled = GridWalker::new(config.with_cull_degenerate(true))
        .unwrap()
        .walk(&field)
        .unwrap();
    assert_eq!(culled.stats.degenerate_culled as usize, degenerate);
    assert_eq!(
        culled.mesh.triangle_count(),
        kept.mesh.triangle_count() - degenerate
    );
    assert_eq!(culled.mesh.vertex_count(), kept.mesh.vertex_count());
    assert!(culled
        .mesh
        .triangles()
        .iter()
        .all(|t| t[0] != t[1] && t[1] != t[2] && t[0] != t[2]));
}

#[test]
fn test_corner_layer_surface_at_odd_voxel_sizes() {
    // Voxel sizes that are not powers of two, with the surface placed exactly
    // on a shared corner layer
    for i in 0..400 {
        let voxel_size = 0.003 + 0.01 * i as f32;
        let config = MesherConfig::default()
            .with_dimensions(UVec3::new(2, 5, 2))
            .with_voxel_size(voxel_size);
        let frame = CellFrame::from_config(&config);
        for k in 1..=4 {
            let height = frame.corner_position(IVec3::new(1, k, 1), 4).y;
            let field = move |p: Vec3| p.y - height;
            let generation = GridWalker::new(config.clone()).unwrap().walk(&field).unwrap();
            let mesh = &generation.mesh;

            let context = format!("voxel size {voxel_size}, layer {k}");
            assert_eq!(mesh.vertex_count(), 9, "{context}");
            assert_eq!(mesh.triangle_count(), 8, "{context}");
            assert_no_coincident_vertices(mesh, voxel_size, &context);
            assert!(mesh.positions().iter().all(|p| p.y == height), "{context}");
        }
    }
}

// ============================================================================
// Winding and Placement
// ============================================================================

#[test]
fn test_sphere_winds_outward() {
    let sphere = Sphere {
        center: Vec3::new(5.3, 5.1, 4.9),
        radius: 3.7,
    };
    let config = MesherConfig::default().with_dimensions(UVec3::splat(10));
    let mesh = generate(&config, &sphere).unwrap();

    assert_closed_manifold(&mesh);
    for &triangle in mesh.triangles() {
        let [a, b, c] = mesh.triangle_positions(triangle);
        let normal = (b - a).cross(c - a);
        let centroid = (a + b + c) / 3.0;
        assert!(normal.dot(centroid - sphere.center) > 0.0);
    }

    let expected = 4.0 / 3.0 * std::f32::consts::PI * sphere.radius.powi(3);
    let volume = signed_volume(&mesh);
    assert!(volume > 0.0);
    assert!((volume - expected).abs() / expected < 0.1, "volume {volume}, expected {expected}");
}

#[test]
fn test_render_origin_moves_mesh_rigidly() {
    let sphere = Sphere {
        center: Vec3::new(3.3, 3.1, 2.9),
        radius: 2.05,
    };
    let base_config = MesherConfig::default().with_dimensions(UVec3::splat(6));
    let base = generate(&base_config, &sphere).unwrap();

    let origin = RenderOrigin::from_rotation_translation(
        Quat::from_rotation_y(0.7) * Quat::from_rotation_x(-0.3),
        Vec3::new(10.0, -3.0, 2.0),
    );
    let moved_sphere = Sphere {
        center: origin.transform_point(sphere.center),
        ..sphere
    };
    let moved = generate(&base_config.with_origin(origin), &moved_sphere).unwrap();

    assert_eq!(moved.triangles(), base.triangles());
    for (p, q) in base.positions().iter().zip(moved.positions()) {
        assert!((origin.transform_point(*p) - *q).length() < 1e-4);
    }
}

#[test]
fn test_voxel_size_scales_mesh() {
    let unit = generate(
        &MesherConfig::default().with_dimensions(UVec3::splat(6)),
        &Sphere {
            center: Vec3::new(3.3, 3.1, 2.9),
            radius: 2.05,
        },
    )
    .unwrap();
    let half = generate(
        &MesherConfig::default()
            .with_dimensions(UVec3::splat(6))
            .with_voxel_size(0.5),
        &Sphere {
            center: Vec3::new(1.65, 1.55, 1.45),
            radius: 1.025,
        },
    )
    .unwrap();

    assert_eq!(unit.triangles(), half.triangles());
    for (p, q) in unit.positions().iter().zip(half.positions()) {
        assert!((*p * 0.5 - *q).length() < 1e-4);
    }
}

// ============================================================================
// Determinism and Tables
// ============================================================================

#[test]
fn test_generation_is_deterministic() {
    let config = MesherConfig::default().with_dimensions(UVec3::splat(5));
    let field = |p: Vec3| (p.x * 0.9).sin() + (p.z * 1.3).cos() + p.y - 2.6;
    let first = GridWalker::new(config.clone()).unwrap().walk(&field).unwrap();
    let second = GridWalker::new(config).unwrap().walk(&field).unwrap();
    assert_eq!(first.mesh, second.mesh);
    assert_eq!(first.stats, second.stats);
}

#[test]
fn test_walk_boxed_field_from_config() {
    let field = FieldConfig::Sphere(Sphere {
        center: Vec3::new(3.3, 3.1, 2.9),
        radius: 2.05,
    })
    .build();
    let config = MesherConfig::default().with_dimensions(UVec3::splat(6));

    let boxed = generate(&config, &*field).unwrap();
    let walked = GridWalker::new(config.clone()).unwrap().walk(&*field).unwrap();
    let direct = generate(
        &config,
        &Sphere {
            center: Vec3::new(3.3, 3.1, 2.9),
            radius: 2.05,
        },
    )
    .unwrap();

    assert!(!boxed.is_empty());
    assert_eq!(boxed, direct);
    assert_eq!(walked.mesh, direct);
}

#[test]
fn test_uniform_fields_produce_nothing() {
    let config = MesherConfig::default().with_dimensions(UVec3::splat(3));
    for value in [-1000.0f32, -0.25, 0.0, 0.25, 1000.0] {
        let mesh = generate(&config, &|_: Vec3| value).unwrap();
        assert!(mesh.is_empty(), "value {value}");
        assert_eq!(mesh.vertex_count(), 0);
    }
}

#[test]
fn test_every_case_code_references_crossing_edges() {
    let tables = TriangulationTables::REGULAR;
    for bits in 0..=255u8 {
        let case = CaseCode::new(bits);
        let cell = tables.classify_case(case).unwrap();
        assert_eq!(cell.cell_class, REGULAR_CELL_CLASS[case.index()]);
        assert_eq!(
            cell.vertex_codes.len(),
            REGULAR_CELL_DATA[usize::from(cell.cell_class)].vertex_count()
        );

        let mut edges = HashSet::new();
        for &code in cell.vertex_codes {
            let code = VertexCode::decode(code);
            assert_ne!(
                case.is_inside(code.low_corner),
                case.is_inside(code.high_corner),
                "case {bits}: edge {}-{} does not cross the surface",
                code.low_corner,
                code.high_corner
            );
            assert!(edges.insert((code.low_corner, code.high_corner)));
        }
        for triangle in cell.triangles.chunks_exact(3) {
            assert!(triangle.iter().all(|&i| usize::from(i) < cell.vertex_codes.len()));
        }
    }
}
