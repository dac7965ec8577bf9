//! Voxel-to-world placement for one generation pass

use crate::config::{MesherConfig, RenderOrigin};
use crate::tables::CORNER_OFFSETS;
use glam::{IVec3, Vec3};

/// Per-pass placement constants.
///
/// Voxel `v` is centered at `v * voxel_size` in render-area space; the render
/// origin then places that space in the world.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellFrame {
    voxel_size: f32,
    half_size: f32,
    origin: RenderOrigin,
}

impl CellFrame {
    pub fn new(voxel_size: f32, origin: RenderOrigin) -> Self {
        Self {
            voxel_size,
            half_size: voxel_size * 0.5,
            origin,
        }
    }

    pub fn from_config(config: &MesherConfig) -> Self {
        Self::new(config.voxel_size, config.origin)
    }

    pub fn voxel_size(&self) -> f32 {
        self.voxel_size
    }

    /// Map an offset in unit-cube corner space (components in [-1, 1]) around
    /// a voxel's center to world space.
    ///
    /// The point is formed on the half-voxel lattice (`2 * voxel + local`) and
    /// scaled once, so a corner shared by neighbouring voxels lands on the same
    /// float no matter which voxel computes it.
    #[inline]
    pub fn world_position(&self, voxel: IVec3, local: Vec3) -> Vec3 {
        let lattice = voxel.as_vec3() * 2.0 + local;
        self.origin.transform_point(lattice * self.half_size)
    }

    /// World position of one voxel corner, the point the density field is sampled at.
    #[inline]
    pub fn corner_position(&self, voxel: IVec3, corner: usize) -> Vec3 {
        self.world_position(voxel, CORNER_OFFSETS[corner & 0x7])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corner_positions() {
        let frame = CellFrame::new(2.0, RenderOrigin::IDENTITY);
        let voxel = IVec3::new(1, 2, 3);
        assert_eq!(frame.corner_position(voxel, 0), Vec3::new(1.0, 3.0, 7.0));
        assert_eq!(frame.corner_position(voxel, 7), Vec3::new(3.0, 5.0, 5.0));
    }

    #[test]
    fn test_neighbours_share_corners() {
        let frame = CellFrame::new(
            0.5,
            RenderOrigin::from_translation(Vec3::splat(-4.0)),
        );
        let voxel = IVec3::new(3, 3, 3);
        // +x neighbour: its corner 0 is our corner 1
        assert_eq!(
            frame.corner_position(voxel, 1),
            frame.corner_position(voxel + IVec3::X, 0)
        );
        // +y neighbour: its corner 0 is our corner 4
        assert_eq!(
            frame.corner_position(voxel, 4),
            frame.corner_position(voxel + IVec3::Y, 0)
        );
        // -z neighbour: its corner 0 is our corner 2
        assert_eq!(
            frame.corner_position(voxel, 2),
            frame.corner_position(voxel - IVec3::Z, 0)
        );
    }

    #[test]
    fn test_shared_corners_bit_identical_at_odd_voxel_sizes() {
        for voxel_size in [0.023, 0.1, 0.3, 0.7, 1.3, 0.013, 0.0331] {
            let frame = CellFrame::new(voxel_size, RenderOrigin::IDENTITY);
            for k in 0..64 {
                let voxel = IVec3::new(1, k, -k);
                let above = voxel + IVec3::Y;
                assert_eq!(
                    frame.corner_position(voxel, 4).to_array(),
                    frame.corner_position(above, 0).to_array(),
                    "voxel size {voxel_size}, layer {k}"
                );
                assert_eq!(
                    frame.corner_position(voxel, 7).to_array(),
                    frame.corner_position(above + IVec3::X - IVec3::Z, 0).to_array(),
                    "voxel size {voxel_size}, layer {k}"
                );
            }
        }
    }

    #[test]
    fn test_center_offset_scales_by_half_size() {
        let frame = CellFrame::new(3.0, RenderOrigin::from_translation(Vec3::X));
        let position = frame.world_position(IVec3::new(2, 0, -1), Vec3::new(0.5, 0.0, -1.0));
        assert_eq!(position, Vec3::new(7.75, 0.0, -4.5));
    }
}
