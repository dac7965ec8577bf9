//! Mesher configuration
//!
//! Loaded from TOML by tools, or built in code with the `with_*` helpers.
//!
//! ```toml
//! voxel_size = 0.5
//! dimensions = [32, 16, 32]
//! cull_degenerate = false
//!
//! [origin]
//! translation = [-8.0, 0.0, -8.0]
//! rotation = [0.0, 0.0, 0.0, 1.0]
//! ```

use crate::error::ConfigError;
use glam::{Quat, UVec3, Vec3};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Rigid transform placing the render area in world space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOrigin {
    pub translation: Vec3,
    /// Quaternion stored as `[x, y, z, w]`
    pub rotation: Quat,
}

impl Default for RenderOrigin {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl RenderOrigin {
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
    };

    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Self::IDENTITY
        }
    }

    pub fn from_rotation_translation(rotation: Quat, translation: Vec3) -> Self {
        Self {
            translation,
            rotation,
        }
    }

    /// Map a render-area point into world space.
    #[inline]
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        self.translation + self.rotation * point
    }
}

/// Largest voxel count per axis.
///
/// Vertex owners can sit one voxel past the last visited one on +z, and that
/// coordinate must still fit in an `i32`.
pub const MAX_DIMENSION: u32 = i32::MAX as u32 - 1;

/// Configuration for one mesh generation pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MesherConfig {
    /// Edge length of one voxel in world units
    #[serde(default = "default_voxel_size")]
    pub voxel_size: f32,

    /// Voxel count per axis; voxels are visited over `[1, dimension]`
    #[serde(default = "default_dimensions")]
    pub dimensions: UVec3,

    /// Drop triangles that collapse onto fewer than three distinct vertices.
    /// These only appear when corner samples are exactly zero.
    #[serde(default)]
    pub cull_degenerate: bool,

    #[serde(default)]
    pub origin: RenderOrigin,
}

fn default_voxel_size() -> f32 {
    1.0
}

fn default_dimensions() -> UVec3 {
    UVec3::splat(16)
}

impl Default for MesherConfig {
    fn default() -> Self {
        Self {
            voxel_size: default_voxel_size(),
            dimensions: default_dimensions(),
            cull_degenerate: false,
            origin: RenderOrigin::default(),
        }
    }
}

impl MesherConfig {
    pub fn with_dimensions(mut self, dimensions: UVec3) -> Self {
        self.dimensions = dimensions;
        self
    }

    pub fn with_voxel_size(mut self, voxel_size: f32) -> Self {
        self.voxel_size = voxel_size;
        self
    }

    pub fn with_origin(mut self, origin: RenderOrigin) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_cull_degenerate(mut self, cull_degenerate: bool) -> Self {
        self.cull_degenerate = cull_degenerate;
        self
    }

    /// Total number of voxels a pass over this configuration visits
    pub fn voxel_count(&self) -> u64 {
        self.dimensions.as_u64vec3().element_product()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (axis, value) in ['x', 'y', 'z'].into_iter().zip(self.dimensions.to_array()) {
            if value == 0 || value > MAX_DIMENSION {
                return Err(ConfigError::InvalidDimension { axis, value });
            }
        }
        if !self.voxel_size.is_finite() || self.voxel_size <= 0.0 {
            return Err(ConfigError::InvalidVoxelSize(self.voxel_size));
        }
        if !self.origin.translation.is_finite() {
            return Err(ConfigError::NonFiniteTranslation);
        }
        if !self.origin.rotation.is_finite() || !self.origin.rotation.is_normalized() {
            return Err(ConfigError::NonUnitRotation);
        }
        Ok(())
    }

    /// Parse and validate a TOML configuration.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }
}
