//! Density fields sampled by the grid walker
//!
//! Negative values are inside the solid, zero and positive values outside.

use glam::Vec3;
use noise::{Fbm, MultiFractal, NoiseFn, Perlin};
use serde::{Deserialize, Serialize};

/// A scalar field whose zero crossing defines the extracted surface.
///
/// Implementations must be deterministic; the walker samples shared corners
/// once per voxel and relies on getting the same value each time.
pub trait DensityField {
    fn sample(&self, position: Vec3) -> f32;
}

impl<F> DensityField for F
where
    F: Fn(Vec3) -> f32,
{
    #[inline]
    fn sample(&self, position: Vec3) -> f32 {
        self(position)
    }
}

/// Horizontal ground plane, solid below `height`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    pub height: f32,
}

impl DensityField for Plane {
    fn sample(&self, position: Vec3) -> f32 {
        position.y - self.height
    }
}

/// Solid ball, sampled as a signed distance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
}

impl DensityField for Sphere {
    fn sample(&self, position: Vec3) -> f32 {
        position.distance(self.center) - self.radius
    }
}

/// Parameters for [`NoiseTerrain`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    pub seed: u32,
    /// Ground height where the noise is zero
    pub base_height: f32,
    /// Peak deviation from `base_height`
    pub amplitude: f32,
    /// Horizontal noise frequency in cycles per world unit
    pub frequency: f64,
    pub octaves: usize,
    /// Strength of the 3D cave term; 0 disables caves
    pub cave_strength: f32,
    pub cave_frequency: f64,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            base_height: 8.0,
            amplitude: 4.0,
            frequency: 0.05,
            octaves: 4,
            cave_strength: 0.0,
            cave_frequency: 0.1,
        }
    }
}

/// Fractal height-field terrain with optional caves
pub struct NoiseTerrain {
    config: TerrainConfig,
    heights: Fbm<Perlin>,
    caves: Perlin,
}

impl NoiseTerrain {
    pub fn new(config: TerrainConfig) -> Self {
        let heights = Fbm::<Perlin>::new(config.seed)
            .set_octaves(config.octaves.max(1))
            .set_frequency(config.frequency);
        let caves = Perlin::new(config.seed.wrapping_add(1));
        Self {
            config,
            heights,
            caves,
        }
    }

    pub fn config(&self) -> &TerrainConfig {
        &self.config
    }

    /// Terrain surface height at a horizontal position
    pub fn height_at(&self, x: f32, z: f32) -> f32 {
        let noise = self.heights.get([f64::from(x), 0.0, f64::from(z)]);
        self.config.base_height + self.config.amplitude * noise as f32
    }
}

impl DensityField for NoiseTerrain {
    fn sample(&self, position: Vec3) -> f32 {
        let mut density = position.y - self.height_at(position.x, position.z);
        if self.config.cave_strength != 0.0 {
            let f = self.config.cave_frequency;
            let cave = self.caves.get([
                f64::from(position.x) * f,
                f64::from(position.y) * f,
                f64::from(position.z) * f,
            ]);
            density += self.config.cave_strength * cave.max(0.0) as f32;
        }
        density
    }
}

/// Serializable choice of density field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldConfig {
    Plane(Plane),
    Sphere(Sphere),
    Terrain(TerrainConfig),
}

impl Default for FieldConfig {
    fn default() -> Self {
        FieldConfig::Terrain(TerrainConfig::default())
    }
}

impl FieldConfig {
    pub fn build(&self) -> Box<dyn DensityField> {
        match self {
            FieldConfig::Plane(plane) => Box::new(*plane),
            FieldConfig::Sphere(sphere) => Box::new(*sphere),
            FieldConfig::Terrain(terrain) => Box::new(NoiseTerrain::new(terrain.clone())),
        }
    }
}
