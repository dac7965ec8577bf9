//! Error types for mesh generation

use thiserror::Error;

/// Result type for mesher operations
pub type Result<T> = std::result::Result<T, MesherError>;

/// Errors that can occur while setting up or running a generation pass
#[derive(Error, Debug)]
pub enum MesherError {
    /// The triangulation tables are malformed
    #[error("triangulation table error: {0}")]
    Table(#[from] TableError),

    /// The configuration surface is invalid
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// The mesh outgrew the 32-bit vertex id space
    #[error("mesh holds {vertices} vertices, more than 32-bit ids can address")]
    VertexLimit { vertices: usize },

    /// A vertex code names a reuse slot the vertex map does not have
    #[error("vertex code {code:#06x} uses reuse slot {slot}, expected 0..4")]
    ReuseSlot { code: u16, slot: u8 },
}

/// A broken triangulation table asset.
///
/// Every variant names the case code or cell class that failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("case table has {len} entries, expected 256")]
    CaseTableLength { len: usize },

    #[error("vertex code table has {len} entries, expected 256")]
    VertexTableLength { len: usize },

    #[error("case {case:#04x} maps to cell class {class}, but only {available} classes exist")]
    ClassOutOfRange { case: u8, class: u8, available: usize },

    #[error("cell class {class} declares {vertices} vertices (at most 12 allowed)")]
    TooManyVertices { class: u8, vertices: usize },

    #[error("cell class {class} declares {triangles} triangles (at most 5 allowed)")]
    TooManyTriangles { class: u8, triangles: usize },

    #[error("cell class {class} references vertex {index}, but the class has {vertices} vertices")]
    TriangleIndexOutOfRange { class: u8, index: u8, vertices: usize },

    #[error("case {case:#04x} vertex code {code:#06x} names corner {corner}")]
    CornerOutOfRange { case: u8, code: u16, corner: u8 },

    #[error("case {case:#04x} vertex code {code:#06x} does not span an edge")]
    DegenerateEdge { case: u8, code: u16 },

    #[error("case {case:#04x} vertex code {code:#06x} uses reuse slot {slot}")]
    SlotOutOfRange { case: u8, code: u16, slot: u8 },
}

/// Invalid mesher configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(
        "render area dimension {axis} is {value}, expected 1..={max}",
        max = crate::config::MAX_DIMENSION
    )]
    InvalidDimension { axis: char, value: u32 },

    #[error("voxel size must be finite and positive, got {0}")]
    InvalidVoxelSize(f32),

    #[error("render origin translation must be finite")]
    NonFiniteTranslation,

    #[error("render origin rotation must be a unit quaternion")]
    NonUnitRotation,

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
