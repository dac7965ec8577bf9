//! Cell classification
//!
//! A voxel's eight corner samples are reduced to an 8-bit case code, which
//! selects a cell class (the shared triangle topology) and the case's own
//! list of vertex codes.

use crate::error::TableError;
use crate::tables::TriangulationTables;
use std::fmt;

/// Density samples at the eight corners of one voxel, indexed by corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CornerSamples(pub [f32; 8]);

impl CornerSamples {
    pub fn from_fn(sample: impl FnMut(usize) -> f32) -> Self {
        Self(std::array::from_fn(sample))
    }

    #[inline]
    pub fn get(&self, corner: u8) -> f32 {
        self.0[usize::from(corner & 0x7)]
    }

    /// Sign test per corner: negative samples are inside.
    pub fn case_code(&self) -> CaseCode {
        CaseCode::from_samples(self)
    }
}

/// Inside/outside pattern of a voxel's corners; bit `i` is set when corner
/// `i` is inside the solid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CaseCode(u8);

impl CaseCode {
    pub const EMPTY: Self = Self(0);
    pub const FULL: Self = Self(0xFF);

    pub const fn new(bits: u8) -> Self {
        Self(bits)
    }

    pub fn from_samples(samples: &CornerSamples) -> Self {
        let bits = samples
            .0
            .iter()
            .enumerate()
            .filter(|&(_, &sample)| sample < 0.0)
            .fold(0u8, |bits, (corner, _)| bits | (1 << corner));
        Self(bits)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }

    pub const fn is_inside(self, corner: u8) -> bool {
        corner < 8 && self.0 & (1 << corner) != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn is_full(self) -> bool {
        self.0 == 0xFF
    }

    /// Number of corners inside the solid
    pub const fn inside_count(self) -> u32 {
        self.0.count_ones()
    }
}

impl fmt::Display for CaseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010b}", self.0)
    }
}

/// Result of classifying one voxel against the triangulation tables
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellClassification<'t> {
    pub case_code: CaseCode,
    pub cell_class: u8,
    /// Vertex codes of the case, indexed by the triangle list
    pub vertex_codes: &'t [u16],
    /// Flat triangle list, three vertex-code indices per triangle
    pub triangles: &'t [u8],
}

impl CellClassification<'_> {
    pub fn triangle_count(&self) -> usize {
        self.triangles.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Vertex codes of each triangle, in winding order.
    pub fn triangle_codes(&self) -> impl Iterator<Item = [u16; 3]> + '_ {
        self.triangles.chunks_exact(3).map(|triangle| {
            [
                self.vertex_codes[usize::from(triangle[0])],
                self.vertex_codes[usize::from(triangle[1])],
                self.vertex_codes[usize::from(triangle[2])],
            ]
        })
    }
}

impl<'t> TriangulationTables<'t> {
    /// Classify a voxel from its corner samples.
    pub fn classify(&self, samples: &CornerSamples) -> Result<CellClassification<'t>, TableError> {
        self.classify_case(samples.case_code())
    }

    /// Look up the cell class, triangle list and vertex codes of a case code.
    ///
    /// Triangles come from the cell class; vertex codes come from the case
    /// code itself, since cases sharing a class use different concrete edges.
    pub fn classify_case(&self, case_code: CaseCode) -> Result<CellClassification<'t>, TableError> {
        let tables = *self;
        let cell_class = *tables
            .cell_class
            .get(case_code.index())
            .ok_or(TableError::CaseTableLength {
                len: tables.cell_class.len(),
            })?;
        let data = tables
            .cell_data
            .get(usize::from(cell_class))
            .ok_or(TableError::ClassOutOfRange {
                case: case_code.bits(),
                class: cell_class,
                available: tables.cell_data.len(),
            })?;
        let codes = tables
            .vertex_data
            .get(case_code.index())
            .ok_or(TableError::VertexTableLength {
                len: tables.vertex_data.len(),
            })?;
        let vertex_codes = codes
            .get(..data.vertex_count())
            .ok_or(TableError::TooManyVertices {
                class: cell_class,
                vertices: data.vertex_count(),
            })?;
        let triangles = data.indices();
        if let Some(&index) = triangles
            .iter()
            .find(|&&index| usize::from(index) >= vertex_codes.len())
        {
            return Err(TableError::TriangleIndexOutOfRange {
                class: cell_class,
                index,
                vertices: vertex_codes.len(),
            });
        }

        Ok(CellClassification {
            case_code,
            cell_class,
            vertex_codes,
            triangles,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_code_sign_test() {
        let samples = CornerSamples([-1.0, 0.5, -0.25, 0.0, -0.0, 2.0, -3.0, f32::NAN]);
        let case = samples.case_code();
        assert_eq!(case.bits(), 0b0100_0101);
        assert!(case.is_inside(0));
        assert!(!case.is_inside(3));
        assert!(!case.is_inside(4));
        assert!(!case.is_inside(7));
        assert_eq!(case.inside_count(), 3);
    }

    #[test]
    fn test_case_code_not_floor_based() {
        // Values outside [-1, 1) still classify by sign alone
        let samples = CornerSamples([-7.5, 12.0, -1e-6, 1e6, -200.0, 0.0, 3.0, -0.5]);
        assert_eq!(samples.case_code().bits(), 0b1001_0101);
    }

    #[test]
    fn test_uniform_cells_are_empty() {
        let tables = TriangulationTables::REGULAR;

        let outside = tables.classify(&CornerSamples([1.0; 8])).unwrap();
        assert_eq!(outside.case_code, CaseCode::EMPTY);
        assert_eq!(outside.cell_class, 0);
        assert!(outside.is_empty());

        let inside = tables.classify(&CornerSamples([-1.0; 8])).unwrap();
        assert_eq!(inside.case_code, CaseCode::FULL);
        assert_eq!(inside.cell_class, 0);
        assert!(inside.is_empty());
    }

    #[test]
    fn test_single_corner_case() {
        let tables = TriangulationTables::REGULAR;
        let cell = tables.classify_case(CaseCode::new(1)).unwrap();
        assert_eq!(cell.cell_class, 1);
        assert_eq!(cell.vertex_codes, &[0x6201, 0x5102, 0x3304]);
        assert_eq!(cell.triangle_count(), 1);
        assert_eq!(
            cell.triangle_codes().collect::<Vec<_>>(),
            vec![[0x6201, 0x5102, 0x3304]]
        );
    }

    #[test]
    fn test_vertex_codes_follow_case_not_class() {
        let tables = TriangulationTables::REGULAR;
        let a = tables.classify_case(CaseCode::new(1)).unwrap();
        let b = tables.classify_case(CaseCode::new(2)).unwrap();
        assert_eq!(a.cell_class, b.cell_class);
        assert_eq!(a.triangles, b.triangles);
        assert_ne!(a.vertex_codes, b.vertex_codes);
    }

    #[test]
    fn test_all_cases_classify() {
        let tables = TriangulationTables::REGULAR;
        for bits in 0..=255u8 {
            let cell = tables.classify_case(CaseCode::new(bits)).unwrap();
            assert_eq!(cell.case_code.bits(), bits);
            assert_eq!(cell.triangles.len() % 3, 0);
            assert_eq!(cell.is_empty(), bits == 0 || bits == 255, "case {bits}");
        }
    }

    #[test]
    fn test_broken_table_reports_case() {
        let cell_class = [16u8; 256];
        let tables = TriangulationTables::new(
            &cell_class,
            &crate::tables::REGULAR_CELL_DATA,
            &crate::tables::REGULAR_VERTEX_DATA,
        );
        let err = tables.classify_case(CaseCode::new(42)).unwrap_err();
        assert_eq!(
            err,
            TableError::ClassOutOfRange {
                case: 42,
                class: 16,
                available: 16,
            }
        );
        assert!(err.to_string().contains("0x2a"));
    }
}
