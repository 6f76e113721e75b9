//! Visualization polydata.
//!
//! Points plus cells stored in four homogeneous buckets. The mixed cell view
//! numbers cells bucket by bucket (verts, lines, polys, strips), which is the
//! order the visualization library assigns global cell ids in.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::access::PolyDataSource;
use crate::cell::{Cell, CellBucket, CellKind, CellRef};
use crate::error::{BridgeError, Result};
use crate::lookup_table::{ColorLookupTable, LookupTable};

/// Points, topology cells and point-indexed attributes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolyData {
    points: Vec<Vec3>,
    verts: Vec<Cell>,
    lines: Vec<Cell>,
    polys: Vec<Cell>,
    strips: Vec<Cell>,
    scalars: Option<Vec<f32>>,
    tcoords: Option<Vec<Vec2>>,
}

impl PolyData {
    /// Creates polydata with the given points and no cells.
    pub fn new(points: Vec<Vec3>) -> Self {
        Self {
            points,
            ..Self::default()
        }
    }

    /// Returns the number of points.
    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    /// Returns the points.
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// Appends a point and returns its id.
    pub fn add_point(&mut self, point: Vec3) -> u32 {
        self.points.push(point);
        (self.points.len() - 1) as u32
    }

    /// Inserts a cell into the bucket for its kind.
    ///
    /// Fails if the point count does not fit the kind or an id does not
    /// name an existing point.
    pub fn insert_cell(&mut self, kind: CellKind, point_ids: Vec<u32>) -> Result<()> {
        let count = self.points.len();
        if let Some(&index) = point_ids.iter().find(|&&id| id as usize >= count) {
            return Err(BridgeError::PointIndexOutOfRange { index, count });
        }
        let cell = Cell::new(kind, point_ids)?;
        self.bucket_mut(kind.bucket()).push(cell);
        Ok(())
    }

    fn bucket_mut(&mut self, bucket: CellBucket) -> &mut Vec<Cell> {
        match bucket {
            CellBucket::Verts => &mut self.verts,
            CellBucket::Lines => &mut self.lines,
            CellBucket::Polys => &mut self.polys,
            CellBucket::Strips => &mut self.strips,
        }
    }

    /// Returns the cells of one bucket.
    pub fn bucket(&self, bucket: CellBucket) -> &[Cell] {
        match bucket {
            CellBucket::Verts => &self.verts,
            CellBucket::Lines => &self.lines,
            CellBucket::Polys => &self.polys,
            CellBucket::Strips => &self.strips,
        }
    }

    /// Returns the line and polyline cells.
    pub fn lines(&self) -> &[Cell] {
        &self.lines
    }

    /// Returns the triangle, polygon, pixel and quad cells.
    pub fn polys(&self) -> &[Cell] {
        &self.polys
    }

    /// Returns the triangle strip cells.
    pub fn strips(&self) -> &[Cell] {
        &self.strips
    }

    /// Returns the total number of cells.
    pub fn num_cells(&self) -> usize {
        self.verts.len() + self.lines.len() + self.polys.len() + self.strips.len()
    }

    /// Iterates over all cells in global cell order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.verts
            .iter()
            .chain(&self.lines)
            .chain(&self.polys)
            .chain(&self.strips)
    }

    /// Returns the cell with global id `index`.
    pub fn cell(&self, index: usize) -> Option<&Cell> {
        let mut index = index;
        for bucket in [&self.verts, &self.lines, &self.polys, &self.strips] {
            if index < bucket.len() {
                return bucket.get(index);
            }
            index -= bucket.len();
        }
        None
    }

    /// Returns the point scalars, if set.
    pub fn scalars(&self) -> Option<&[f32]> {
        self.scalars.as_deref()
    }

    /// Sets the point scalars. There must be exactly one per point.
    pub fn set_scalars(&mut self, scalars: Vec<f32>) -> Result<()> {
        check_point_count(self.points.len(), scalars.len())?;
        self.scalars = Some(scalars);
        Ok(())
    }

    /// Returns the point texture coordinates, if set.
    pub fn tcoords(&self) -> Option<&[Vec2]> {
        self.tcoords.as_deref()
    }

    /// Sets the point texture coordinates. There must be exactly one per point.
    pub fn set_tcoords(&mut self, tcoords: Vec<Vec2>) -> Result<()> {
        check_point_count(self.points.len(), tcoords.len())?;
        self.tcoords = Some(tcoords);
        Ok(())
    }
}

fn check_point_count(expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(BridgeError::SizeMismatch { expected, actual })
    }
}

impl PolyDataSource for PolyData {
    fn num_points(&self) -> usize {
        self.points.len()
    }

    fn point(&self, index: usize) -> Vec3 {
        self.points[index]
    }

    fn num_cells(&self) -> usize {
        PolyData::num_cells(self)
    }

    fn cell(&self, index: usize) -> Option<CellRef<'_>> {
        PolyData::cell(self, index).map(Cell::view)
    }

    fn scalars(&self) -> Option<&[f32]> {
        PolyData::scalars(self)
    }
}

/// Polydata paired with the lookup table its scalars are drawn with.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolyDataMapper<L = ColorLookupTable> {
    input: PolyData,
    lookup_table: Option<L>,
}

impl<L: LookupTable> PolyDataMapper<L> {
    /// Creates a mapper without a lookup table.
    pub fn new(input: PolyData) -> Self {
        Self {
            input,
            lookup_table: None,
        }
    }

    /// Attaches a lookup table.
    pub fn with_lookup_table(mut self, lookup_table: L) -> Self {
        self.lookup_table = Some(lookup_table);
        self
    }

    /// Returns the mapped polydata.
    pub fn input(&self) -> &PolyData {
        &self.input
    }

    /// Returns the mapped polydata mutably.
    pub fn input_mut(&mut self) -> &mut PolyData {
        &mut self.input
    }

    /// Replaces the lookup table.
    pub fn set_lookup_table(&mut self, lookup_table: Option<L>) {
        self.lookup_table = lookup_table;
    }
}

impl<L: LookupTable> PolyDataSource for PolyDataMapper<L> {
    fn num_points(&self) -> usize {
        self.input.num_points()
    }

    fn point(&self, index: usize) -> Vec3 {
        self.input.points[index]
    }

    fn num_cells(&self) -> usize {
        self.input.num_cells()
    }

    fn cell(&self, index: usize) -> Option<CellRef<'_>> {
        self.input.cell(index).map(Cell::view)
    }

    fn scalars(&self) -> Option<&[f32]> {
        self.input.scalars()
    }

    fn lookup_table(&self) -> Option<&dyn LookupTable> {
        self.lookup_table.as_ref().map(|table| table as &dyn LookupTable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> PolyData {
        PolyData::new(vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        ])
    }

    #[test]
    fn test_cells_are_numbered_by_bucket() {
        let mut pd = square();
        pd.insert_cell(CellKind::TriangleStrip, vec![0, 1, 3, 2]).unwrap();
        pd.insert_cell(CellKind::Quad, vec![0, 1, 2, 3]).unwrap();
        pd.insert_cell(CellKind::Line, vec![0, 2]).unwrap();
        pd.insert_cell(CellKind::Vertex, vec![3]).unwrap();

        assert_eq!(pd.num_cells(), 4);
        let kinds: Vec<CellKind> = pd.cells().map(Cell::kind).collect();
        assert_eq!(
            kinds,
            vec![
                CellKind::Vertex,
                CellKind::Line,
                CellKind::Quad,
                CellKind::TriangleStrip
            ]
        );
        assert_eq!(pd.cell(2).map(Cell::kind), Some(CellKind::Quad));
        assert!(pd.cell(4).is_none());
    }

    #[test]
    fn test_insert_rejects_missing_points() {
        let mut pd = square();
        let err = pd.insert_cell(CellKind::Triangle, vec![0, 1, 9]).unwrap_err();
        assert!(matches!(
            err,
            BridgeError::PointIndexOutOfRange { index: 9, count: 4 }
        ));
        assert_eq!(pd.num_cells(), 0);
    }

    #[test]
    fn test_attribute_sizes() {
        let mut pd = square();
        assert!(pd.set_scalars(vec![0.0; 3]).is_err());
        assert!(pd.set_scalars(vec![0.0; 4]).is_ok());
        assert!(pd.set_tcoords(vec![Vec2::ZERO; 5]).is_err());
        assert_eq!(pd.scalars().map(<[f32]>::len), Some(4));
    }

    #[test]
    fn test_mapper_exposes_lookup_table() {
        let mapper: PolyDataMapper = PolyDataMapper::new(square());
        assert!(mapper.lookup_table().is_none());

        let mapper = mapper.with_lookup_table(ColorLookupTable::default());
        assert!(mapper.lookup_table().is_some());
        assert_eq!(PolyDataSource::num_points(&mapper), 4);
    }
}
