//! Topology cells.
//!
//! A [`Cell`] is one topological primitive of a polydata: a kind tag plus the
//! ordered ids of the points it connects. Kinds carry the numeric type ids
//! used by the visualization library so foreign cell streams can be decoded.

use serde::{Deserialize, Serialize};

use crate::error::{BridgeError, Result};

/// Topology tag of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellKind {
    /// A single point.
    Vertex,
    /// A two-point edge.
    Line,
    /// A chain of edges through two or more points.
    PolyLine,
    /// Three points.
    Triangle,
    /// A strip of triangles sharing edges, three or more points.
    TriangleStrip,
    /// A planar N-gon, three or more points.
    Polygon,
    /// An axis-aligned quad, four points.
    Pixel,
    /// A quadrilateral, four points.
    Quad,
}

/// The homogeneous group a cell kind is stored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellBucket {
    Verts,
    Lines,
    Polys,
    Strips,
}

impl CellKind {
    /// Returns the numeric type id of this kind.
    pub fn type_id(self) -> u8 {
        match self {
            Self::Vertex => 1,
            Self::Line => 3,
            Self::PolyLine => 4,
            Self::Triangle => 5,
            Self::TriangleStrip => 6,
            Self::Polygon => 7,
            Self::Pixel => 8,
            Self::Quad => 9,
        }
    }

    /// Decodes a numeric type id. Unknown ids return `None`.
    pub fn from_type_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(Self::Vertex),
            3 => Some(Self::Line),
            4 => Some(Self::PolyLine),
            5 => Some(Self::Triangle),
            6 => Some(Self::TriangleStrip),
            7 => Some(Self::Polygon),
            8 => Some(Self::Pixel),
            9 => Some(Self::Quad),
            _ => None,
        }
    }

    /// Returns whether a cell of this kind can have `count` points.
    pub fn accepts(self, count: usize) -> bool {
        match self {
            Self::Vertex => count == 1,
            Self::Line => count == 2,
            Self::PolyLine => count >= 2,
            Self::Triangle => count == 3,
            Self::TriangleStrip | Self::Polygon => count >= 3,
            Self::Pixel | Self::Quad => count == 4,
        }
    }

    /// Returns the bucket cells of this kind are stored in.
    pub fn bucket(self) -> CellBucket {
        match self {
            Self::Vertex => CellBucket::Verts,
            Self::Line | Self::PolyLine => CellBucket::Lines,
            Self::Triangle | Self::Polygon | Self::Pixel | Self::Quad => CellBucket::Polys,
            Self::TriangleStrip => CellBucket::Strips,
        }
    }

    /// Picks the poly kind for a face with `count` vertices.
    pub fn for_polygon(count: usize) -> Self {
        match count {
            3 => Self::Triangle,
            4 => Self::Quad,
            _ => Self::Polygon,
        }
    }
}

/// An owned cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    kind: CellKind,
    point_ids: Vec<u32>,
}

impl Cell {
    /// Creates a cell, checking the point count against the kind.
    pub fn new(kind: CellKind, point_ids: Vec<u32>) -> Result<Self> {
        if !kind.accepts(point_ids.len()) {
            return Err(BridgeError::InvalidCell {
                kind,
                count: point_ids.len(),
            });
        }
        Ok(Self { kind, point_ids })
    }

    /// Returns the cell kind.
    pub fn kind(&self) -> CellKind {
        self.kind
    }

    /// Returns the point ids in cell order.
    pub fn point_ids(&self) -> &[u32] {
        &self.point_ids
    }

    /// Returns the number of points.
    pub fn len(&self) -> usize {
        self.point_ids.len()
    }

    /// Returns whether the cell has no points. Never true for a valid cell.
    pub fn is_empty(&self) -> bool {
        self.point_ids.is_empty()
    }

    /// Borrows this cell as a [`CellRef`].
    pub fn view(&self) -> CellRef<'_> {
        CellRef {
            kind: self.kind,
            point_ids: &self.point_ids,
        }
    }
}

/// A borrowed view of a cell, as handed out by polydata sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRef<'a> {
    pub kind: CellKind,
    pub point_ids: &'a [u32],
}

impl CellRef<'_> {
    /// Checks the point count against the kind.
    pub fn validate(&self) -> Result<()> {
        if self.kind.accepts(self.point_ids.len()) {
            Ok(())
        } else {
            Err(BridgeError::InvalidCell {
                kind: self.kind,
                count: self.point_ids.len(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [CellKind; 8] = [
        CellKind::Vertex,
        CellKind::Line,
        CellKind::PolyLine,
        CellKind::Triangle,
        CellKind::TriangleStrip,
        CellKind::Polygon,
        CellKind::Pixel,
        CellKind::Quad,
    ];

    #[test]
    fn test_type_ids_decode() {
        for kind in ALL {
            assert_eq!(CellKind::from_type_id(kind.type_id()), Some(kind));
        }
        assert_eq!(CellKind::from_type_id(2), None);
        assert_eq!(CellKind::from_type_id(10), None);
        assert_eq!(CellKind::from_type_id(42), None);
    }

    #[test]
    fn test_point_count_validation() {
        assert!(Cell::new(CellKind::Line, vec![0, 1]).is_ok());
        assert!(Cell::new(CellKind::Line, vec![0, 1, 2]).is_err());
        assert!(Cell::new(CellKind::Triangle, vec![0, 1]).is_err());
        assert!(Cell::new(CellKind::Quad, vec![0, 1, 2, 3]).is_ok());
        assert!(Cell::new(CellKind::Polygon, vec![0, 1]).is_err());
        assert!(Cell::new(CellKind::TriangleStrip, vec![0, 1, 2, 3, 4]).is_ok());

        let err = Cell::new(CellKind::Pixel, vec![0]).unwrap_err();
        assert!(matches!(
            err,
            BridgeError::InvalidCell {
                kind: CellKind::Pixel,
                count: 1
            }
        ));
    }

    #[test]
    fn test_polygon_kind_by_size() {
        assert_eq!(CellKind::for_polygon(3), CellKind::Triangle);
        assert_eq!(CellKind::for_polygon(4), CellKind::Quad);
        assert_eq!(CellKind::for_polygon(7), CellKind::Polygon);
    }

    #[test]
    fn test_buckets() {
        assert_eq!(CellKind::PolyLine.bucket(), CellBucket::Lines);
        assert_eq!(CellKind::Pixel.bucket(), CellBucket::Polys);
        assert_eq!(CellKind::TriangleStrip.bucket(), CellBucket::Strips);
    }
}
