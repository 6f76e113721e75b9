//! Baking point scalars into per-corner vertex colors.

use polybridge_core::{BridgeError, Face, LookupTable, PolyDataSource, Result, Rgba};

/// Per-point colors accumulated during one polydata to mesh conversion.
///
/// Starts with one color per source point; every vertex the converter adds
/// afterwards must push its own color so the table stays vertex-indexed.
pub struct ColorBake<'a> {
    scalars: &'a [f32],
    table: &'a dyn LookupTable,
    colors: Vec<Rgba>,
}

impl<'a> ColorBake<'a> {
    /// Maps every scalar through `table`.
    pub fn new(scalars: &'a [f32], table: &'a dyn LookupTable) -> Self {
        let colors = scalars.iter().map(|&s| table.rgba(s)).collect();
        Self {
            scalars,
            table,
            colors,
        }
    }

    /// Prepares a bake for `source`, or returns `None` when the source lacks
    /// scalars or a lookup table, or its scalars are not one per point.
    pub fn for_source<P: PolyDataSource + ?Sized>(source: &'a P) -> Option<Self> {
        let scalars = source.scalars()?;
        let Some(table) = source.lookup_table() else {
            log::debug!("point scalars without a lookup table, skipping color bake");
            return None;
        };
        if scalars.len() != source.num_points() {
            log::warn!(
                "{} scalars for {} points, skipping color bake",
                scalars.len(),
                source.num_points()
            );
            return None;
        }
        Some(Self::new(scalars, table))
    }

    /// Mean of the scalars at the given global point ids.
    pub fn mean_scalar(&self, point_ids: &[u32]) -> f32 {
        if point_ids.is_empty() {
            return 0.0;
        }
        let sum: f32 = point_ids
            .iter()
            .map(|&id| self.scalars[id as usize])
            .sum();
        sum / point_ids.len() as f32
    }

    /// Appends the color of a new vertex placed at the centroid of
    /// `point_ids`, looked up from their mean scalar.
    pub fn push_centroid(&mut self, point_ids: &[u32]) -> Rgba {
        let color = self.table.rgba(self.mean_scalar(point_ids));
        self.colors.push(color);
        color
    }

    /// Returns the vertex-indexed colors.
    pub fn colors(&self) -> &[Rgba] {
        &self.colors
    }

    /// Builds the per-corner color layer for `faces`.
    pub fn corner_layer(&self, faces: &[Face]) -> Result<Vec<Vec<Rgba>>> {
        faces
            .iter()
            .map(|face| {
                face.vertices
                    .iter()
                    .map(|&vertex| {
                        self.colors.get(vertex as usize).copied().ok_or(
                            BridgeError::PointIndexOutOfRange {
                                index: vertex,
                                count: self.colors.len(),
                            },
                        )
                    })
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polybridge_core::{CellKind, ColorLookupTable, PolyData, PolyDataMapper, Vec3};

    fn gray() -> ColorLookupTable {
        ColorLookupTable::builtin("gray", 0.0, 1.0).unwrap()
    }

    #[test]
    fn test_point_colors_follow_scalars() {
        let table = gray();
        let bake = ColorBake::new(&[0.0, 1.0, 0.5], &table);
        assert_eq!(
            bake.colors(),
            &[
                Rgba::new(0, 0, 0, 255),
                Rgba::new(255, 255, 255, 255),
                Rgba::new(128, 128, 128, 255)
            ]
        );
    }

    #[test]
    fn test_centroid_uses_global_point_ids() {
        let table = gray();
        let scalars = [1.0, 1.0, 1.0, 0.0, 0.0, 0.0];
        let mut bake = ColorBake::new(&scalars, &table);

        // Points 3..6 all carry 0.0; the first three cell-local slots carry 1.0.
        assert!(bake.mean_scalar(&[3, 4, 5]).abs() < 1e-6);
        assert_eq!(bake.push_centroid(&[3, 4, 5]), Rgba::new(0, 0, 0, 255));
        assert_eq!(bake.colors().len(), 7);
    }

    #[test]
    fn test_corner_layer() {
        let table = gray();
        let bake = ColorBake::new(&[0.0, 1.0, 0.0], &table);
        let faces = vec![Face::new(vec![2, 1, 0])];
        let layer = bake.corner_layer(&faces).unwrap();
        assert_eq!(layer.len(), 1);
        assert_eq!(layer[0][1], Rgba::new(255, 255, 255, 255));

        let bad = vec![Face::new(vec![0, 1, 7])];
        assert!(bake.corner_layer(&bad).is_err());
    }

    #[test]
    fn test_for_source_requires_scalars_and_table() {
        let mut pd = PolyData::new(vec![Vec3::ZERO, Vec3::X, Vec3::Y]);
        pd.insert_cell(CellKind::Triangle, vec![0, 1, 2]).unwrap();

        assert!(ColorBake::for_source(&pd).is_none());

        pd.set_scalars(vec![0.0, 0.5, 1.0]).unwrap();
        // Plain polydata has no lookup table.
        assert!(ColorBake::for_source(&pd).is_none());

        let mapper = PolyDataMapper::new(pd).with_lookup_table(gray());
        assert!(ColorBake::for_source(&mapper).is_some());
    }
}
