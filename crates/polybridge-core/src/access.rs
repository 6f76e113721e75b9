//! Capability traits for the two collaborating data models.
//!
//! The converters never touch a concrete mesh or polydata type directly; they
//! read through [`MeshSource`] and [`PolyDataSource`] and write through
//! [`MeshSink`]. [`Mesh`](crate::Mesh), [`PolyData`](crate::PolyData) and
//! [`PolyDataMapper`](crate::PolyDataMapper) implement them, and host
//! applications can implement them over their own object models.

use glam::{Vec2, Vec3};

use crate::cell::CellRef;
use crate::error::Result;
use crate::lookup_table::{LookupTable, Rgba};
use crate::mesh::{Face, Material};

/// Read access to an authoring-tool mesh.
pub trait MeshSource {
    /// Returns the number of vertices.
    fn num_vertices(&self) -> usize;

    /// Returns the position of vertex `index`.
    fn vertex(&self, index: usize) -> Vec3;

    /// Returns the number of faces.
    fn num_faces(&self) -> usize;

    /// Returns the vertex indices of face `index`.
    fn face(&self, index: usize) -> &[u32];

    /// Returns the number of loose edges.
    fn num_edges(&self) -> usize;

    /// Returns the endpoints of edge `index`.
    fn edge(&self, index: usize) -> [u32; 2];

    /// Returns the names of the mesh's UV layers.
    fn uv_layer_names(&self) -> Vec<&str> {
        Vec::new()
    }

    /// Returns the name of the active UV layer, if any.
    fn active_uv_layer(&self) -> Option<&str> {
        None
    }

    /// Returns the per-corner UVs of face `face` in layer `layer`.
    fn face_uvs(&self, _layer: &str, _face: usize) -> Option<&[Vec2]> {
        None
    }
}

/// Whole-list write access to an authoring-tool mesh.
pub trait MeshSink {
    /// Returns a copy of the current materials.
    fn materials(&self) -> Vec<Material>;

    /// Removes all vertices, edges, faces and per-vertex data.
    ///
    /// Implementations may drop materials as well; callers capture them
    /// beforehand with [`materials`](Self::materials).
    fn clear_geometry(&mut self);

    /// Replaces the vertex list.
    fn set_vertices(&mut self, vertices: Vec<Vec3>);

    /// Replaces the edge list.
    fn set_edges(&mut self, edges: Vec<[u32; 2]>);

    /// Replaces the face list.
    fn set_faces(&mut self, faces: Vec<Face>);

    /// Replaces the per-corner color layer. `colors[f][c]` is the color of
    /// corner `c` of face `f`.
    fn set_corner_colors(&mut self, colors: Vec<Vec<Rgba>>) -> Result<()>;

    /// Replaces the material list.
    fn set_materials(&mut self, materials: Vec<Material>);

    /// Notifies the mesh that an overwrite has finished.
    fn update(&mut self) {}
}

/// Read access to visualization polydata and the lookup table it is drawn with.
pub trait PolyDataSource {
    /// Returns the number of points.
    fn num_points(&self) -> usize;

    /// Returns the position of point `index`.
    fn point(&self, index: usize) -> Vec3;

    /// Returns the number of cells across all buckets.
    fn num_cells(&self) -> usize;

    /// Returns cell `index` in global cell order, for `index < num_cells()`.
    ///
    /// Returns `None` for a cell whose kind has no [`CellKind`](crate::CellKind),
    /// which the converters skip. Callers never pass an index past the end.
    fn cell(&self, index: usize) -> Option<CellRef<'_>>;

    /// Returns the point-indexed scalar field, if any.
    fn scalars(&self) -> Option<&[f32]>;

    /// Returns the lookup table used to color the scalars, if any.
    fn lookup_table(&self) -> Option<&dyn LookupTable> {
        None
    }
}
