//! Editable mesh model.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::access::{MeshSink, MeshSource};
use crate::error::{BridgeError, Result};
use crate::lookup_table::Rgba;

/// A mesh face: its vertex indices plus a shading flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Face {
    pub vertices: Vec<u32>,
    pub smooth: bool,
}

impl Face {
    /// Creates a flat-shaded face.
    pub fn new(vertices: Vec<u32>) -> Self {
        Self {
            vertices,
            smooth: false,
        }
    }

    /// Returns the number of corners.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns whether the face has no corners.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

/// A material slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Material {
    pub name: String,
    /// Shade with the mesh's vertex colors instead of the material color.
    pub vertex_color_paint: bool,
}

impl Material {
    /// Creates a material that ignores vertex colors.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            vertex_color_paint: false,
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::new("Material")
    }
}

/// A named per-corner UV layer, parallel to the face list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UvLayer {
    pub name: String,
    pub corners: Vec<Vec<Vec2>>,
}

/// An editable polygon mesh.
///
/// Faces and edges index into the vertex list. Per-corner colors and UV
/// layers, when present, hold one entry per face and one value per corner.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    vertices: Vec<Vec3>,
    edges: Vec<[u32; 2]>,
    faces: Vec<Face>,
    corner_colors: Option<Vec<Vec<Rgba>>>,
    uv_layers: Vec<UvLayer>,
    active_uv_layer: Option<usize>,
    materials: Vec<Material>,
    revision: u64,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh from vertices, polygon faces and loose edges.
    pub fn from_parts(vertices: Vec<Vec3>, faces: Vec<Vec<u32>>, edges: Vec<[u32; 2]>) -> Self {
        Self {
            vertices,
            edges,
            faces: faces.into_iter().map(Face::new).collect(),
            ..Self::default()
        }
    }

    /// Returns the number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of faces.
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    /// Returns the number of edges.
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Returns the vertices.
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    /// Returns the faces.
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Returns the edges.
    pub fn edges(&self) -> &[[u32; 2]] {
        &self.edges
    }

    /// Returns the per-corner color layer, if the mesh has vertex colors.
    pub fn corner_colors(&self) -> Option<&[Vec<Rgba>]> {
        self.corner_colors.as_deref()
    }

    /// Returns the color layer flattened in face-corner order as RGBA bytes,
    /// four per corner.
    pub fn corner_color_bytes(&self) -> Option<Vec<u8>> {
        let layer = self.corner_colors.as_ref()?;
        Some(
            layer
                .iter()
                .flat_map(|colors| Rgba::slice_as_bytes(colors).iter().copied())
                .collect(),
        )
    }

    /// Returns whether the mesh carries vertex colors.
    pub fn has_vertex_colors(&self) -> bool {
        self.corner_colors.is_some()
    }

    /// Returns the materials.
    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    /// Appends a material slot.
    pub fn add_material(&mut self, material: Material) {
        self.materials.push(material);
    }

    /// Returns the UV layers.
    pub fn uv_layers(&self) -> &[UvLayer] {
        &self.uv_layers
    }

    /// Adds a UV layer. The first layer added becomes active.
    ///
    /// `corners` must hold one entry per face with one UV per face corner.
    pub fn add_uv_layer(&mut self, name: impl Into<String>, corners: Vec<Vec<Vec2>>) -> Result<()> {
        check_per_corner(&self.faces, &corners)?;
        self.uv_layers.push(UvLayer {
            name: name.into(),
            corners,
        });
        if self.active_uv_layer.is_none() {
            self.active_uv_layer = Some(self.uv_layers.len() - 1);
        }
        Ok(())
    }

    /// Makes the named UV layer active.
    pub fn set_active_uv_layer(&mut self, name: &str) -> Result<()> {
        let index = self
            .uv_layers
            .iter()
            .position(|layer| layer.name == name)
            .ok_or_else(|| BridgeError::UvLayerNotFound(name.to_string()))?;
        self.active_uv_layer = Some(index);
        Ok(())
    }

    /// Number of completed overwrites.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Checks that every face and edge references an existing vertex and
    /// that per-corner layers match the face list.
    pub fn validate(&self) -> Result<()> {
        let count = self.vertices.len();
        let indices = self
            .faces
            .iter()
            .flat_map(|face| face.vertices.iter())
            .chain(self.edges.iter().flatten());
        for &index in indices {
            if index as usize >= count {
                return Err(BridgeError::PointIndexOutOfRange { index, count });
            }
        }
        if let Some(colors) = &self.corner_colors {
            check_per_corner(&self.faces, colors)?;
        }
        for layer in &self.uv_layers {
            check_per_corner(&self.faces, &layer.corners)?;
        }
        Ok(())
    }
}

fn check_per_corner<T>(faces: &[Face], per_corner: &[Vec<T>]) -> Result<()> {
    if per_corner.len() != faces.len() {
        return Err(BridgeError::SizeMismatch {
            expected: faces.len(),
            actual: per_corner.len(),
        });
    }
    for (face, values) in faces.iter().zip(per_corner) {
        if values.len() != face.len() {
            return Err(BridgeError::SizeMismatch {
                expected: face.len(),
                actual: values.len(),
            });
        }
    }
    Ok(())
}

impl MeshSource for Mesh {
    fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    fn vertex(&self, index: usize) -> Vec3 {
        self.vertices[index]
    }

    fn num_faces(&self) -> usize {
        self.faces.len()
    }

    fn face(&self, index: usize) -> &[u32] {
        &self.faces[index].vertices
    }

    fn num_edges(&self) -> usize {
        self.edges.len()
    }

    fn edge(&self, index: usize) -> [u32; 2] {
        self.edges[index]
    }

    fn uv_layer_names(&self) -> Vec<&str> {
        self.uv_layers.iter().map(|layer| layer.name.as_str()).collect()
    }

    fn active_uv_layer(&self) -> Option<&str> {
        self.active_uv_layer
            .and_then(|index| self.uv_layers.get(index))
            .map(|layer| layer.name.as_str())
    }

    fn face_uvs(&self, layer: &str, face: usize) -> Option<&[Vec2]> {
        self.uv_layers
            .iter()
            .find(|candidate| candidate.name == layer)
            .and_then(|layer| layer.corners.get(face))
            .map(Vec::as_slice)
    }
}

impl MeshSink for Mesh {
    fn materials(&self) -> Vec<Material> {
        self.materials.clone()
    }

    // Clearing vertices invalidates everything indexed by them, materials included.
    fn clear_geometry(&mut self) {
        self.vertices.clear();
        self.edges.clear();
        self.faces.clear();
        self.corner_colors = None;
        self.uv_layers.clear();
        self.active_uv_layer = None;
        self.materials.clear();
    }

    fn set_vertices(&mut self, vertices: Vec<Vec3>) {
        self.vertices = vertices;
    }

    fn set_edges(&mut self, edges: Vec<[u32; 2]>) {
        self.edges = edges;
    }

    fn set_faces(&mut self, faces: Vec<Face>) {
        self.faces = faces;
    }

    fn set_corner_colors(&mut self, colors: Vec<Vec<Rgba>>) -> Result<()> {
        check_per_corner(&self.faces, &colors)?;
        self.corner_colors = Some(colors);
        Ok(())
    }

    fn set_materials(&mut self, materials: Vec<Material>) {
        self.materials = materials;
    }

    fn update(&mut self) {
        self.revision += 1;
    }
}
