//! Mesh to polydata conversion.

use glam::Vec2;
use polybridge_core::{CellKind, ExportOptions, FacePolicy, MeshSource, PolyData, Result};

/// Converts a mesh into polydata.
///
/// Every vertex becomes a point in the same order. Faces become poly cells
/// (triangle, quad, or polygon under [`FacePolicy::Polygon`]); two-vertex
/// faces and loose edges become line cells, faces first. Faces with fewer
/// than two vertices are dropped.
///
/// If the mesh has UV layers, the chosen layer is written as point texture
/// coordinates, later face corners overwriting earlier ones at shared points.
pub fn mesh_to_polydata<M: MeshSource + ?Sized>(
    mesh: &M,
    options: &ExportOptions,
) -> Result<PolyData> {
    let points = (0..mesh.num_vertices()).map(|i| mesh.vertex(i)).collect();
    let mut polydata = PolyData::new(points);
    let mut skipped = 0usize;

    for face_idx in 0..mesh.num_faces() {
        let face = mesh.face(face_idx);
        let kind = match face.len() {
            0 | 1 => None,
            2 => Some(CellKind::Line),
            3 | 4 => Some(CellKind::for_polygon(face.len())),
            _ => match options.face_policy {
                FacePolicy::Polygon => Some(CellKind::Polygon),
                FacePolicy::Skip => None,
            },
        };
        match kind {
            Some(kind) => polydata.insert_cell(kind, face.to_vec())?,
            None => skipped += 1,
        }
    }

    for edge_idx in 0..mesh.num_edges() {
        polydata.insert_cell(CellKind::Line, mesh.edge(edge_idx).to_vec())?;
    }

    if let Some(layer) = select_uv_layer(mesh, options) {
        let mut tcoords = vec![Vec2::ZERO; mesh.num_vertices()];
        for face_idx in 0..mesh.num_faces() {
            let Some(uvs) = mesh.face_uvs(&layer, face_idx) else {
                continue;
            };
            for (&vertex, &uv) in mesh.face(face_idx).iter().zip(uvs) {
                if let Some(slot) = tcoords.get_mut(vertex as usize) {
                    *slot = uv;
                }
            }
        }
        polydata.set_tcoords(tcoords)?;
    }

    log::debug!(
        "mesh to polydata: {} points, {} polys, {} lines, {} faces skipped",
        polydata.num_points(),
        polydata.polys().len(),
        polydata.lines().len(),
        skipped
    );

    Ok(polydata)
}

/// Picks the requested UV layer if the mesh has it, else the active one.
fn select_uv_layer<M: MeshSource + ?Sized>(mesh: &M, options: &ExportOptions) -> Option<String> {
    let names = mesh.uv_layer_names();
    if names.is_empty() {
        return None;
    }
    options
        .uv_layer
        .as_deref()
        .filter(|wanted| names.iter().any(|name| name == wanted))
        .or_else(|| mesh.active_uv_layer())
        .map(str::to_string)
}
