//! End-to-end conversions through the public API.

use polybridge::*;

/// A 3x2 grid of points with two quads, a triangle fan corner, a degenerate
/// face and two loose edges.
fn sample_mesh() -> Mesh {
    let vertices = (0..6)
        .map(|i| Vec3::new((i % 3) as f32, (i / 3) as f32, 0.25 * i as f32))
        .collect();
    Mesh::from_parts(
        vertices,
        vec![vec![0, 1, 4, 3], vec![1, 2, 5], vec![2, 5], vec![1, 5, 4]],
        vec![[0, 5], [3, 2]],
    )
}

#[test]
fn test_round_trip_preserves_vertices() {
    let mesh = sample_mesh();
    let polydata = mesh_to_polydata(&mesh, &ExportOptions::default()).unwrap();
    let back = polydata_to_mesh(&polydata, &ConversionOptions::default()).unwrap();

    assert_eq!(back.num_vertices(), mesh.num_vertices());
    assert_eq!(back.vertices(), mesh.vertices());
    back.validate().unwrap();
}

#[test]
fn test_round_trip_faces_and_edges() {
    let mesh = sample_mesh();
    let polydata = mesh_to_polydata(&mesh, &ExportOptions::default()).unwrap();
    let back = polydata_to_mesh(&polydata, &ConversionOptions::default()).unwrap();

    // Faces with three or four vertices come back in order.
    let faces: Vec<&[u32]> = back.faces().iter().map(|f| f.vertices.as_slice()).collect();
    assert_eq!(faces, vec![&[0, 1, 4, 3][..], &[1, 2, 5], &[1, 5, 4]]);

    // The degenerate face returns as an edge, ahead of the loose edges.
    assert_eq!(back.edges(), &[[2, 5], [0, 5], [3, 2]]);
}

#[test]
fn test_line_cells_count_edges_and_degenerate_faces() {
    let mesh = sample_mesh();
    let polydata = mesh_to_polydata(&mesh, &ExportOptions::default()).unwrap();

    let degenerate = mesh.faces().iter().filter(|f| f.len() == 2).count();
    assert_eq!(polydata.lines().len(), mesh.num_edges() + degenerate);
}

#[test]
fn test_overwrite_existing_mesh() {
    let mut target = sample_mesh();
    target.add_material(Material::new("painted"));

    let mut polydata = PolyData::new(vec![Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::ONE]);
    polydata.insert_cell(CellKind::Polygon, vec![0, 1, 3, 2]).unwrap();

    let report = polydata_into_mesh(&polydata, &mut target, &ConversionOptions::default()).unwrap();
    assert_eq!(report.centroids, 1);
    assert_eq!(report.faces, 4);
    assert!(!report.colors_baked);

    assert_eq!(target.num_vertices(), 5);
    assert_eq!(target.num_edges(), 0);
    assert_eq!(target.materials(), &[Material::new("painted")]);
}

#[test]
fn test_quad_polygon_example() {
    let mut polydata = PolyData::new(vec![Vec3::ZERO, Vec3::X, Vec3::ONE, Vec3::Y]);
    polydata.insert_cell(CellKind::Polygon, vec![0, 1, 2, 3]).unwrap();

    let mesh = polydata_to_mesh(&polydata, &ConversionOptions::default()).unwrap();
    assert_eq!(mesh.num_faces(), 4);
    assert!(mesh.faces().iter().all(|f| f.len() == 3 && f.vertices[2] == 4));
    assert_eq!(mesh.num_vertices(), 5);
    assert!(!mesh.has_vertex_colors());
}

#[test]
fn test_color_bake_through_mapper() {
    let points: Vec<Vec3> = (0..8).map(|i| Vec3::new(i as f32, 0.0, 0.0)).collect();
    let mut polydata = PolyData::new(points);
    polydata.insert_cell(CellKind::TriangleStrip, vec![0, 1, 2, 3]).unwrap();
    polydata.insert_cell(CellKind::Polygon, vec![4, 5, 6, 7]).unwrap();
    let scalars: Vec<f32> = vec![0.0, 0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.9];
    polydata.set_scalars(scalars.clone()).unwrap();

    let table = ColorLookupTable::builtin("viridis", 0.0, 1.0)
        .unwrap()
        .with_opacity_range(0.2, 1.0);
    let mapper = PolyDataMapper::new(polydata).with_lookup_table(table.clone());

    let options = ConversionOptions::new().with_smooth_faces(true);
    let mesh = polydata_to_mesh(&mapper, &options).unwrap();
    let colors = mesh.corner_colors().unwrap();
    let centroid_scalar = (0.4 + 0.5 + 0.6 + 0.9) / 4.0;

    for (face, face_colors) in mesh.faces().iter().zip(colors) {
        assert!(face.smooth);
        for (&vertex, &color) in face.vertices.iter().zip(face_colors) {
            let scalar = scalars.get(vertex as usize).copied().unwrap_or(centroid_scalar);
            let expected = table.rgba(scalar);
            // The mean is computed in a different order; allow one step.
            assert!(color.r.abs_diff(expected.r) <= 1, "{color:?} vs {expected:?}");
            assert!(color.g.abs_diff(expected.g) <= 1, "{color:?} vs {expected:?}");
            assert!(color.b.abs_diff(expected.b) <= 1, "{color:?} vs {expected:?}");
            assert!(color.a.abs_diff(expected.a) <= 1, "{color:?} vs {expected:?}");
        }
    }

    assert!(mesh.materials()[0].vertex_color_paint);
}

#[test]
fn test_options_from_json_drive_conversion() {
    let options: ConversionOptions =
        serde_json::from_str(r#"{ "pair_triangles_to_quads": true }"#).unwrap();

    let mut polydata = PolyData::new((0..6).map(|i| Vec3::new(i as f32, 0.0, 0.0)).collect());
    polydata.insert_cell(CellKind::TriangleStrip, (0..6).collect()).unwrap();

    let mesh = polydata_to_mesh(&polydata, &options).unwrap();
    assert_eq!(mesh.num_faces(), 2);
    assert!(mesh.faces().iter().all(|f| f.len() == 4));
}
