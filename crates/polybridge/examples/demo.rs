//! Demo showing a mesh round trip and a vertex color bake.
//!
//! Run with: RUST_LOG=debug cargo run --example demo

use polybridge::*;

fn main() -> Result<()> {
    init_logging();

    // A hexagon face plus a loose edge
    let vertices: Vec<Vec3> = (0..6)
        .map(|i| {
            let angle = std::f32::consts::TAU * i as f32 / 6.0;
            Vec3::new(angle.cos(), angle.sin(), 0.0)
        })
        .collect();
    let mesh = Mesh::from_parts(vertices, vec![(0..6).collect()], vec![[0, 3]]);

    let mut polydata = mesh_to_polydata(&mesh, &ExportOptions::default())?;
    log::info!(
        "exported {} points, {} polys, {} lines",
        polydata.num_points(),
        polydata.polys().len(),
        polydata.lines().len()
    );

    // Height along x drives the colors
    let scalars = polydata.points().iter().map(|p| p.x).collect();
    polydata.set_scalars(scalars)?;
    let table = ColorLookupTable::builtin("coolwarm", -1.0, 1.0).unwrap_or_default();
    let mapper = PolyDataMapper::new(polydata).with_lookup_table(table);

    let mut target = Mesh::new();
    let options = ConversionOptions::new().with_smooth_faces(true);
    let report = polydata_into_mesh(&mapper, &mut target, &options)?;
    log::info!("{report:?}");

    if let Some(colors) = target.corner_colors() {
        for (face, face_colors) in target.faces().iter().zip(colors) {
            log::info!("face {:?}: {:?}", face.vertices, face_colors);
        }
    }
    if let Some(bytes) = target.corner_color_bytes() {
        log::info!("color layer packs into {} bytes", bytes.len());
    }

    Ok(())
}
