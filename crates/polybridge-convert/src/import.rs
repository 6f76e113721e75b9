//! Polydata to mesh conversion.
//!
//! Cells are walked once in global order and classified by kind:
//!
//! | kind | result |
//! |---|---|
//! | line | one edge |
//! | polyline | one edge per consecutive point pair |
//! | triangle | one triangle, or one quad when paired with the next cell |
//! | triangle strip | alternating-winding triangles, or quads for even strips |
//! | polygon | a centroid vertex fanned to N triangles |
//! | pixel, quad | one quad in cell order |
//! | vertex | ignored |

use glam::Vec3;
use polybridge_core::{
    BridgeError, CellKind, CellRef, ConversionOptions, Face, Material, Mesh, MeshSink,
    PolyDataSource, Result, Rgba,
};

use crate::bake::ColorBake;

/// Summary of one polydata to mesh conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionReport {
    /// Vertices copied from points.
    pub points: usize,
    /// Centroid vertices added for polygon cells.
    pub centroids: usize,
    pub faces: usize,
    pub edges: usize,
    /// Cells with no mesh counterpart.
    pub ignored_cells: usize,
    /// Whether a per-corner color layer was written.
    pub colors_baked: bool,
}

/// Converts polydata into a new mesh.
pub fn polydata_to_mesh<P: PolyDataSource + ?Sized>(
    source: &P,
    options: &ConversionOptions,
) -> Result<Mesh> {
    let mut mesh = Mesh::new();
    let built = build(source, options)?;
    write(built, &mut mesh, Vec::new())?;
    Ok(mesh)
}

/// Converts polydata into an existing mesh, replacing its geometry.
///
/// The mesh's materials are kept when the conversion would otherwise leave
/// it without any. A malformed cell fails the call before the mesh is touched.
///
/// If the sink rejects the color layer, the new geometry and materials stay
/// written without colors, [`MeshSink::update`] still runs and the error is
/// returned.
pub fn polydata_into_mesh<P, M>(
    source: &P,
    mesh: &mut M,
    options: &ConversionOptions,
) -> Result<ConversionReport>
where
    P: PolyDataSource + ?Sized,
    M: MeshSink + ?Sized,
{
    let built = build(source, options)?;
    let previous_materials = mesh.materials();
    mesh.clear_geometry();
    let written = write(built, mesh, previous_materials);
    mesh.update();
    written
}

/// Scratch geometry for one conversion.
struct Built {
    vertices: Vec<Vec3>,
    faces: Vec<Face>,
    edges: Vec<[u32; 2]>,
    corner_colors: Option<Vec<Vec<Rgba>>>,
    report: ConversionReport,
}

struct MeshBuilder<'a> {
    vertices: Vec<Vec3>,
    faces: Vec<Face>,
    edges: Vec<[u32; 2]>,
    bake: Option<ColorBake<'a>>,
    smooth: bool,
    report: ConversionReport,
}

impl MeshBuilder<'_> {
    fn check(&self, index: u32) -> Result<()> {
        if (index as usize) < self.vertices.len() {
            Ok(())
        } else {
            Err(BridgeError::PointIndexOutOfRange {
                index,
                count: self.vertices.len(),
            })
        }
    }

    fn add_edge(&mut self, a: u32, b: u32) -> Result<()> {
        self.check(a)?;
        self.check(b)?;
        self.edges.push([a, b]);
        self.report.edges += 1;
        Ok(())
    }

    fn add_face(&mut self, vertices: &[u32]) -> Result<()> {
        for &index in vertices {
            self.check(index)?;
        }
        self.faces.push(Face {
            vertices: vertices.to_vec(),
            smooth: self.smooth,
        });
        self.report.faces += 1;
        Ok(())
    }

    /// Appends the centroid of `point_ids` as a vertex, with its color
    /// resolved from the mean scalar when baking.
    fn add_centroid(&mut self, point_ids: &[u32]) -> Result<u32> {
        for &index in point_ids {
            self.check(index)?;
        }
        let sum: Vec3 = point_ids
            .iter()
            .map(|&index| self.vertices[index as usize])
            .sum();
        let centroid = sum / point_ids.len() as f32;

        let index = self.vertices.len() as u32;
        self.vertices.push(centroid);
        if let Some(bake) = &mut self.bake {
            bake.push_centroid(point_ids);
        }
        self.report.centroids += 1;
        Ok(index)
    }

    fn add_cell(&mut self, cell: CellRef<'_>, pair_quads: bool) -> Result<()> {
        let ids = cell.point_ids;
        match cell.kind {
            CellKind::Line => self.add_edge(ids[0], ids[1]),
            CellKind::PolyLine => {
                for pair in ids.windows(2) {
                    self.add_edge(pair[0], pair[1])?;
                }
                Ok(())
            }
            CellKind::Triangle | CellKind::Pixel | CellKind::Quad => self.add_face(ids),
            CellKind::TriangleStrip => {
                if pair_quads && ids.len() % 2 == 0 {
                    for quad in strip_quads(ids) {
                        self.add_face(&quad)?;
                    }
                } else {
                    for tri in strip_triangles(ids) {
                        self.add_face(&tri)?;
                    }
                }
                Ok(())
            }
            CellKind::Polygon => {
                let center = self.add_centroid(ids)?;
                let n = ids.len();
                for j in 0..n {
                    self.add_face(&[ids[j], ids[(j + 1) % n], center])?;
                }
                Ok(())
            }
            CellKind::Vertex => {
                self.report.ignored_cells += 1;
                Ok(())
            }
        }
    }
}

/// Merges two triangle cells sharing the edge `n2-n3` of the first
/// (traversed `m2-m3` by the second) into the quad `[n1, n2, m1, n3]`.
pub fn pair_triangles(first: &[u32], second: &[u32]) -> Option<[u32; 4]> {
    match (first, second) {
        (&[n1, n2, n3], &[m1, m2, m3]) if n2 == m3 && n3 == m2 => Some([n1, n2, m1, n3]),
        _ => None,
    }
}

/// Splits a strip into triangles, flipping every other one so all share the
/// winding of the first.
pub fn strip_triangles(ids: &[u32]) -> impl Iterator<Item = [u32; 3]> + '_ {
    (0..ids.len().saturating_sub(2)).map(move |j| {
        if j % 2 == 0 {
            [ids[j], ids[j + 1], ids[j + 2]]
        } else {
            [ids[j], ids[j + 2], ids[j + 1]]
        }
    })
}

/// Reads an even-length strip as quads over each group of four points
/// starting at an even offset.
pub fn strip_quads(ids: &[u32]) -> impl Iterator<Item = [u32; 4]> + '_ {
    (0..ids.len().saturating_sub(3))
        .step_by(2)
        .map(move |j| [ids[j], ids[j + 1], ids[j + 3], ids[j + 2]])
}

/// Checks a cell's point count and that it only references source points.
fn check_cell(cell: CellRef<'_>, num_points: usize) -> Result<()> {
    cell.validate()?;
    match cell.point_ids.iter().find(|&&id| id as usize >= num_points) {
        Some(&index) => Err(BridgeError::PointIndexOutOfRange {
            index,
            count: num_points,
        }),
        None => Ok(()),
    }
}

fn build<P: PolyDataSource + ?Sized>(source: &P, options: &ConversionOptions) -> Result<Built> {
    let num_points = source.num_points();
    let mut builder = MeshBuilder {
        vertices: (0..num_points).map(|i| source.point(i)).collect(),
        faces: Vec::new(),
        edges: Vec::new(),
        bake: ColorBake::for_source(source),
        smooth: options.smooth_faces,
        report: ConversionReport {
            points: num_points,
            ..ConversionReport::default()
        },
    };

    let num_cells = source.num_cells();
    let mut index = 0;
    while index < num_cells {
        let Some(cell) = source.cell(index) else {
            builder.report.ignored_cells += 1;
            index += 1;
            continue;
        };
        check_cell(cell, num_points)?;

        if options.pair_triangles_to_quads && cell.kind == CellKind::Triangle {
            let next = if index + 1 < num_cells {
                source.cell(index + 1)
            } else {
                None
            };
            let quad = next
                .filter(|next| {
                    next.kind == CellKind::Triangle && check_cell(*next, num_points).is_ok()
                })
                .and_then(|next| pair_triangles(cell.point_ids, next.point_ids));
            if let Some(quad) = quad {
                builder.add_face(&quad)?;
                index += 2;
                continue;
            }
        }

        builder.add_cell(cell, options.pair_triangles_to_quads)?;
        index += 1;
    }

    // Every vertex, centroids included, has its color by now.
    let corner_colors = match &builder.bake {
        Some(bake) => Some(bake.corner_layer(&builder.faces)?),
        None => None,
    };
    builder.report.colors_baked = corner_colors.is_some();

    Ok(Built {
        vertices: builder.vertices,
        faces: builder.faces,
        edges: builder.edges,
        corner_colors,
        report: builder.report,
    })
}

fn write<M: MeshSink + ?Sized>(
    built: Built,
    mesh: &mut M,
    previous_materials: Vec<Material>,
) -> Result<ConversionReport> {
    let Built {
        vertices,
        faces,
        edges,
        corner_colors,
        report,
    } = built;

    mesh.set_vertices(vertices);
    mesh.set_edges(edges);
    mesh.set_faces(faces);

    if mesh.materials().is_empty() {
        if previous_materials.is_empty() {
            mesh.set_materials(vec![Material {
                vertex_color_paint: report.colors_baked,
                ..Material::default()
            }]);
        } else {
            mesh.set_materials(previous_materials);
        }
    }

    if let Some(colors) = corner_colors {
        mesh.set_corner_colors(colors)?;
    }

    log::debug!(
        "polydata to mesh: {} vertices ({} centroids), {} faces, {} edges, {} cells ignored, colors baked: {}",
        report.points + report.centroids,
        report.centroids,
        report.faces,
        report.edges,
        report.ignored_cells,
        report.colors_baked
    );

    Ok(report)
}
