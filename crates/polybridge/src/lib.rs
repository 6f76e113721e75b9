//! polybridge: convert polygon meshes between an editable mesh model and
//! visualization polydata.
//!
//! # Quick Start
//!
//! ```
//! use polybridge::*;
//!
//! fn main() -> Result<()> {
//!     // A single quad with a loose diagonal edge
//!     let mesh = Mesh::from_parts(
//!         vec![
//!             Vec3::new(0.0, 0.0, 0.0),
//!             Vec3::new(1.0, 0.0, 0.0),
//!             Vec3::new(1.0, 1.0, 0.0),
//!             Vec3::new(0.0, 1.0, 0.0),
//!         ],
//!         vec![vec![0, 1, 2, 3]],
//!         vec![[0, 2]],
//!     );
//!
//!     let polydata = mesh_to_polydata(&mesh, &ExportOptions::default())?;
//!     assert_eq!(polydata.polys().len(), 1);
//!     assert_eq!(polydata.lines().len(), 1);
//!
//!     let back = polydata_to_mesh(&polydata, &ConversionOptions::default())?;
//!     assert_eq!(back.vertices(), mesh.vertices());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Vertex colors
//!
//! Polydata carrying point scalars is colored by wrapping it in a
//! [`PolyDataMapper`] with a lookup table. The converter then writes a
//! per-corner color layer onto the mesh and flags its default material to
//! paint with vertex colors.
//!
//! ```
//! use polybridge::*;
//!
//! fn main() -> Result<()> {
//!     let mut polydata = PolyData::new(vec![Vec3::ZERO, Vec3::X, Vec3::Y]);
//!     polydata.insert_cell(CellKind::Triangle, vec![0, 1, 2])?;
//!     polydata.set_scalars(vec![0.0, 0.5, 1.0])?;
//!
//!     let table = ColorLookupTable::builtin("viridis", 0.0, 1.0).expect("built-in map");
//!     let mapper = PolyDataMapper::new(polydata).with_lookup_table(table);
//!
//!     let mesh = polydata_to_mesh(&mapper, &ConversionOptions::default())?;
//!     assert!(mesh.has_vertex_colors());
//!     Ok(())
//! }
//! ```
//!
//! # Host integration
//!
//! Both converters read and write through capability traits, so host object
//! models can be converted without copying into [`Mesh`] or [`PolyData`]:
//!
//! - [`MeshSource`] - read vertices, faces, edges and UV layers
//! - [`MeshSink`] - replace vertices, faces, edges, colors and materials
//! - [`PolyDataSource`] - read points, cells, scalars and the lookup table

mod init;

pub use init::init_logging;

// Re-export core types
pub use polybridge_core::{
    error::{BridgeError, Result},
    Cell, CellBucket, CellKind, CellRef, ColorLookupTable, ColorMap, ColorMapRegistry,
    ConversionOptions, ExportOptions, Face, FacePolicy, LookupTable, Material, Mesh, MeshSink,
    MeshSource, PolyData, PolyDataMapper, PolyDataSource, Rgba, UvLayer, Vec2, Vec3,
};

// Re-export converters
pub use polybridge_convert::{
    mesh_to_polydata, polydata_into_mesh, polydata_to_mesh, ColorBake, ConversionReport,
};
