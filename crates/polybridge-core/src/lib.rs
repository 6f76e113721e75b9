//! Core data model for polybridge.
//!
//! This crate provides the types shared by both conversion directions:
//! - [`Mesh`] - the authoring tool's editable mesh (vertices, edges, faces,
//!   per-corner colors, UV layers, materials)
//! - [`PolyData`] and [`PolyDataMapper`] - the visualization side (points,
//!   typed cells, point scalars, lookup table)
//! - [`MeshSource`], [`MeshSink`] and [`PolyDataSource`] capability traits
//! - Lookup tables, color maps, conversion options and errors

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
// Point ids are u32 and colors are quantized floats
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

pub mod access;
pub mod cell;
pub mod color_maps;
pub mod error;
pub mod lookup_table;
pub mod mesh;
pub mod options;
pub mod polydata;

pub use access::{MeshSink, MeshSource, PolyDataSource};
pub use cell::{Cell, CellBucket, CellKind, CellRef};
pub use color_maps::{ColorMap, ColorMapRegistry};
pub use error::{BridgeError, Result};
pub use lookup_table::{ColorLookupTable, LookupTable, Rgba};
pub use mesh::{Face, Material, Mesh, UvLayer};
pub use options::{ConversionOptions, ExportOptions, FacePolicy};
pub use polydata::{PolyData, PolyDataMapper};

// Re-export glam types for convenience
pub use glam::{Vec2, Vec3};
