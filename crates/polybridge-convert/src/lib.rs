//! Converters between meshes and polydata.
//!
//! This crate provides the two one-way converters:
//! - [`mesh_to_polydata`] - mesh vertices, faces, edges and UVs to points,
//!   cells and texture coordinates
//! - [`polydata_to_mesh`] / [`polydata_into_mesh`] - cells classified by kind
//!   into faces and edges, with optional vertex color baking
//!
//! Both are single pass and keep no state between calls.

// Point ids are u32 and centroids divide by a count
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod bake;
pub mod export;
pub mod import;

pub use bake::ColorBake;
pub use export::mesh_to_polydata;
pub use import::{
    pair_triangles, polydata_into_mesh, polydata_to_mesh, strip_quads, strip_triangles,
    ConversionReport,
};
