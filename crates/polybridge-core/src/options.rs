//! Configuration options for the converters.
//!
//! Options are plain values passed into every conversion call. Both option
//! types deserialize from JSON with missing fields falling back to defaults.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Options for converting polydata into a mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionOptions {
    /// Merge consecutive triangle cells sharing an edge into quad faces,
    /// and read even-length triangle strips as quads.
    pub pair_triangles_to_quads: bool,

    /// Mark every emitted face as smooth shaded. Faces are flat otherwise.
    pub smooth_faces: bool,
}

impl ConversionOptions {
    /// Creates options with every feature disabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether adjacent triangles are paired into quads.
    pub fn with_pair_triangles_to_quads(mut self, enabled: bool) -> Self {
        self.pair_triangles_to_quads = enabled;
        self
    }

    /// Sets whether emitted faces are smooth shaded.
    pub fn with_smooth_faces(mut self, enabled: bool) -> Self {
        self.smooth_faces = enabled;
        self
    }

    /// Parses options from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads options from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        load_json(path.as_ref())
    }
}

/// What to do with mesh faces that have more than four vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FacePolicy {
    /// Drop the face.
    Skip,
    /// Emit the face as a single polygon cell.
    #[default]
    Polygon,
}

/// Options for converting a mesh into polydata.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    /// Handling of faces with five or more vertices.
    pub face_policy: FacePolicy,

    /// UV layer to export as texture coordinates. The mesh's active layer is
    /// used when this is `None` or names a layer the mesh does not have.
    pub uv_layer: Option<String>,
}

impl ExportOptions {
    /// Creates default export options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the face policy.
    pub fn with_face_policy(mut self, policy: FacePolicy) -> Self {
        self.face_policy = policy;
        self
    }

    /// Sets the preferred UV layer.
    pub fn with_uv_layer(mut self, name: impl Into<String>) -> Self {
        self.uv_layer = Some(name.into());
        self
    }

    /// Parses options from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads options from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        load_json(path.as_ref())
    }
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = std::fs::read_to_string(path)?;
    log::debug!("loaded options from {}", path.display());
    Ok(serde_json::from_str(&text)?)
}
