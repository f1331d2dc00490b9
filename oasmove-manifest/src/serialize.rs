//! Serialization support for writing oasmove.toml files.
//!
//! This module provides serializable versions of the manifest types that
//! output canonical TOML.

use oasmove_core::FailurePolicy;
use serde::Serialize;

use crate::{Manifest, OpenApiConfig, SourceSetConfig};

/// Serializable manifest for canonical TOML output.
///
/// Fields are ordered: openapi, source_set
#[derive(Debug, Serialize)]
pub struct SerializableManifest {
    pub openapi: SerializableOpenApi,
    pub source_set: SerializableSourceSet,
}

impl From<&Manifest> for SerializableManifest {
    fn from(m: &Manifest) -> Self {
        Self {
            openapi: SerializableOpenApi::from(&m.openapi),
            source_set: SerializableSourceSet::from(&m.source_set),
        }
    }
}

/// Serializable `[openapi]` table.
#[derive(Debug, Serialize)]
pub struct SerializableOpenApi {
    pub destination: String,
    pub on_failure: FailurePolicy,
}

impl From<&OpenApiConfig> for SerializableOpenApi {
    fn from(c: &OpenApiConfig) -> Self {
        Self {
            destination: path_string(&c.destination),
            on_failure: c.on_failure,
        }
    }
}

/// Serializable `[source_set]` table. Unset resource roots become `""`.
#[derive(Debug, Serialize)]
pub struct SerializableSourceSet {
    pub output_dirs: Vec<String>,
    pub resource_dirs: Vec<String>,
}

impl From<&SourceSetConfig> for SerializableSourceSet {
    fn from(c: &SourceSetConfig) -> Self {
        Self {
            output_dirs: c.output_dirs.iter().map(|d| path_string(d)).collect(),
            resource_dirs: c
                .resource_dirs
                .iter()
                .map(|d| d.as_deref().map(path_string).unwrap_or_default())
                .collect(),
        }
    }
}

/// Paths are written with forward slashes so the file is portable.
#[cfg(windows)]
fn path_string(path: &std::path::Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// On Unix a backslash is an ordinary filename character and is kept.
#[cfg(not(windows))]
fn path_string(path: &std::path::Path) -> String {
    path.to_string_lossy().into_owned()
}

impl Manifest {
    /// Render the manifest as TOML.
    pub fn to_toml(&self) -> String {
        // Only strings and string arrays, which toml always accepts.
        toml::to_string(&SerializableManifest::from(self)).unwrap_or_default()
    }
}
