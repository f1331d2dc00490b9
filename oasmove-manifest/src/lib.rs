//! Parsing and validation of `oasmove.toml`.
//!
//! ```toml
//! [openapi]
//! destination = "public/openapi.json"
//! on_failure = "warn"
//!
//! [source_set]
//! output_dirs = ["build/classes/java/main", "build/classes/kotlin/main"]
//! resource_dirs = ["src/main/resources"]
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;
mod serialize;

pub use error::{Error, Result, SourceContext};
pub use manifest::{
    DEFAULT_MANIFEST, DEFAULT_OUTPUT_DIRS, DEFAULT_RESOURCE_DIRS, Manifest, ManifestFile,
    OpenApiConfig, SourceSetConfig, destination_problem, parse_manifest,
};
pub use serialize::{SerializableManifest, SerializableOpenApi, SerializableSourceSet};
