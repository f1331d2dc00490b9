//! Manifest types and parsing for oasmove.toml files.

mod file;
mod parse;
mod validate;

use std::path::{Path, PathBuf};

use indexmap::IndexSet;
use oasmove_core::{DEFAULT_DESTINATION, FailurePolicy};

pub use file::{DEFAULT_MANIFEST, ManifestFile};
pub use parse::parse_manifest;
pub use validate::destination_problem;

/// Class output directories of a conventional main source set.
pub const DEFAULT_OUTPUT_DIRS: &[&str] = &["build/classes/java/main", "build/classes/kotlin/main"];

/// Resource directory of a conventional main source set.
pub const DEFAULT_RESOURCE_DIRS: &[&str] = &["src/main/resources"];

/// Root manifest for oasmove.toml
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    /// Where the document goes and what a failure means
    pub openapi: OpenApiConfig,

    /// Directories searched for the document and for the resource root
    pub source_set: SourceSetConfig,
}

/// The `[openapi]` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenApiConfig {
    /// Path of the relocated document, relative to the resource root
    pub destination: PathBuf,

    /// Whether a failed relocation fails the build
    pub on_failure: FailurePolicy,
}

/// The `[source_set]` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSetConfig {
    /// Compiled-output directories probed for `meta/openapi.json`
    pub output_dirs: IndexSet<PathBuf>,

    /// Candidate resource roots; unset entries are skipped
    pub resource_dirs: Vec<Option<PathBuf>>,
}

impl Default for OpenApiConfig {
    fn default() -> Self {
        Self {
            destination: PathBuf::from(DEFAULT_DESTINATION),
            on_failure: FailurePolicy::default(),
        }
    }
}

impl Default for SourceSetConfig {
    fn default() -> Self {
        Self {
            output_dirs: DEFAULT_OUTPUT_DIRS.iter().map(PathBuf::from).collect(),
            resource_dirs: DEFAULT_RESOURCE_DIRS
                .iter()
                .map(|dir| Some(PathBuf::from(dir)))
                .collect(),
        }
    }
}

impl Manifest {
    /// Resolve relative source-set directories against `base`.
    ///
    /// Absolute directories are kept as they are.
    pub fn rooted_at(mut self, base: &Path) -> Self {
        self.source_set.output_dirs = self
            .source_set
            .output_dirs
            .iter()
            .map(|dir| base.join(dir))
            .collect();
        self.source_set.resource_dirs = self
            .source_set
            .resource_dirs
            .iter()
            .map(|dir| dir.as_ref().map(|dir| base.join(dir)))
            .collect();
        self
    }
}
