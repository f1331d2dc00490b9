//! Relocation of a generated OpenAPI document into a resource directory.
//!
//! The generated document is expected at `meta/openapi.json` below one of
//! the compiled-output directories. [`relocate`] copies it to
//! `<resource root>/<destination>` and deletes the original.

mod fs;
mod outcome;
mod relocate;

pub use fs::{Filesystem, OsFilesystem};
pub use outcome::{Cleanup, FailurePolicy, RelocateError, Relocated, Result, Severity};
pub use relocate::{
    DEFAULT_DESTINATION, GENERATED_ARTIFACT, RelocationPlan, find_generated_artifact,
    find_resource_root, plan, relocate, relocate_with,
};
