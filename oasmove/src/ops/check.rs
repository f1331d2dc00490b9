//! Check operation - configuration validation and path resolution.

use oasmove_core::Filesystem;
use oasmove_manifest::ManifestFile;

use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Resolves the manifest against its project root and plans a relocation
/// without touching the filesystem.
pub fn check(fs: &dyn Filesystem, file: &ManifestFile) -> CheckReport {
    let manifest = file.resolved();
    let plan = oasmove_core::plan(
        fs,
        &manifest.source_set.output_dirs,
        &manifest.source_set.resource_dirs,
        &manifest.openapi.destination,
    );

    CheckReport {
        config_path: file.path().to_path_buf(),
        config_exists: file.exists(),
        manifest,
        plan,
    }
}
