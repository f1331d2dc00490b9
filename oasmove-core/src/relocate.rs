//! Moving the generated OpenAPI document into a resource directory.

use std::{
    io,
    path::{Path, PathBuf},
};

use indexmap::IndexSet;

use crate::{
    fs::{Filesystem, OsFilesystem},
    outcome::{Cleanup, RelocateError, Relocated, Result},
};

/// Location of the generated document below a compiled-output directory.
pub const GENERATED_ARTIFACT: &str = "meta/openapi.json";

/// Default destination below the resource root.
pub const DEFAULT_DESTINATION: &str = "public/openapi.json";

/// Return the first set entry among the candidate resource roots.
///
/// The chosen root is not checked for existence.
pub fn find_resource_root<I, P>(roots: I) -> Option<PathBuf>
where
    I: IntoIterator<Item = Option<P>>,
    P: AsRef<Path>,
{
    roots
        .into_iter()
        .flatten()
        .map(|root| root.as_ref().to_path_buf())
        .next()
}

/// Return the first `<dir>/meta/openapi.json` that is a regular file.
///
/// Candidates are probed in the set's iteration order.
pub fn find_generated_artifact(
    fs: &dyn Filesystem,
    sources: &IndexSet<PathBuf>,
) -> Option<PathBuf> {
    sources
        .iter()
        .map(|dir| dir.join(GENERATED_ARTIFACT))
        .find(|candidate| fs.is_file(candidate))
}

/// A resolved relocation that has not touched the filesystem yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelocationPlan {
    /// The selected resource root.
    pub root: PathBuf,
    /// The generated document to move.
    pub artifact: PathBuf,
    /// `root` joined with the configured destination.
    pub target: PathBuf,
}

/// Resolve the root, the artifact and the target path without mutating anything.
pub fn plan(
    fs: &dyn Filesystem,
    sources: &IndexSet<PathBuf>,
    roots: &[Option<PathBuf>],
    destination: &Path,
) -> Result<RelocationPlan> {
    let root = find_resource_root(roots.iter().map(Option::as_ref))
        .ok_or(RelocateError::ConfigurationMissing)?;

    let artifact =
        find_generated_artifact(fs, sources).ok_or_else(|| RelocateError::ArtifactMissing {
            searched: sources
                .iter()
                .map(|dir| dir.join(GENERATED_ARTIFACT))
                .collect(),
        })?;

    let target = root.join(destination);
    if same_location(fs, &artifact, &target) {
        return Err(RelocateError::TargetIsArtifact { path: target });
    }

    Ok(RelocationPlan {
        root,
        artifact,
        target,
    })
}

/// Whether `target` names the same file as the existing `artifact`.
///
/// A target that does not exist yet is compared through its canonical parent.
fn same_location(fs: &dyn Filesystem, artifact: &Path, target: &Path) -> bool {
    if artifact == target {
        return true;
    }
    let Ok(artifact) = fs.canonicalize(artifact) else {
        return false;
    };
    let resolved = fs.canonicalize(target).or_else(|_| -> io::Result<PathBuf> {
        let name = target.file_name().ok_or(io::ErrorKind::InvalidInput)?;
        let dir = target
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        fs.canonicalize(dir).map(|dir| dir.join(name))
    });
    resolved.is_ok_and(|target| target == artifact)
}

impl RelocationPlan {
    /// Directory the target is written into.
    pub fn target_dir(&self) -> &Path {
        self.target.parent().unwrap_or(self.root.as_path())
    }

    /// Create the target directory, copy the artifact over the target and
    /// delete the artifact.
    pub fn execute(&self, fs: &dyn Filesystem) -> Result<Relocated> {
        let dir = self.target_dir();
        let created_dir = !fs.is_dir(dir);
        if created_dir {
            fs.create_dir_all(dir)
                .map_err(|source| RelocateError::DirectoryCreationFailed {
                    path: dir.to_path_buf(),
                    source,
                })?;
        }

        let bytes = fs
            .copy(&self.artifact, &self.target)
            .map_err(|source| RelocateError::CopyFailed {
                from: self.artifact.clone(),
                to: self.target.clone(),
                source,
            })?;

        let cleanup = match fs.remove_file(&self.artifact) {
            Ok(()) => Cleanup::Deleted,
            Err(source) => Cleanup::DeleteFailed { source },
        };

        Ok(Relocated {
            artifact: self.artifact.clone(),
            target: self.target.clone(),
            bytes,
            created_dir,
            cleanup,
        })
    }
}

/// Relocate the generated document on the local filesystem.
///
/// See [`relocate_with`].
pub fn relocate(
    sources: &IndexSet<PathBuf>,
    roots: &[Option<PathBuf>],
    destination: &Path,
) -> Result<Relocated> {
    relocate_with(&OsFilesystem, sources, roots, destination)
}

/// Find the generated document among `sources`, pick the first root in
/// `roots`, and move the document to `<root>/<destination>`.
///
/// Stops without mutating anything when no root is set or no document is
/// found. A failure to delete the original after copying is reported on the
/// returned [`Relocated`] rather than as an error.
pub fn relocate_with(
    fs: &dyn Filesystem,
    sources: &IndexSet<PathBuf>,
    roots: &[Option<PathBuf>],
    destination: &Path,
) -> Result<Relocated> {
    plan(fs, sources, roots, destination)?.execute(fs)
}
