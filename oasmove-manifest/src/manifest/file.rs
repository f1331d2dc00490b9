use std::path::{Path, PathBuf};

use super::Manifest;
use crate::Result;

/// Conventional manifest file name.
pub const DEFAULT_MANIFEST: &str = "oasmove.toml";

/// An oasmove.toml on disk together with the project it configures.
#[derive(Debug)]
pub struct ManifestFile {
    path: PathBuf,
    exists: bool,
    manifest: Manifest,
}

impl ManifestFile {
    /// Open and parse an oasmove.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let manifest = Manifest::from_file(&path)?;

        Ok(Self {
            path,
            exists: true,
            manifest,
        })
    }

    /// Open `path`, or use the built-in defaults when it does not exist.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            return Self::open(path);
        }
        Ok(Self {
            path: path.to_path_buf(),
            exists: false,
            manifest: Manifest::default(),
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the manifest was read from disk.
    pub fn exists(&self) -> bool {
        self.exists
    }

    /// Directory the manifest lives in. Relative source-set paths resolve here.
    pub fn project_root(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    /// Get the parsed manifest, paths as written.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Get the manifest with source-set paths resolved against the project root.
    pub fn resolved(&self) -> Manifest {
        self.manifest.clone().rooted_at(self.project_root())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_open_resolves_against_manifest_dir() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(DEFAULT_MANIFEST);
        fs::write(
            &path,
            "[source_set]\noutput_dirs = [\"target/classes\"]\nresource_dirs = [\"res\"]\n",
        )
        .unwrap();

        let file = ManifestFile::open(&path).unwrap();
        let resolved = file.resolved();

        assert!(file.exists());
        assert_eq!(file.project_root(), temp.path());
        assert!(
            resolved
                .source_set
                .output_dirs
                .contains(&temp.path().join("target/classes"))
        );
        assert_eq!(
            resolved.source_set.resource_dirs,
            vec![Some(temp.path().join("res"))]
        );
    }

    #[test]
    fn test_load_or_default_without_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(DEFAULT_MANIFEST);

        let file = ManifestFile::load_or_default(&path).unwrap();

        assert!(!file.exists());
        assert_eq!(file.manifest(), &Manifest::default());
        assert!(!path.exists());
    }

    #[test]
    fn test_load_or_default_still_reports_invalid_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(DEFAULT_MANIFEST);
        fs::write(&path, "[openapi]\ndestination = 3\n").unwrap();

        assert!(ManifestFile::load_or_default(&path).is_err());
    }

    #[test]
    fn test_project_root_of_bare_file_name() {
        let file = ManifestFile::load_or_default("does-not-exist.toml").unwrap();
        assert_eq!(file.project_root(), Path::new("."));
    }
}
