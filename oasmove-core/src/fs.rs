use std::{
    fs, io,
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;

/// Filesystem operations the relocator depends on.
///
/// [`OsFilesystem`] is the real implementation. Other implementations exist
/// so callers can observe or fail individual steps without touching
/// permissions on disk.
pub trait Filesystem {
    /// Whether `path` exists and is a regular file.
    fn is_file(&self, path: &Path) -> bool;

    /// Whether `path` exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Create `path` and every missing ancestor.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Copy `from` onto `to`, replacing any existing file. Returns the number
    /// of bytes copied.
    fn copy(&self, from: &Path, to: &Path) -> io::Result<u64>;

    /// Remove the file at `path`.
    fn remove_file(&self, path: &Path) -> io::Result<()>;

    /// Absolute form of an existing `path` with symlinks resolved.
    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf>;
}

/// The local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsFilesystem;

impl Filesystem for OsFilesystem {
    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    fn copy(&self, from: &Path, to: &Path) -> io::Result<u64> {
        // Stage next to the target so the final rename stays on one device.
        let dir = staging_dir(to);
        let mut staged = NamedTempFile::new_in(&dir)?;
        let mut source = fs::File::open(from)?;
        let bytes = io::copy(&mut source, staged.as_file_mut())?;
        staged.as_file().sync_all()?;
        staged.persist(to).map_err(|e| e.error)?;
        Ok(bytes)
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        fs::remove_file(path)
    }

    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        fs::canonicalize(path)
    }
}

fn staging_dir(target: &Path) -> PathBuf {
    match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_copy_creates_target() {
        let temp = TempDir::new().unwrap();
        let from = temp.path().join("from.json");
        let to = temp.path().join("to.json");
        fs::write(&from, "{}").unwrap();

        let bytes = OsFilesystem.copy(&from, &to).unwrap();

        assert_eq!(bytes, 2);
        assert_eq!(fs::read_to_string(&to).unwrap(), "{}");
        assert!(from.exists());
    }

    #[test]
    fn test_copy_replaces_existing_target() {
        let temp = TempDir::new().unwrap();
        let from = temp.path().join("from.json");
        let to = temp.path().join("to.json");
        fs::write(&from, "short").unwrap();
        fs::write(&to, "a much longer previous document").unwrap();

        OsFilesystem.copy(&from, &to).unwrap();

        assert_eq!(fs::read_to_string(&to).unwrap(), "short");
    }

    #[test]
    fn test_copy_missing_source_leaves_no_staging_file() {
        let temp = TempDir::new().unwrap();
        let from = temp.path().join("missing.json");
        let to = temp.path().join("to.json");

        let err = OsFilesystem.copy(&from, &to).unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert!(!to.exists());
        assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_copy_into_missing_directory_fails() {
        let temp = TempDir::new().unwrap();
        let from = temp.path().join("from.json");
        let to = temp.path().join("absent").join("to.json");
        fs::write(&from, "{}").unwrap();

        assert!(OsFilesystem.copy(&from, &to).is_err());
        assert!(!to.exists());
    }

    #[test]
    fn test_is_file_and_is_dir() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("file");
        fs::write(&file, "").unwrap();

        assert!(OsFilesystem.is_file(&file));
        assert!(!OsFilesystem.is_dir(&file));
        assert!(OsFilesystem.is_dir(temp.path()));
        assert!(!OsFilesystem.is_file(temp.path()));
    }
}
