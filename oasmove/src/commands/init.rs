use std::path::{Path, PathBuf};

use clap::Args;
use eyre::{Context, Result, bail};
use oasmove_manifest::{DEFAULT_MANIFEST, Manifest};

const HEADER: &str = "\
# Relocates <output dir>/meta/openapi.json to <resource dir>/<destination>.
# Relative directories resolve against this file's directory.
";

#[derive(Args)]
pub struct InitCommand {
    /// Directory to write oasmove.toml into
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Overwrite an existing oasmove.toml
    #[arg(long)]
    pub force: bool,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let path = write_default_config(&self.output, self.force)?;

        println!("Created {}", path.display());
        println!();
        println!("Next steps:");
        println!("  oasmove check");
        println!("  oasmove run -- ./gradlew test");
        Ok(())
    }
}

/// Write the default manifest into `dir`, creating `dir` if needed.
fn write_default_config(dir: &Path, force: bool) -> Result<PathBuf> {
    let path = dir.join(DEFAULT_MANIFEST);
    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    std::fs::create_dir_all(dir)
        .wrap_err_with(|| format!("Failed to create {}", dir.display()))?;
    let content = format!("{HEADER}\n{}", Manifest::default().to_toml());
    std::fs::write(&path, content)
        .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_init_writes_parseable_defaults() {
        let temp = TempDir::new().unwrap();

        let path = write_default_config(temp.path(), false).unwrap();

        let manifest = Manifest::from_file(&path).unwrap();
        assert_eq!(manifest, Manifest::default());
        assert!(fs::read_to_string(&path).unwrap().starts_with("# Relocates"));
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(DEFAULT_MANIFEST);
        fs::write(&path, "[openapi]\n").unwrap();

        let err = write_default_config(temp.path(), false).unwrap_err();

        assert!(err.to_string().contains("already exists"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "[openapi]\n");
    }

    #[test]
    fn test_init_force_overwrites() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(DEFAULT_MANIFEST);
        fs::write(&path, "garbage").unwrap();

        write_default_config(temp.path(), true).unwrap();

        assert!(Manifest::from_file(&path).is_ok());
    }

    #[test]
    fn test_init_creates_output_dir() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("service");

        let path = write_default_config(&dir, false).unwrap();

        assert!(path.is_file());
    }
}
