use std::path::PathBuf;

use clap::Args;
use eyre::{Result, bail};
use oasmove_core::{FailurePolicy, OsFilesystem};
use oasmove_manifest::{DEFAULT_MANIFEST, Manifest, ManifestFile, destination_problem};
use tracing::debug;

use super::UnwrapOrExit;
use crate::{
    ops::{self, relocate::RelocateOptions},
    reports::{LogOutput, Report},
};

/// Flags shared by `relocate` and `run`.
#[derive(Args)]
pub struct RelocateArgs {
    /// Path to oasmove.toml (defaults to ./oasmove.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Destination relative to the resource directory
    #[arg(short, long)]
    pub destination: Option<String>,

    /// Compiled-output directory to search (repeatable, replaces the config)
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dirs: Vec<PathBuf>,

    /// Resource directory to relocate into (repeatable, first one is used)
    #[arg(long = "resource-dir", value_name = "DIR")]
    pub resource_dirs: Vec<PathBuf>,

    /// Fail when the document cannot be relocated (on_failure = "fail")
    #[arg(long)]
    pub strict: bool,

    /// Show what would be moved without moving it
    #[arg(long)]
    pub dry_run: bool,
}

impl RelocateArgs {
    /// Load the manifest named by `--config`, or the default one if present.
    fn load(&self) -> oasmove_manifest::Result<ManifestFile> {
        match &self.config {
            Some(path) => ManifestFile::open(path),
            None => ManifestFile::load_or_default(DEFAULT_MANIFEST),
        }
    }

    /// Layer command-line overrides over the resolved manifest.
    fn apply(&self, manifest: &Manifest) -> Result<RelocateOptions> {
        let mut opts = RelocateOptions::from_manifest(manifest);

        if let Some(destination) = &self.destination {
            if let Some(problem) = destination_problem(destination) {
                bail!("invalid --destination '{destination}': {problem}");
            }
            opts.destination = PathBuf::from(destination);
        }
        if !self.output_dirs.is_empty() {
            opts.sources = self.output_dirs.iter().cloned().collect();
        }
        if !self.resource_dirs.is_empty() {
            opts.roots = self.resource_dirs.iter().cloned().map(Some).collect();
        }
        if self.strict {
            opts.policy = FailurePolicy::Fail;
        }
        opts.dry_run = self.dry_run;

        Ok(opts)
    }

    /// Relocate, log the outcome and apply the failure policy.
    pub fn relocate(&self) -> Result<()> {
        let file = self.load().unwrap_or_exit();
        let opts = self.apply(&file.resolved())?;

        let report = ops::relocate(&OsFilesystem, &opts);
        report.render(&mut LogOutput);
        debug!(severity = ?report.severity(), policy = %report.policy, "relocation finished");
        report.enforce()
    }
}

#[derive(Args)]
pub struct RelocateCommand {
    #[command(flatten)]
    pub args: RelocateArgs,
}

impl RelocateCommand {
    pub fn run(&self) -> Result<()> {
        self.args.relocate()
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    fn args() -> RelocateArgs {
        RelocateArgs {
            config: None,
            destination: None,
            output_dirs: vec![],
            resource_dirs: vec![],
            strict: false,
            dry_run: false,
        }
    }

    #[test]
    fn test_no_overrides_keeps_manifest() {
        let manifest = Manifest::default();
        let opts = args().apply(&manifest).unwrap();

        assert_eq!(opts.sources, manifest.source_set.output_dirs);
        assert_eq!(opts.roots, manifest.source_set.resource_dirs);
        assert_eq!(opts.destination, manifest.openapi.destination);
        assert_eq!(opts.policy, FailurePolicy::Warn);
        assert!(!opts.dry_run);
    }

    #[test]
    fn test_overrides_replace_manifest_values() {
        let args = RelocateArgs {
            destination: Some("docs/api.json".to_string()),
            output_dirs: vec![PathBuf::from("target/classes")],
            resource_dirs: vec![PathBuf::from("res")],
            strict: true,
            dry_run: true,
            ..args()
        };

        let opts = args.apply(&Manifest::default()).unwrap();

        assert_eq!(opts.destination, Path::new("docs/api.json"));
        assert_eq!(opts.sources.len(), 1);
        assert!(opts.sources.contains(Path::new("target/classes")));
        assert_eq!(opts.roots, vec![Some(PathBuf::from("res"))]);
        assert_eq!(opts.policy, FailurePolicy::Fail);
        assert!(opts.dry_run);
    }

    #[test]
    fn test_invalid_destination_override() {
        let args = RelocateArgs {
            destination: Some("../escape.json".to_string()),
            ..args()
        };

        let err = args.apply(&Manifest::default()).unwrap_err();
        assert!(err.to_string().contains("invalid --destination"));
    }

    #[test]
    fn test_explicit_missing_config_is_an_error() {
        let args = RelocateArgs {
            config: Some(PathBuf::from("/nonexistent/oasmove.toml")),
            ..args()
        };

        assert!(args.load().is_err());
    }
}
