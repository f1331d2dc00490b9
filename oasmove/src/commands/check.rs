use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use oasmove_core::{OsFilesystem, RelocateError};
use oasmove_manifest::{DEFAULT_MANIFEST, ManifestFile};

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to oasmove.toml (defaults to ./oasmove.toml)
    #[arg(short, long, default_value = DEFAULT_MANIFEST)]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let file = ManifestFile::load_or_default(&self.config).unwrap_or_exit();

        let report = ops::check(&OsFilesystem, &file);
        report.render(&mut TerminalOutput::new());

        if matches!(
            report.plan,
            Err(RelocateError::ConfigurationMissing | RelocateError::TargetIsArtifact { .. })
        ) {
            std::process::exit(1);
        }
        Ok(())
    }
}
