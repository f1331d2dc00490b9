//! Relocate command report data structures.

use std::path::PathBuf;

use eyre::Result;
use oasmove_core::{Cleanup, FailurePolicy, RelocateError, Relocated, RelocationPlan, Severity};

use super::output::{Output, Report};

/// How the relocation ended.
#[derive(Debug)]
pub enum RelocateOutcome {
    /// Dry run: the document would be moved as planned.
    Planned(RelocationPlan),
    /// The document was copied into place.
    Relocated(Relocated),
    /// The relocation stopped early.
    Failed(RelocateError),
}

/// Report data from a relocation.
#[derive(Debug)]
pub struct RelocateReport {
    /// Configured destination below the resource root.
    pub destination: PathBuf,
    /// What a failure means for the build.
    pub policy: FailurePolicy,
    pub outcome: RelocateOutcome,
}

impl RelocateReport {
    /// Most severe level this report renders at.
    pub fn severity(&self) -> Severity {
        match &self.outcome {
            RelocateOutcome::Planned(_) => Severity::Info,
            RelocateOutcome::Relocated(relocated) if relocated.source_retained() => {
                Severity::Warning
            }
            RelocateOutcome::Relocated(_) => Severity::Info,
            RelocateOutcome::Failed(err) => err.severity(),
        }
    }

    /// The error that stopped the relocation, if any.
    pub fn failure(&self) -> Option<&RelocateError> {
        match &self.outcome {
            RelocateOutcome::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Apply the failure policy: a failed relocation is an error only when the
    /// policy is `fail`.
    pub fn enforce(&self) -> Result<()> {
        match self.failure() {
            Some(err) if self.policy.is_fatal() => {
                Err(eyre::eyre!("openapi relocation failed: {}", describe(err)))
            }
            _ => Ok(()),
        }
    }
}

/// Error message with its underlying cause, if any.
fn describe(err: &RelocateError) -> String {
    match std::error::Error::source(err) {
        Some(cause) => format!("{err}: {cause}"),
        None => err.to_string(),
    }
}

impl Report for RelocateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.outcome {
            RelocateOutcome::Planned(plan) => {
                out.info(&format!(
                    "would move {} to {}",
                    plan.artifact.display(),
                    plan.target.display()
                ));
            }
            RelocateOutcome::Relocated(relocated) => {
                if let Some(dir) = relocated.target.parent().filter(|_| relocated.created_dir) {
                    out.detail(&format!("created resource directory {}", dir.display()));
                }
                out.info(&format!(
                    "moved openapi file to resources: {}",
                    self.destination.display()
                ));
                out.detail(&format!(
                    "{} -> {} ({} bytes)",
                    relocated.artifact.display(),
                    relocated.target.display(),
                    relocated.bytes
                ));
                if let Cleanup::DeleteFailed { source } = &relocated.cleanup {
                    out.warning(&format!(
                        "unable to delete {}: {}",
                        relocated.artifact.display(),
                        source
                    ));
                }
            }
            RelocateOutcome::Failed(err) => {
                match err {
                    RelocateError::ConfigurationMissing => {
                        out.warning(
                            "unable to find a resource directory; set [source_set].resource_dirs",
                        );
                    }
                    RelocateError::ArtifactMissing { searched } => {
                        out.warning("unable to find the generated openapi.json file");
                        for path in searched {
                            out.detail(&format!("not found: {}", path.display()));
                        }
                    }
                    RelocateError::TargetIsArtifact { .. }
                    | RelocateError::DirectoryCreationFailed { .. }
                    | RelocateError::CopyFailed { .. } => {
                        out.error(&describe(err));
                    }
                }
                if !self.policy.is_fatal() {
                    out.detail("continuing the build (on_failure = \"warn\")");
                }
            }
        }
    }
}
