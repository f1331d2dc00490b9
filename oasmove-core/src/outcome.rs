use std::{io, path::PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result of a relocation.
pub type Result<T> = std::result::Result<T, RelocateError>;

/// A relocation that copied the artifact into place.
#[derive(Debug)]
pub struct Relocated {
    /// The generated artifact that was copied.
    pub artifact: PathBuf,
    /// Where the artifact now lives.
    pub target: PathBuf,
    /// Number of bytes written to the target.
    pub bytes: u64,
    /// Whether the destination directory had to be created.
    pub created_dir: bool,
    /// What happened to the original artifact after the copy.
    pub cleanup: Cleanup,
}

impl Relocated {
    /// Whether the original artifact was left behind.
    pub fn source_retained(&self) -> bool {
        matches!(self.cleanup, Cleanup::DeleteFailed { .. })
    }
}

/// Removal of the original artifact after a successful copy.
#[derive(Debug)]
pub enum Cleanup {
    /// The artifact was deleted.
    Deleted,
    /// The artifact could not be deleted. The copy is still in place.
    DeleteFailed { source: io::Error },
}

/// A relocation that stopped before the artifact was in place.
#[derive(Debug, Error)]
pub enum RelocateError {
    #[error("no resource directory is configured")]
    ConfigurationMissing,

    #[error("generated openapi document not found (searched {} location(s))", searched.len())]
    ArtifactMissing { searched: Vec<PathBuf> },

    #[error("failed to create resource directory '{}'", path.display())]
    DirectoryCreationFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("destination '{}' is the generated document itself", path.display())]
    TargetIsArtifact { path: PathBuf },

    #[error("failed to copy '{}' to '{}'", from.display(), to.display())]
    CopyFailed {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl RelocateError {
    /// Log level this failure is reported at.
    pub fn severity(&self) -> Severity {
        match self {
            Self::ConfigurationMissing | Self::ArtifactMissing { .. } => Severity::Warning,
            Self::TargetIsArtifact { .. }
            | Self::DirectoryCreationFailed { .. }
            | Self::CopyFailed { .. } => Severity::Error,
        }
    }
}

/// How loudly an outcome is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// What a failed relocation means for the enclosing build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Report the failure and let the build continue.
    #[default]
    Warn,
    /// Fail the build.
    Fail,
}

impl FailurePolicy {
    /// Whether a relocation error should stop the build.
    pub fn is_fatal(self) -> bool {
        matches!(self, Self::Fail)
    }
}

impl std::fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Warn => write!(f, "warn"),
            Self::Fail => write!(f, "fail"),
        }
    }
}
