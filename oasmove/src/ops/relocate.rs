//! Relocate operation - move the generated document into resources.

use std::path::PathBuf;

use indexmap::IndexSet;
use oasmove_core::{FailurePolicy, Filesystem};
use oasmove_manifest::Manifest;
use tracing::debug;

use crate::reports::{RelocateOutcome, RelocateReport};

/// Options for the relocate operation.
#[derive(Debug, Clone)]
pub struct RelocateOptions {
    /// Compiled-output directories searched for the generated document.
    pub sources: IndexSet<PathBuf>,
    /// Candidate resource roots.
    pub roots: Vec<Option<PathBuf>>,
    /// Destination below the resource root.
    pub destination: PathBuf,
    /// What a failure means for the build.
    pub policy: FailurePolicy,
    /// Whether to resolve paths without moving anything.
    pub dry_run: bool,
}

impl RelocateOptions {
    /// Options taken straight from a (resolved) manifest.
    pub fn from_manifest(manifest: &Manifest) -> Self {
        Self {
            sources: manifest.source_set.output_dirs.clone(),
            roots: manifest.source_set.resource_dirs.clone(),
            destination: manifest.openapi.destination.clone(),
            policy: manifest.openapi.on_failure,
            dry_run: false,
        }
    }
}

/// Execute the relocate operation.
///
/// Never fails by itself; the outcome, including any failure, is carried on
/// the report. Use [`RelocateReport::enforce`] to apply the failure policy.
pub fn relocate(fs: &dyn Filesystem, opts: &RelocateOptions) -> RelocateReport {
    debug!(
        sources = ?opts.sources,
        roots = ?opts.roots,
        destination = %opts.destination.display(),
        dry_run = opts.dry_run,
        "relocating openapi document"
    );

    let outcome = if opts.dry_run {
        match oasmove_core::plan(fs, &opts.sources, &opts.roots, &opts.destination) {
            Ok(plan) => RelocateOutcome::Planned(plan),
            Err(err) => RelocateOutcome::Failed(err),
        }
    } else {
        match oasmove_core::relocate_with(fs, &opts.sources, &opts.roots, &opts.destination) {
            Ok(relocated) => RelocateOutcome::Relocated(relocated),
            Err(err) => RelocateOutcome::Failed(err),
        }
    };

    RelocateReport {
        destination: opts.destination.clone(),
        policy: opts.policy,
        outcome,
    }
}
