//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod check;
mod output;
mod relocate;

pub use check::CheckReport;
#[cfg(test)]
pub use output::RecordingOutput;
pub use output::{LogOutput, Report, TerminalOutput};
pub use relocate::{RelocateOutcome, RelocateReport};
