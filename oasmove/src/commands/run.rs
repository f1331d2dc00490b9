use std::process::{Command, ExitStatus};

use clap::Args;
use eyre::{Result, WrapErr};
use tracing::debug;

use super::relocate::RelocateArgs;

#[derive(Args)]
pub struct RunCommand {
    #[command(flatten)]
    pub relocate: RelocateArgs,

    /// Build step to run once the document is in place
    #[arg(
        last = true,
        required = true,
        allow_hyphen_values = true,
        value_name = "STEP"
    )]
    pub step: Vec<String>,
}

impl RunCommand {
    pub fn run(&self) -> Result<()> {
        let status = self.relocate_then_step()?;
        std::process::exit(status.code().unwrap_or(1));
    }

    /// Relocate, then run the build step. Under on_failure = "fail" the step
    /// never starts.
    fn relocate_then_step(&self) -> Result<ExitStatus> {
        self.relocate.relocate()?;
        run_step(&self.step)
    }
}

/// Run the build step to completion.
fn run_step(step: &[String]) -> Result<ExitStatus> {
    let (program, args) = step
        .split_first()
        .ok_or_else(|| eyre::eyre!("No build step given"))?;
    debug!(program = %program, ?args, "running build step");

    Command::new(program)
        .args(args)
        .status()
        .wrap_err_with(|| format!("Failed to run {program}"))
}
