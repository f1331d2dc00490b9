mod check;
mod completions;
mod init;
mod relocate;
mod run;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use init::InitCommand;
use relocate::RelocateCommand;
use run::RunCommand;

use crate::logging::setup_logging;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for oasmove_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "oasmove")]
#[command(version)]
#[command(about = "Move the generated OpenAPI document into your resources")]
pub(crate) struct Cli {
    /// Log debug details (OASMOVE_LOG overrides this)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        setup_logging(self.verbose);

        match &self.command {
            Commands::Relocate(cmd) => cmd.run(),
            Commands::Run(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Init(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Move meta/openapi.json from the build output into resources
    Relocate(RelocateCommand),

    /// Relocate, then run a build step (e.g. `oasmove run -- ./gradlew test`)
    Run(RunCommand),

    /// Validate oasmove.toml and show the resolved paths
    Check(CheckCommand),

    /// Write a default oasmove.toml
    Init(InitCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_run_requires_a_build_step() {
        assert!(Cli::try_parse_from(["oasmove", "run"]).is_err());
        assert!(Cli::try_parse_from(["oasmove", "run", "--", "./gradlew", "test"]).is_ok());
    }

    #[test]
    fn test_relocate_accepts_repeated_dirs() {
        let cli = Cli::try_parse_from([
            "oasmove",
            "relocate",
            "--output-dir",
            "a",
            "--output-dir",
            "b",
            "--resource-dir",
            "res",
            "--strict",
        ])
        .unwrap();

        match cli.command {
            Commands::Relocate(cmd) => {
                assert_eq!(cmd.args.output_dirs.len(), 2);
                assert_eq!(cmd.args.resource_dirs.len(), 1);
                assert!(cmd.args.strict);
            }
            _ => panic!("expected relocate"),
        }
    }
}
