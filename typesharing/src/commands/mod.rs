mod check;
mod generate;

use std::path::PathBuf;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use eyre::Result;
use generate::GenerateCommand;

/// Extension trait for reporting schema errors with pretty formatting
pub(crate) trait OrReport<T> {
    /// Print the diagnostic to stderr and yield `None` on error.
    fn or_report(self) -> Option<T>;
}

impl<T> OrReport<T> for typesharing_schema::Result<T> {
    fn or_report(self) -> Option<T> {
        match self {
            Ok(v) => Some(v),
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                None
            }
        }
    }
}

/// Exit with status 1 when any schema failed.
pub(crate) fn exit_on_failures(failed: usize, total: usize) {
    if failed > 0 {
        eprintln!(
            "error: {} of {} schema{} failed",
            failed,
            total,
            if total == 1 { "" } else { "s" }
        );
        std::process::exit(1);
    }
}

#[derive(Parser)]
#[command(name = "typesharing")]
#[command(version)]
#[command(about = "Compile schemas into Python dataclasses and TypeScript interfaces")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to a typesharing.toml (defaults to ./typesharing.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(self.config.as_deref()),
            Commands::Check(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate type declarations from a schema file or directory
    Generate(GenerateCommand),

    /// Validate schemas without generating code
    Check(CheckCommand),
}
