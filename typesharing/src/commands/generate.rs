use std::path::{Path, PathBuf};

use clap::Args;
use eyre::Result;
use tracing::debug;
use typesharing_schema::SchemaFile;

use super::{OrReport, exit_on_failures};
use crate::{
    config::Config,
    inputs::{ensure_distinct_base_names, schema_files},
    language::{Target, dedup_targets},
    ops::{self, GenerateOptions},
    reports::{Output, Report, TerminalOutput, count},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Schema file, or a directory of schema files
    pub input: PathBuf,

    /// Output directory (defaults to the configured one, then the current directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Target to generate; repeat for several (defaults to every target)
    #[arg(short = 't', long = "target", value_enum)]
    pub targets: Vec<Target>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self, config_path: Option<&Path>) -> Result<()> {
        let config = Config::load(config_path)?;
        let output_dir = self.output_dir(&config);
        let targets = self.targets(&config);
        debug!(output = %output_dir.display(), ?targets, "resolved generate options");

        let opts = GenerateOptions {
            output_dir: &output_dir,
            targets: &targets,
            dry_run: self.dry_run,
        };

        let inputs = schema_files(&self.input)?;
        ensure_distinct_base_names(&inputs)?;
        let mut out = TerminalOutput::new();
        let mut failed = 0;
        let mut file_count = 0;

        // Every schema is an independent unit: one failure does not stop the rest
        for path in &inputs {
            let Some(file) = SchemaFile::open(path).or_report() else {
                failed += 1;
                continue;
            };
            let report = ops::generate(&file, &opts)?;
            file_count += report.file_count();
            report.render(&mut out);
        }

        if self.dry_run {
            out.divider("Summary");
            out.preformatted(&format!("{} would be generated", count(file_count, "file")));
        } else if inputs.len() > failed {
            out.newline();
            out.preformatted(&format!(
                "Generated {} from {}",
                count(file_count, "file"),
                count(inputs.len() - failed, "schema")
            ));
        }

        exit_on_failures(failed, inputs.len());
        Ok(())
    }

    /// Command line, then configuration, then the working directory.
    fn output_dir(&self, config: &Config) -> PathBuf {
        self.output
            .clone()
            .or_else(|| config.generate.output.clone())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Command line, then configuration, then every target.
    fn targets(&self, config: &Config) -> Vec<Target> {
        if !self.targets.is_empty() {
            dedup_targets(&self.targets)
        } else if let Some(targets) = config.generate.targets.as_ref().filter(|t| !t.is_empty()) {
            dedup_targets(targets)
        } else {
            Target::ALL.to_vec()
        }
    }
}
