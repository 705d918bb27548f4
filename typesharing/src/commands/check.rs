use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use typesharing_schema::SchemaFile;

use super::{OrReport, exit_on_failures};
use crate::{
    inputs::schema_files,
    ops,
    reports::{Output, Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Schema file, or a directory of schema files
    pub input: PathBuf,

    /// Print the validated schema as JSON instead of a summary
    #[arg(long)]
    pub json: bool,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let inputs = schema_files(&self.input)?;
        let mut out = TerminalOutput::new();
        let mut failed = 0;
        let mut documents = serde_json::Map::new();

        for (i, path) in inputs.iter().enumerate() {
            let Some(file) = SchemaFile::open(path).or_report() else {
                failed += 1;
                continue;
            };

            if self.json {
                let value = serde_json::to_value(file.schema())
                    .wrap_err("Failed to serialize schema")?;
                documents.insert(path.display().to_string(), value);
            } else {
                if i > 0 {
                    out.newline();
                }
                ops::check(&file).render(&mut out);
            }
        }

        if self.json && !documents.is_empty() {
            // A single file prints its schema; a directory prints a map keyed by path
            let value = if self.input.is_file() {
                documents
                    .into_iter()
                    .next()
                    .map(|(_, value)| value)
                    .unwrap_or_default()
            } else {
                serde_json::Value::Object(documents)
            };
            let json =
                serde_json::to_string_pretty(&value).wrap_err("Failed to serialize schema")?;
            out.preformatted(&json);
        }

        exit_on_failures(failed, inputs.len());
        Ok(())
    }
}
