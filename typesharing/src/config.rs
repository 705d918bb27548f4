//! Project configuration loaded from `typesharing.toml`.

use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use eyre::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use crate::language::Target;

/// Configuration file looked up in the working directory.
pub const CONFIG_FILE: &str = "typesharing.toml";

/// Contents of `typesharing.toml`. Every key is optional.
#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub generate: GenerateConfig,
}

/// The `[generate]` table.
#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerateConfig {
    /// Output directory, relative to the configuration file
    pub output: Option<PathBuf>,
    /// Targets generated when none are given on the command line
    pub targets: Option<Vec<Target>>,
}

impl FromStr for Config {
    type Err = toml::de::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        toml::from_str(s)
    }
}

impl Config {
    /// Load the configuration.
    ///
    /// An explicit path must exist; otherwise `typesharing.toml` in the working
    /// directory is used when present, and the defaults when not.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::open(path),
            None if Path::new(CONFIG_FILE).is_file() => Self::open(Path::new(CONFIG_FILE)),
            None => Ok(Self::default()),
        }
    }

    /// Read and parse a configuration file.
    pub fn open(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read {}", path.display()))?;
        let mut config: Config = content
            .parse()
            .wrap_err_with(|| format!("Invalid configuration in {}", path.display()))?;

        config.generate.output = config.generate.output.map(|output| match path.parent() {
            Some(dir) if output.is_relative() => dir.join(output),
            _ => output,
        });

        debug!(path = %path.display(), ?config, "loaded configuration");
        Ok(config)
    }
}
