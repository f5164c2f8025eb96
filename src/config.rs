use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::docs::DEFAULT_DOCS_BASE_URL;

pub const CONFIG_FILENAME: &str = ".schema-export.toml";

pub const DEFAULT_LISTEN: &str = "127.0.0.1:8080";
pub const DEFAULT_ARTIFACT_DIR: &str = "./schemas";

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub listen: String,
    pub artifact_dir: PathBuf,
    pub docs_base_url: String,
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen: DEFAULT_LISTEN.to_string(),
            artifact_dir: PathBuf::from(DEFAULT_ARTIFACT_DIR),
            docs_base_url: DEFAULT_DOCS_BASE_URL.to_string(),
            log_format: LogFormat::Text,
        }
    }
}

impl Config {
    /// Load `.schema-export.toml` from the working directory, or defaults if absent.
    pub fn load() -> Result<Self> {
        if Path::new(CONFIG_FILENAME).exists() {
            load_config_from_path(CONFIG_FILENAME)
        } else {
            Ok(Self::default())
        }
    }

    /// Resolve the effective config: file first, then command-line/env overrides.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let config = match &cli.config {
            Some(path) => load_config_from_path(path)?,
            None => Self::load()?,
        };
        Ok(config.with_overrides(cli))
    }

    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(listen) = &cli.listen {
            self.listen = listen.clone();
        }
        if let Some(dir) = &cli.artifact_dir {
            self.artifact_dir = dir.clone();
        }
        if let Some(url) = &cli.docs_base_url {
            self.docs_base_url = url.clone();
        }
        if let Some(format) = cli.log_format {
            self.log_format = format;
        }
        self
    }
}

pub fn load_config_from_path(path: impl AsRef<Path>) -> Result<Config> {
    let content = std::fs::read_to_string(path.as_ref())
        .with_context(|| format!("Failed to read {}", path.as_ref().display()))?;
    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.as_ref().display()))?;
    Ok(config)
}
