use clap::Parser;
use std::path::PathBuf;

use crate::config::LogFormat;

#[derive(Parser, Debug)]
#[command(name = "schema-export")]
#[command(about = "Serve database schema documents as browser downloads")]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to .schema-export.toml when present)
    #[arg(long, env = "SCHEMA_EXPORT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Address to listen on
    #[arg(long, env = "SCHEMA_EXPORT_LISTEN")]
    pub listen: Option<String>,

    /// Directory holding pre-rendered <db>.<ext> schema documents
    #[arg(long, env = "SCHEMA_EXPORT_ARTIFACT_DIR")]
    pub artifact_dir: Option<PathBuf>,

    /// Base URL for documentation links in error messages
    #[arg(long, env = "SCHEMA_EXPORT_DOCS_URL")]
    pub docs_base_url: Option<String>,

    /// Log output format
    #[arg(long, value_enum, env = "SCHEMA_EXPORT_LOG_FORMAT")]
    pub log_format: Option<LogFormat>,
}
