// src/export/mod.rs
mod artifacts;
mod plugin;

pub use artifacts::ArtifactExporter;
pub use plugin::SchemaPlugin;

use bytes::Bytes;

use crate::identifier::DatabaseName;

/// Document produced by a schema export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaExportInfo {
    pub file_name: String,
    pub media_type: String,
    pub file_data: Bytes,
}

/// Export failure carrying a message that is shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportError {
    pub message: String,
}

impl ExportError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
        }
    }

    /// The requested `export_type` has no matching plugin.
    pub fn bad_type() -> Self {
        Self::new("Bad type!")
    }
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ExportError {}

/// Trait for producing schema documents (abstracts the export engine)
pub trait SchemaExportService: Send + Sync {
    fn export_schema_info(
        &self,
        db: &DatabaseName,
        export_type: &str,
    ) -> Result<SchemaExportInfo, ExportError>;
}
