//! Export service backed by a directory of pre-rendered schema documents.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use bytes::Bytes;
use tracing::{debug, warn};

use super::{ExportError, SchemaExportInfo, SchemaExportService, SchemaPlugin};
use crate::identifier::DatabaseName;

/// Serves `<root>/<encoded db>.<ext>` for each supported plugin.
///
/// The database name is percent-encoded (`urlencoding::encode`), so `my shop` lives in
/// `my%20shop.pdf` and never collides with `my_shop.pdf`.
#[derive(Debug, Clone)]
pub struct ArtifactExporter {
    root: PathBuf,
}

impl ArtifactExporter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// On-disk location of a database's document. Percent-encoding keeps distinct
    /// names distinct and `/` out of the file name, so the path is a single component
    /// under `root`.
    pub fn artifact_path(&self, db: &DatabaseName, plugin: SchemaPlugin) -> PathBuf {
        self.root.join(format!(
            "{}.{}",
            urlencoding::encode(db.as_str()),
            plugin.extension()
        ))
    }
}

impl SchemaExportService for ArtifactExporter {
    fn export_schema_info(
        &self,
        db: &DatabaseName,
        export_type: &str,
    ) -> Result<SchemaExportInfo, ExportError> {
        let plugin = SchemaPlugin::from_export_type(export_type).ok_or_else(|| {
            warn!(export_type, "unknown schema export type");
            ExportError::bad_type()
        })?;

        let path = self.artifact_path(db, plugin);
        debug!(path = %path.display(), "reading schema artifact");

        let data = std::fs::read(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ExportError::new(format!(
                "No {} schema available for database {}",
                plugin.label(),
                db
            )),
            _ => {
                warn!(path = %path.display(), error = %e, "failed to read schema artifact");
                ExportError::new(e.to_string())
            }
        })?;

        Ok(SchemaExportInfo {
            file_name: format!("{}.{}", db, plugin.extension()),
            media_type: plugin.media_type().to_string(),
            file_data: Bytes::from(data),
        })
    }
}
