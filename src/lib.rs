// src/lib.rs
pub mod cli;
pub mod config;
mod docs;
mod download;
mod export;
mod handler;
mod identifier;
pub mod native;
mod request;
mod response;

// Re-export tracing for use in other modules
pub use tracing;

pub use docs::{DocLinks, DEFAULT_DOCS_BASE_URL};
pub use download::{download_headers, sanitize_filename, DownloadHeaders, DownloadResponse};
pub use export::{
    ArtifactExporter, ExportError, SchemaExportInfo, SchemaExportService, SchemaPlugin,
};
pub use handler::{HandleOutcome, SchemaExportHandler};
pub use identifier::{DatabaseName, InvalidDatabaseName, MAX_DATABASE_NAME_LENGTH};
pub use native::{build_router, build_router_with_handler};
pub use request::{ExportRequest, FormError, FormRequest};
pub use response::{Message, ResponseRenderer};
