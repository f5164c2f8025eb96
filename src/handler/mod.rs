use tracing::{debug, info, warn, Span};

use crate::docs::DocLinks;
use crate::download::DownloadResponse;
use crate::export::SchemaExportService;
use crate::request::{ExportRequest, FormRequest};
use crate::response::{Message, ResponseRenderer};

/// What the framework should send after the handler ran.
#[derive(Debug)]
pub enum HandleOutcome {
    /// Request handled; errors (if any) are in the `ResponseRenderer`.
    NoContent,
    Download(DownloadResponse),
}

/// Turns a schema export form submission into a file download.
pub struct SchemaExportHandler<E> {
    export: E,
    docs: DocLinks,
}

impl<E: SchemaExportService> SchemaExportHandler<E> {
    pub fn new(export: E, docs: DocLinks) -> Self {
        Self { export, docs }
    }

    pub fn export_service(&self) -> &E {
        &self.export
    }

    #[tracing::instrument(
        name = "schema_export",
        skip(self, request, response),
        fields(
            db = tracing::field::Empty,
            export_type = tracing::field::Empty,
            bytes = tracing::field::Empty,
        )
    )]
    pub fn handle(&self, request: &FormRequest, response: &mut ResponseRenderer) -> HandleOutcome {
        let (db, export_type) = match ExportRequest::from_form(request) {
            ExportRequest {
                database_name: Some(db),
                export_type: Some(export_type),
            } => (db, export_type),
            incomplete => {
                let missing = incomplete.missing_parameter().unwrap_or("db");
                warn!(parameter = missing, "schema export request missing parameter");
                let text = format!(
                    "Missing parameter: {}{}[br]",
                    missing,
                    self.docs
                        .show_documentation("faq", "faqmissingparameters", true)
                );
                self.fail(response, Message::error(text));
                return HandleOutcome::NoContent;
            }
        };

        Span::current().record("db", db.as_str());
        Span::current().record("export_type", export_type.as_str());

        let info = match self.export.export_schema_info(&db, &export_type) {
            Ok(info) => info,
            Err(e) => {
                warn!(error = %e, "schema export failed");
                self.fail(response, Message::raw_error(e.message));
                return HandleOutcome::NoContent;
            }
        };

        debug!(
            file_name = %info.file_name,
            media_type = %info.media_type,
            "schema export produced document"
        );

        let download =
            DownloadResponse::attachment(&info.file_name, &info.media_type, info.file_data);
        let bytes = download.body.len();
        Span::current().record("bytes", bytes);
        info!(bytes, "schema export download ready");

        HandleOutcome::Download(download)
    }

    fn fail(&self, response: &mut ResponseRenderer, message: Message) {
        response.set_request_status(false);
        response.add_html(message.display(&self.docs));
    }
}
