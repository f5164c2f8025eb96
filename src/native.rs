use axum::{
    body::{Body, Bytes as AxumBytes},
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::LogFormat;
use crate::docs::DocLinks;
use crate::download::DownloadResponse;
use crate::export::{ArtifactExporter, SchemaExportService};
use crate::handler::{HandleOutcome, SchemaExportHandler};
use crate::request::FormRequest;
use crate::response::ResponseRenderer;

/// Initialize tracing subscriber.
/// Uses RUST_LOG env var for filtering (defaults to info).
pub fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Text => registry.with(fmt::layer().with_ansi(true)).init(),
        LogFormat::Json => registry.with(fmt::layer().json()).init(),
    }
}

/// Router serving schema documents from `artifact_dir`.
pub fn build_router(artifact_dir: impl Into<PathBuf>, docs: DocLinks) -> Router {
    let handler = SchemaExportHandler::new(ArtifactExporter::new(artifact_dir), docs);
    build_router_with_handler(Arc::new(handler))
}

pub fn build_router_with_handler<E>(handler: Arc<SchemaExportHandler<E>>) -> Router
where
    E: SchemaExportService + 'static,
{
    Router::new()
        .route("/schema_export", post(handle_schema_export_axum::<E>))
        .route("/health", get(|| async { "ok" }))
        .with_state(handler)
}

async fn handle_schema_export_axum<E>(
    State(handler): State<Arc<SchemaExportHandler<E>>>,
    body: AxumBytes,
) -> Response
where
    E: SchemaExportService + 'static,
{
    let form = match std::str::from_utf8(&body) {
        Ok(text) => match FormRequest::from_urlencoded(text) {
            Ok(form) => form,
            Err(e) => return (StatusCode::BAD_REQUEST, e.to_string()).into_response(),
        },
        Err(_) => {
            return (StatusCode::BAD_REQUEST, "request body is not valid UTF-8").into_response()
        }
    };

    // Artifact reads are blocking file I/O
    let joined = tokio::task::spawn_blocking(move || {
        let mut renderer = ResponseRenderer::new();
        let outcome = handler.handle(&form, &mut renderer);
        (outcome, renderer)
    })
    .await;

    match joined {
        Ok((HandleOutcome::Download(download), _)) => download_into_response(download),
        Ok((HandleOutcome::NoContent, renderer)) => {
            let status = if renderer.is_success() {
                StatusCode::OK
            } else {
                StatusCode::BAD_REQUEST
            };
            (status, Json(renderer)).into_response()
        }
        Err(e) => {
            error!(error = %e, "schema export task failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

fn download_into_response(download: DownloadResponse) -> Response {
    let mut builder = Response::builder().status(StatusCode::OK);
    for (name, value) in download.headers.iter() {
        builder = builder.header(name, value);
    }

    builder.body(Body::from(download.body)).unwrap_or_else(|e| {
        error!(error = %e, "invalid download headers");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            [(header::CONTENT_TYPE, "text/plain")],
            "invalid download headers",
        )
            .into_response()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::download::download_headers;
    use bytes::Bytes;

    #[test]
    fn download_headers_are_copied_to_response() {
        let download = DownloadResponse {
            headers: download_headers("world.pdf", "application/pdf", 4, false),
            body: Bytes::from_static(b"%PDF"),
        };
        let response = download_into_response(download);
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/pdf"
        );
        assert_eq!(response.headers().get(header::CONTENT_LENGTH).unwrap(), "4");
        assert_eq!(
            response.headers().get(header::CONTENT_DISPOSITION).unwrap(),
            "attachment; filename=\"world.pdf\""
        );
    }

    #[test]
    fn invalid_media_type_becomes_server_error() {
        let download = DownloadResponse {
            headers: download_headers("x.pdf", "bad\nvalue", 1, false),
            body: Bytes::from_static(b"x"),
        };
        let response = download_into_response(download);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
