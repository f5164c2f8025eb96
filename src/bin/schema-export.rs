use anyhow::Context;
use clap::Parser;
use schema_export::cli::Cli;
use schema_export::config::Config;
use schema_export::native::init_tracing;
use schema_export::tracing::{info, warn};
use schema_export::{build_router_with_handler, ArtifactExporter, DocLinks, SchemaExportHandler};
use std::sync::Arc;

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        eprintln!("failed to listen for shutdown signal: {}", e);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::resolve(&cli)?;

    init_tracing(config.log_format);

    let handler = SchemaExportHandler::new(
        ArtifactExporter::new(&config.artifact_dir),
        DocLinks::new(&config.docs_base_url),
    );
    if !handler.export_service().root().is_dir() {
        warn!(
            artifact_dir = %config.artifact_dir.display(),
            "artifact directory does not exist; every export will fail"
        );
    }

    let listener = tokio::net::TcpListener::bind(&config.listen)
        .await
        .with_context(|| format!("Failed to bind {}", config.listen))?;

    info!(
        listen = %config.listen,
        artifact_dir = %config.artifact_dir.display(),
        "schema export server started"
    );

    axum::serve(listener, build_router_with_handler(Arc::new(handler)))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}
