use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use ferrodash_core::{DatasetLoader, ReqwestHttpClient};
use ferrodash_web::cli::Cli;
use ferrodash_web::{build_router, AppState, ServerConfig, ServerError};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match run(ServerConfig::from(Cli::parse())).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::from(error.exit_code())
        }
    }
}

async fn run(config: ServerConfig) -> Result<(), ServerError> {
    let addr = config.socket_addr()?;

    let loader = DatasetLoader::new(Arc::new(ReqwestHttpClient::new()))
        .with_timeout_ms(config.timeout_ms);
    let datasets = loader.load(&config.sources).await?;

    let report = datasets.integrity_report();
    if config.strict {
        report.ensure_consistent()?;
    }
    for message in report.messages() {
        tracing::warn!(%message, "dataset stock keys disagree");
    }

    let app = build_router(AppState::new(datasets));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("ferrodash listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received, stopping");
}
