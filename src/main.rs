//! Lyric Match Back binary entrypoint wiring configuration, text generation and REST layers.

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lyric_match_back::{
    config::{ServerConfig, load_catalog},
    dao::text_generator::{
        TextGenerator,
        gemini::{GeminiConfig, GeminiConfigError, GeminiGenerator},
    },
    routes,
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(err) = dotenvy::dotenv() {
        if !err.not_found() {
            return Err(err).context("loading .env file");
        }
    }
    init_tracing();

    let config = ServerConfig::from_env();
    let catalog = load_catalog(&config.catalog_path);
    let generator = build_generator()?;

    let app_state = AppState::new(catalog, generator);
    let app = routes::app(app_state, &config.allowed_origin);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!(%addr, allowed_origin = %config.allowed_origin, "starting server");

    let listener = TcpListener::bind(addr).await.context("binding server")?;
    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving axum")?;

    Ok(())
}

/// Build the Gemini generator, or run degraded when no credential is configured.
fn build_generator() -> anyhow::Result<Option<Arc<dyn TextGenerator>>> {
    match GeminiConfig::from_env() {
        Ok(config) => {
            info!(model = %config.model, timeout = ?config.timeout, "text generation enabled");
            let generator: Arc<dyn TextGenerator> =
                Arc::new(GeminiGenerator::new(config).context("building Gemini client")?);
            Ok(Some(generator))
        }
        Err(err @ GeminiConfigError::MissingEnvVar { .. }) => {
            warn!(error = %err, "text generation disabled; entering degraded mode");
            Ok(None)
        }
        Err(err) => Err(err).context("reading Gemini configuration"),
    }
}

/// Configure tracing subscribers so logs include spans by default.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,tower_http=debug".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Wait for Ctrl+C or SIGTERM and shut the server down gracefully.
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let mut term = signal(SignalKind::terminate()).expect("install SIGTERM handler");
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {},
            _ = term.recv() => {},
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}
