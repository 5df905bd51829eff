mod auth;
mod backend;
mod config;
mod conversation;
mod protocol;
mod server;

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use auth::StaticSecret;
use backend::openai::{MAX_TOKENS, MODEL};
use backend::{Backend, OpenAi, OpenAiConfig};
use config::{normalize_addr, Config};
use server::welcome::WelcomePage;

#[tokio::main]
async fn main() {
    let config = Config::parse();

    // Configure logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match config.log_format.as_str() {
        "json" => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .json()
                .init();
        }
        _ => {
            tracing_subscriber::fmt().with_env_filter(filter).init();
        }
    }

    // Proxy credential
    let verifier = Arc::new(StaticSecret::new(config.proxy_api_key.clone()));
    if !verifier.is_configured() {
        warn!("PROXY_API_KEY is not set - every request to the generate endpoint will be rejected");
    } else if std::env::var("PROXY_API_KEY").is_err() {
        warn!("proxy API key provided via command-line flag - use PROXY_API_KEY env var in production");
    }

    // Upstream credential
    let openai_api_key = config.openai_api_key.clone().filter(|k| !k.is_empty());
    match &openai_api_key {
        Some(_) => {
            if std::env::var("OPENAI_API_KEY").is_err() {
                warn!("OpenAI API key provided via command-line flag - use OPENAI_API_KEY env var in production");
            }
        }
        None => {
            warn!("OPENAI_API_KEY is not set - authorized requests will fail upstream");
        }
    }

    let http_client = match reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(30))
        .pool_idle_timeout(Duration::from_secs(90))
        .pool_max_idle_per_host(10)
        .build()
    {
        Ok(client) => client,
        Err(e) => {
            error!(error = %e, "failed to build HTTP client");
            std::process::exit(1);
        }
    };

    let timeout = match config.upstream_timeout_secs {
        0 => None,
        secs => Some(Duration::from_secs(secs)),
    };

    let backend = Arc::new(OpenAi::new(OpenAiConfig {
        base_url: Some(config.openai_base_url.clone()),
        api_key: openai_api_key,
        timeout,
        http_client,
    }));

    info!(
        backend = backend.name(),
        base_url = backend.base_url(),
        model = MODEL,
        max_tokens = MAX_TOKENS,
        timeout_secs = config.upstream_timeout_secs,
        "using backend"
    );

    let welcome = WelcomePage::new(config.welcome_format, &config.public_url);
    let app = server::build_router(backend, verifier, welcome);

    let addr = normalize_addr(&config.addr);
    let listener = TcpListener::bind(&addr).await.unwrap_or_else(|e| {
        error!(addr = addr, error = %e, "failed to bind");
        std::process::exit(1);
    });

    info!(addr = addr, "server starting");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap_or_else(|e| {
            error!(error = %e, "server error");
            std::process::exit(1);
        });

    info!("server stopped");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "failed to listen for ctrl+c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("received SIGINT, shutting down"),
        _ = terminate => info!("received SIGTERM, shutting down"),
    }
}
