use bs_pricer::errors::PricerResult;
use bs_pricer::{config, server, state::AppState};

#[tokio::main]
async fn main() {
    // Config first: APP_DEBUG decides the default log level
    let cfg = config::AppConfig::from_env();

    let default_filter = cfg.as_ref().map(|c| c.default_log_filter()).unwrap_or("info");
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cfg = match cfg {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("config error: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!(debug = cfg.debug, static_dir = %cfg.static_dir.display(), "bs_pricer starting");

    if let Err(e) = serve(cfg).await {
        tracing::error!("server error: {e}");
        std::process::exit(1);
    }

    tracing::info!("server stopped");
}

/// Bind the configured address and serve until ctrl-c.
async fn serve(cfg: config::AppConfig) -> PricerResult<()> {
    let addr = cfg.bind_addr();
    let app = server::router(AppState::new(cfg));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for ctrl-c: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
