use clap::Parser;
use copytrace_core::config;
use copytrace_server::api::create_router;
use copytrace_server::api::handlers::AppState;
use copytrace_server::fetch::WebFetcher;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "copytrace", about = "Plagiarism detection service")]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value_t = config::DEFAULT_PORT)]
    port: u16,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = config::REQUEST_TIMEOUT_SECS)]
    request_timeout: u64,

    /// Outbound search/page-fetch timeout in seconds
    #[arg(long, default_value_t = config::FETCH_TIMEOUT_SECS)]
    fetch_timeout: u64,

    /// Search endpoint scraped for candidate sources
    #[arg(long, default_value = config::DEFAULT_SEARCH_BASE)]
    search_base: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(
                    "copytrace_server=info"
                        .parse()
                        .expect("valid directive literal"),
                )
                .add_directive(
                    "copytrace_core=info"
                        .parse()
                        .expect("valid directive literal"),
                ),
        )
        .init();

    let args = Args::parse();

    if args.port == 0 {
        eprintln!("Error: port must be > 0");
        std::process::exit(1);
    }
    if args.fetch_timeout == 0 || args.request_timeout == 0 {
        eprintln!("Error: timeouts must be > 0");
        std::process::exit(1);
    }

    let prometheus_handle =
        metrics_exporter_prometheus::PrometheusBuilder::new().install_recorder()?;

    let fetcher =
        WebFetcher::new(Duration::from_secs(args.fetch_timeout)).with_search_base(args.search_base);

    let state = AppState {
        fetcher,
        prometheus_handle,
        start_time: Instant::now(),
    };
    let app = create_router(state, Duration::from_secs(args.request_timeout));

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", args.port)).await?;
    tracing::info!(port = args.port, "copytrace listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server closed");
    Ok(())
}

/// Resolves on ctrl-c or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c().await.expect("ctrl-c handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
