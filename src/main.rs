use anyhow::Context;
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use dual_search::api::create_router;
use dual_search::config::{Config, parse_endpoint};
use dual_search::search_client::SearchClient;

#[derive(Parser, Debug)]
#[command(version, about = "Search two keywords at once and view the results in the browser")]
struct Args {
    /// Address to listen on (overrides BIND_ADDR)
    #[arg(long)]
    addr: Option<SocketAddr>,

    /// Search API endpoint (overrides SERPER_ENDPOINT)
    #[arg(long)]
    endpoint: Option<String>,

    /// Results kept per keyword (overrides SEARCH_MAX_RESULTS)
    #[arg(long)]
    max_results: Option<usize>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("dual_search=info,tower_http=info")),
        )
        .with_target(true)
        .init();

    let args = Args::parse();
    let mut config = Config::from_env()?;
    if let Some(addr) = args.addr {
        config.bind_addr = addr;
    }
    if let Some(endpoint) = args.endpoint {
        config.endpoint = parse_endpoint(&endpoint).context("Invalid --endpoint")?;
    }
    if let Some(max_results) = args.max_results {
        config.max_results = max_results;
    }

    if config.api_key.is_none() {
        tracing::warn!("SERPER_API_KEY is not set; searches will fail until it is configured");
    }

    let search_client =
        SearchClient::from_config(&config).context("Failed to build search client")?;
    let app = create_router(Arc::new(search_client));

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    tracing::info!("listening on http://{}", config.bind_addr);
    tracing::info!("forwarding searches to {}", config.endpoint);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
