//! Folio Prerender Server
//!
//! Run with: cargo run --bin folio-server
//!
//! # Configuration
//!
//! Reads the usual config locations (see `folio config`), then:
//! - `FOLIO_DATA`: Portfolio document path or URL (default: portfolio_data.json)
//! - `FOLIO_HOST`: Host to bind to (default: 127.0.0.1)
//! - `FOLIO_PORT`: Port to listen on (default: 8080)
//! - `FOLIO_LOG_LEVEL` / `FOLIO_LOG_FORMAT`: Logging
//! - `RUST_LOG`: Full log filter, wins over `FOLIO_LOG_LEVEL`

use folio::config::Config;
use folio::loader::{self, LoadError};
use folio::server::{serve, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load_default();
    folio::logging::init_tracing(&config.logging);

    tracing::info!("Starting Folio server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Portfolio document: {}", config.site.data);

    // The document is loaded once; a bad document stops startup
    let source = loader::source_for(&config.site.data);
    let response = source.fetch().await.map_err(fail)?;
    let document = loader::parse_response(&response).map_err(fail)?;

    tracing::info!(
        title = %document.title,
        projects = document.projects.len(),
        "Portfolio document loaded"
    );

    let state = AppState::new(
        document,
        response.body,
        config.layout.clone(),
        config.site.data.clone(),
    );
    serve(state, &config.server).await?;

    tracing::info!("Folio server stopped");
    Ok(())
}

fn fail(e: LoadError) -> anyhow::Error {
    tracing::error!("{}", e.report());
    e.into()
}
