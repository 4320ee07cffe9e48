//! hello-api entrypoint

use hello_api::{app, observability, server::Server, Config, Result};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = Config::load()?;

    // Initialize tracing subscriber
    observability::init_tracing(&config)?;

    // Build the router and the endpoint catalog
    let (router, endpoints) = app(&config);

    // Startup banner: address, docs hint, and the registered endpoints
    tracing::info!(
        "Starting {} on http://localhost:{}",
        config.service.name,
        config.service.port
    );
    tracing::info!(
        "API docs: http://localhost:{}/api/v1/health",
        config.service.port
    );
    for endpoint in endpoints.iter() {
        tracing::info!("  {}", endpoint.render());
    }

    // Serve until SIGINT/SIGTERM
    Server::new(config).serve(router).await?;

    Ok(())
}
