mod config;
mod routes;

#[tokio::main]
async fn main() {
    // Before tracing init so RUST_LOG from .env applies.
    let dotenv = dotenvy::dotenv();
    tracing_subscriber::fmt::init();
    match dotenv {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!(error = %e, "ignoring unreadable .env"),
    }

    let config = config::ServerConfig::from_env().expect("invalid server configuration");

    // Refuse to serve a page that can only render its error notice.
    let site = match client::site::site() {
        Ok(site) => site,
        Err(e) => {
            tracing::error!(error = %e, "site configuration rejected");
            std::process::exit(1);
        }
    };
    tracing::info!(entries = site.catalog.len(), brand = %site.brand.name, "site configuration loaded");

    let app = routes::app(&config).expect("router assembly failed");
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, assets = %config.assets_dir.display(), "deeple listening");
    axum::serve(listener, app).await.expect("server failed");
}
