use backend::routes::build_app;
use backend::shared::config;
use backend::shared::data::context::{initialize_context, AppContext};
use backend::system;
use std::net::{IpAddr, SocketAddr};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    system::tracing::initialize()?;

    let config = config::load_config()?;
    let context = AppContext::from_config(&config);

    // Прогрев кэша; ошибка не фатальна, страница покажет сообщение
    match context.catalog() {
        Ok(catalog) => tracing::info!("Catalog ready: {} products", catalog.len()),
        Err(e) => tracing::error!("Catalog is not available yet: {}", e),
    }

    initialize_context(context)?;

    let app = build_app(&config.static_files);

    let host: IpAddr = config
        .server
        .host
        .parse()
        .map_err(|e| anyhow::anyhow!("invalid server host '{}': {}", config.server.host, e))?;
    let addr = SocketAddr::new(host, config.server.port);

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    addr.port()
                );
            } else {
                tracing::error!("Failed to bind to {}. Error: {}", addr, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
