//! Food review API stub server.

use clap::Parser;
use foody_stub::{InMemoryFoodStorage, StubConfig, create_app_with_config, init_logging};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = StubConfig::parse();
    init_logging(&config.log_level);

    if let Err(errors) = config.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        std::process::exit(1);
    }

    info!(
        port = config.port,
        host = %config.host,
        username = %config.username,
        "Starting Food API stub"
    );

    let addr = config.socket_addr();
    let app = create_app_with_config(InMemoryFoodStorage::new(), config);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(address = %addr, "Server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
