//! HTTP entry point for the bingo caller.

use tracing::info;

use bingo_caller::config::ServerConfig;
use bingo_caller::web;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env();
    let app = web::routes::router(web::handler::new_store());

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!(addr = %config.bind_addr, "bingo caller listening");
    axum::serve(listener, app).await
}
