//! # Auth Service
//!
//! Thin entry point that delegates to lib-web for server setup.

use lib_web::{start_server, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = ServerConfig {
        bind_address: lib_utils::env_or("BIND_ADDRESS", "127.0.0.1:8000"),
    };

    start_server(config).await
}
