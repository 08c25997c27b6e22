//! memgrow server
//!
//! - Status endpoint on every path: allocation count, interval, message
//! - Background allocator: one chunk per interval until the target count
//! - `/healthz`, `/metrics`
//! - Listens on `PORT` (default 8080); optional YAML via `MEMGROW_CONFIG`

use memgrow_server::{config, obs, server};

#[tokio::main]
async fn main() {
    obs::trace::init();
    tracing::info!("service starting up");

    let result = match config::load_from_env() {
        Ok(cfg) => server::run(cfg).await,
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        tracing::error!(code = e.code(), error = %e, "fatal");
        std::process::exit(1);
    }
}
