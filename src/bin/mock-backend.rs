//! Local stand-in for the backend.
//!
//! Serves the hello endpoint the status page queries plus a health route.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use clap::Parser;
use serde_json::{json, Value};

use backend_status::config::ObservabilityConfig;
use backend_status::observability::init_logging;

#[derive(Parser)]
#[command(name = "mock-backend")]
#[command(about = "Serve /api/hello and /api/health for local runs", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "127.0.0.1:5000")]
    bind: SocketAddr,

    /// Message returned by /api/hello.
    #[arg(short, long, default_value = "Hola desde el backend de Flask!")]
    message: String,
}

async fn hello(State(message): State<Arc<str>>) -> Json<Value> {
    tracing::debug!("GET /api/hello");
    Json(json!({ "message": &*message }))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(&ObservabilityConfig::default())?;

    let app = Router::new()
        .route("/api/hello", get(hello))
        .route("/api/health", get(health))
        .with_state(Arc::<str>::from(cli.message));

    let listener = tokio::net::TcpListener::bind(cli.bind).await?;
    tracing::info!(address = %listener.local_addr()?, "Mock backend listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await?;

    Ok(())
}
