use std::net::SocketAddr;

use axum::{Json, Router, routing::get};
use taskmanager_cors::{CorsPolicyProvider, with_cors};
use tracing_subscriber::EnvFilter;

async fn list_tasks() -> Json<Vec<String>> {
    Json(Vec::new())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let provider = CorsPolicyProvider::global()?;
    let app = with_cors(
        Router::new().route("/tarefas", get(list_tasks)),
        provider.shared(),
    );

    let addr: SocketAddr = "127.0.0.1:8080".parse()?;
    tracing::info!(%addr, "task manager CORS demo listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
