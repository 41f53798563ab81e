use anyhow::Context;
use tokio::net::TcpListener;
use todo_server::{telemetry, InMemoryTodoStore, ServerConfig};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init_tracing();

    let config = ServerConfig::from_env()?;
    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, "listening");

    todo_server::run(listener, InMemoryTodoStore::new()).await?;
    Ok(())
}
